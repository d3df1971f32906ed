use std::{
    thread,
    time::{Duration, Instant},
};

pub const DEFAULT_FPS: u32 = 30;

/// Source of monotonic time for the frame loop.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Keeps ticks at least one frame duration apart. A tick that overruns is not
/// made up for by shortening later ticks.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame_duration: Duration,
}

impl FramePacer {
    pub fn from_fps(fps: u32) -> anyhow::Result<Self> {
        if fps == 0 {
            anyhow::bail!("frame rate must be at least 1");
        }
        Ok(Self {
            frame_duration: Duration::from_micros(1_000_000 / fps as u64),
        })
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// How long to sleep so that the tick started at `tick_start` lasts one
    /// frame duration. Zero if the tick has already overrun.
    pub fn time_until_next_frame(
        &self,
        tick_start: Instant,
        now: Instant,
    ) -> Duration {
        self.frame_duration
            .checked_sub(now.saturating_duration_since(tick_start))
            .unwrap_or(Duration::ZERO)
    }

    pub fn wait_until_next_frame<C: Clock>(
        &self,
        clock: &mut C,
        tick_start: Instant,
    ) {
        let now = clock.now();
        let period_to_sleep = self.time_until_next_frame(tick_start, now);
        if period_to_sleep.is_zero() {
            log::trace!(
                "frame overran by {:?}",
                now.saturating_duration_since(tick_start)
                    .saturating_sub(self.frame_duration)
            );
        } else {
            clock.sleep(period_to_sleep);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self {
            frame_duration: Duration::from_micros(
                1_000_000 / DEFAULT_FPS as u64,
            ),
        }
    }
}
