use crate::{
    animation::UpdatePolicy,
    input::{self, EventSource},
    pacing::{Clock, FramePacer, SystemClock},
    state::RenderState,
    surface::Surface,
    wave,
};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Polls input, updates the wave, renders it and then sleeps out the rest of
/// the frame, once per tick, until a quit is requested.
pub struct FrameLoop<C: Clock = SystemClock> {
    pacer: FramePacer,
    update_policy: UpdatePolicy,
    clock: C,
    prev_tick_start: Instant,
}

impl FrameLoop<SystemClock> {
    pub fn new(pacer: FramePacer, update_policy: UpdatePolicy) -> Self {
        Self::with_clock(pacer, update_policy, SystemClock)
    }
}

impl<C: Clock> FrameLoop<C> {
    pub fn with_clock(
        pacer: FramePacer,
        update_policy: UpdatePolicy,
        clock: C,
    ) -> Self {
        let prev_tick_start = clock.now();
        Self {
            pacer,
            update_policy,
            clock,
            prev_tick_start,
        }
    }

    /// Runs a single tick. Nothing is updated or rendered in a tick that
    /// observes a quit request.
    pub fn tick<S: Surface, E: EventSource>(
        &mut self,
        state: &mut RenderState,
        surface: &mut S,
        events: &mut E,
    ) -> anyhow::Result<LoopState> {
        let tick_start = self.clock.now();
        let elapsed = tick_start.saturating_duration_since(self.prev_tick_start);
        self.prev_tick_start = tick_start;
        input::handle_events(state, events);
        if state.quit_requested() {
            return Ok(LoopState::Stopped);
        }
        self.update_policy.update(state, elapsed);
        wave::render(state, surface)?;
        self.pacer.wait_until_next_frame(&mut self.clock, tick_start);
        Ok(LoopState::Running)
    }

    /// Ticks until a quit is requested. Returns straight away if one already
    /// has been.
    pub fn run<S: Surface, E: EventSource>(
        &mut self,
        state: &mut RenderState,
        surface: &mut S,
        events: &mut E,
    ) -> anyhow::Result<()> {
        log::debug!(
            "frame loop starting ({:?} per frame)",
            self.pacer.frame_duration()
        );
        let mut num_frames = 0u64;
        while !state.quit_requested() {
            if self.tick(state, surface, events)? == LoopState::Running {
                num_frames += 1;
            }
        }
        log::debug!("frame loop stopped after {} frames", num_frames);
        Ok(())
    }
}
