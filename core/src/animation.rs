use crate::state::{Direction, RenderState};
use std::time::Duration;

/// Sweeps the frequency back and forth between `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyOscillation {
    pub min: f32,
    pub max: f32,
    /// Change in frequency per millisecond.
    pub rate_per_ms: f32,
}

impl Default for FrequencyOscillation {
    fn default() -> Self {
        Self {
            min: 0.01,
            max: 0.1,
            rate_per_ms: 0.00005,
        }
    }
}

impl FrequencyOscillation {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            anyhow::bail!("frequency band must be finite");
        }
        if self.min >= self.max {
            anyhow::bail!(
                "minimum frequency ({}) must be less than maximum frequency ({})",
                self.min,
                self.max
            );
        }
        if !(self.rate_per_ms.is_finite() && self.rate_per_ms >= 0.0) {
            anyhow::bail!(
                "frequency rate must be a non-negative number (got {})",
                self.rate_per_ms
            );
        }
        Ok(())
    }

    fn update(&self, state: &mut RenderState, elapsed: Duration) {
        let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
        state.wave.frequency +=
            elapsed_ms * state.direction.sign() * self.rate_per_ms;
        // Outside the band the direction always points back into it.
        if state.wave.frequency < self.min {
            state.direction = Direction::Rising;
        } else if state.wave.frequency > self.max {
            state.direction = Direction::Falling;
        }
    }
}

/// How the wave changes from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum UpdatePolicy {
    #[default]
    Static,
    OscillateFrequency(FrequencyOscillation),
}

impl UpdatePolicy {
    pub fn update(&self, state: &mut RenderState, elapsed: Duration) {
        match self {
            Self::Static => (),
            Self::OscillateFrequency(oscillation) => {
                oscillation.update(state, elapsed)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::{SurfaceSize, WaveParams};

    fn state(frequency: f32) -> RenderState {
        RenderState::new(
            SurfaceSize {
                width: 800,
                height: 600,
            },
            WaveParams {
                frequency,
                phase: 0.0,
                amplitude: 300.0,
            },
        )
    }

    fn oscillation() -> FrequencyOscillation {
        FrequencyOscillation {
            min: 1.0,
            max: 2.0,
            rate_per_ms: 0.01,
        }
    }

    #[test]
    fn static_policy_leaves_wave_alone() {
        let mut state = state(3.0);
        for _ in 0..100 {
            UpdatePolicy::Static.update(&mut state, Duration::from_millis(33));
        }
        assert_eq!(state.wave().frequency, 3.0);
        assert_eq!(state.direction(), Direction::Rising);
    }

    #[test]
    fn frequency_moves_with_elapsed_time() {
        let mut state = state(1.5);
        UpdatePolicy::OscillateFrequency(oscillation())
            .update(&mut state, Duration::from_millis(10));
        assert!((state.wave().frequency - 1.6).abs() < 1e-5);
        assert_eq!(state.direction(), Direction::Rising);
    }

    #[test]
    fn direction_reverses_on_leaving_band() {
        let policy = UpdatePolicy::OscillateFrequency(oscillation());
        let mut state = state(1.95);
        policy.update(&mut state, Duration::from_millis(10));
        assert_eq!(state.direction(), Direction::Falling);
        policy.update(&mut state, Duration::from_millis(10));
        assert!((state.wave().frequency - 1.95).abs() < 1e-5);
    }

    #[test]
    fn direction_reverses_at_bottom_of_band() {
        let policy = UpdatePolicy::OscillateFrequency(oscillation());
        let mut state = state(1.5);
        state.direction = Direction::Falling;
        policy.update(&mut state, Duration::from_millis(60));
        assert!(state.wave().frequency < 1.0);
        assert_eq!(state.direction(), Direction::Rising);
    }

    #[test]
    fn stays_within_reach_of_band() {
        let policy = UpdatePolicy::OscillateFrequency(oscillation());
        let mut state = state(1.0);
        for _ in 0..1000 {
            policy.update(&mut state, Duration::from_millis(7));
            assert!(state.wave().frequency > 0.9);
            assert!(state.wave().frequency < 2.1);
        }
    }

    #[test]
    fn rejects_empty_band() {
        let oscillation = FrequencyOscillation {
            min: 2.0,
            max: 1.0,
            rate_per_ms: 0.01,
        };
        assert!(oscillation.validate().is_err());
        assert!(FrequencyOscillation::default().validate().is_ok());
    }
}
