use crate::{
    animation::UpdatePolicy,
    pacing::{DEFAULT_FPS, FramePacer},
    state::{RenderState, SurfaceSize, WaveParams},
};
use rand::Rng;
pub use rgb_int::Rgb24;
use std::f32::consts::{PI, TAU};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FREQUENCY: f32 = PI;

/// Startup configuration. The render state and the display are both built
/// from this and it isn't consulted again once the loop is running.
#[derive(Clone)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub frequency: f32,
    /// Defaults to half the height.
    pub amplitude: Option<f32>,
    /// Chosen at random when not set.
    pub phase: Option<f32>,
    pub fps: u32,
    pub foreground: Rgb24,
    pub background: Rgb24,
    pub update_policy: UpdatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fullscreen: false,
            frequency: DEFAULT_FREQUENCY,
            amplitude: None,
            phase: None,
            fps: DEFAULT_FPS,
            foreground: Rgb24::new_grey(255),
            background: Rgb24::new_grey(0),
            update_policy: UpdatePolicy::Static,
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!(
                "surface must be at least 1x1 pixels (got {}x{})",
                self.width,
                self.height
            );
        }
        if self.fps == 0 {
            anyhow::bail!("frame rate must be at least 1");
        }
        if !self.frequency.is_finite() {
            anyhow::bail!("frequency must be a finite number");
        }
        if let Some(amplitude) = self.amplitude {
            if !amplitude.is_finite() {
                anyhow::bail!("amplitude must be a finite number");
            }
        }
        if let Some(phase) = self.phase {
            if !phase.is_finite() {
                anyhow::bail!("phase must be a finite number");
            }
        }
        if let UpdatePolicy::OscillateFrequency(oscillation) =
            &self.update_policy
        {
            oscillation.validate()?;
        }
        Ok(())
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude.unwrap_or((self.height / 2) as f32)
    }

    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn frame_pacer(&self) -> anyhow::Result<FramePacer> {
        FramePacer::from_fps(self.fps)
    }

    pub fn render_state<R: Rng + ?Sized>(&self, rng: &mut R) -> RenderState {
        let phase = self.phase.unwrap_or_else(|| rng.gen_range(0.0..TAU));
        RenderState::new(
            self.surface_size(),
            WaveParams {
                frequency: self.frequency,
                phase,
                amplitude: self.amplitude(),
            },
        )
    }
}
