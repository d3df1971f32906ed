#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// The row that bars are drawn up from.
    pub fn centre_y(&self) -> i32 {
        (self.height / 2) as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Number of full cycles across the width of the surface.
    pub frequency: f32,
    /// Offset added to the argument of the sine, in radians.
    pub phase: f32,
    /// Peak bar height in pixels.
    pub amplitude: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Self::Rising => 1.0,
            Self::Falling => -1.0,
        }
    }
}

/// Everything the frame loop reads and writes while running. Built once at
/// startup and owned by the caller of the loop.
#[derive(Debug, Clone)]
pub struct RenderState {
    surface_size: SurfaceSize,
    pub(crate) wave: WaveParams,
    pub(crate) direction: Direction,
    quit_requested: bool,
}

impl RenderState {
    pub fn new(surface_size: SurfaceSize, wave: WaveParams) -> Self {
        Self {
            surface_size,
            wave,
            direction: Direction::Rising,
            quit_requested: false,
        }
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface_size
    }

    pub fn wave(&self) -> &WaveParams {
        &self.wave
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Once set there is no way to clear the request.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state() -> RenderState {
        RenderState::new(
            SurfaceSize {
                width: 800,
                height: 600,
            },
            WaveParams {
                frequency: 1.0,
                phase: 0.0,
                amplitude: 300.0,
            },
        )
    }

    #[test]
    fn starts_running() {
        let state = state();
        assert!(!state.quit_requested());
        assert_eq!(state.direction(), Direction::Rising);
    }

    #[test]
    fn quit_request_is_sticky() {
        let mut state = state();
        state.request_quit();
        state.request_quit();
        assert!(state.quit_requested());
    }

    #[test]
    fn centre_of_odd_height_rounds_down() {
        let size = SurfaceSize {
            width: 10,
            height: 201,
        };
        assert_eq!(size.centre_y(), 100);
    }
}
