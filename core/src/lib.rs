//! Display-independent parts of the sin wave renderer. A [`RenderState`] is
//! built from a [`Config`] at startup and handed to a [`FrameLoop`], which
//! draws the wave to any [`Surface`] and reads input from any
//! [`EventSource`] until a quit is requested.

pub mod animation;
pub use animation::{FrequencyOscillation, UpdatePolicy};
pub mod config;
pub use config::{Config, Rgb24};
pub mod frame_loop;
pub use frame_loop::{FrameLoop, LoopState};
pub mod input;
pub use input::{EventSource, InputEvent, Key};
pub mod pacing;
pub use pacing::{Clock, FramePacer, SystemClock};
pub mod state;
pub use state::{Direction, RenderState, SurfaceSize, WaveParams};
pub mod surface;
pub use surface::Surface;
pub mod wave;
