use crate::{
    state::{RenderState, WaveParams},
    surface::Surface,
};
use std::f32::consts::PI;

/// A vertical line from `top` down to `bottom` in column `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Value of the wave in `[-1, 1]` at column `x` of a surface `width` pixels wide.
pub fn sample(wave: &WaveParams, x: u32, width: u32) -> f32 {
    let position = x as f32 / width as f32;
    (2.0 * PI * wave.frequency * position + wave.phase).sin()
}

pub fn bar_height(wave: &WaveParams, x: u32, width: u32) -> u32 {
    let max_height = wave.amplitude.abs().round();
    (wave.amplitude * sample(wave, x, width))
        .abs()
        .round()
        .min(max_height) as u32
}

/// One bar per column, each rising from the vertical centre of the surface,
/// which gives a rectified silhouette of the wave.
pub fn bars(state: &RenderState) -> impl Iterator<Item = Bar> + '_ {
    let size = state.surface_size();
    let centre_y = size.centre_y();
    (0..size.width).map(move |x| {
        let height = i32::try_from(bar_height(state.wave(), x, size.width))
            .unwrap_or(i32::MAX);
        Bar {
            x: x as i32,
            top: centre_y.saturating_sub(height),
            bottom: centre_y,
        }
    })
}

pub fn render<S: Surface>(
    state: &RenderState,
    surface: &mut S,
) -> anyhow::Result<()> {
    surface.clear()?;
    for Bar { x, top, bottom } in bars(state) {
        surface.draw_vertical_line(x, top, bottom)?;
    }
    surface.present()
}
