//! SDL2 implementations of the display seams used by `sin_wave_core`.

use anyhow::anyhow;
use sdl2::{
    EventPump, Sdl,
    event::Event,
    keyboard::Keycode,
    pixels::Color,
    rect::Point,
    render::Canvas,
    video::Window,
};
use sin_wave_core::{Config, EventSource, InputEvent, Key, Rgb24, Surface};

pub const TITLE: &str = "Sin Wave";

fn color(rgb24: Rgb24) -> Color {
    Color::RGB(rgb24.r, rgb24.g, rgb24.b)
}

pub struct SdlSurface {
    canvas: Canvas<Window>,
    foreground: Color,
    background: Color,
}

impl Surface for SdlSurface {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.canvas.set_draw_color(self.background);
        self.canvas.clear();
        self.canvas.set_draw_color(self.foreground);
        Ok(())
    }

    fn draw_vertical_line(
        &mut self,
        x: i32,
        top: i32,
        bottom: i32,
    ) -> anyhow::Result<()> {
        self.canvas
            .draw_line(Point::new(x, top), Point::new(x, bottom))
            .map_err(|e| anyhow!(e))
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.canvas.present();
        Ok(())
    }
}

fn key_from_keycode(keycode: Option<Keycode>) -> Key {
    match keycode {
        Some(Keycode::Q) => Key::Q,
        _ => Key::Other,
    }
}

fn key_down(keycode: Option<Keycode>) -> InputEvent {
    InputEvent::KeyDown(key_from_keycode(keycode))
}

fn input_event(event: Event) -> InputEvent {
    match event {
        Event::Quit { .. } => InputEvent::Quit,
        Event::KeyDown { keycode, .. } => key_down(keycode),
        _ => InputEvent::Other,
    }
}

pub struct SdlEvents {
    event_pump: EventPump,
}

impl EventSource for SdlEvents {
    fn poll(&mut self) -> Option<InputEvent> {
        self.event_pump.poll_event().map(input_event)
    }
}

/// The window, its renderer and the event pump. Everything is released when
/// this is dropped.
pub struct Display {
    pub surface: SdlSurface,
    pub events: SdlEvents,
    _sdl_context: Sdl,
}

impl Display {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let mut window_builder =
            video_subsystem.window(TITLE, config.width, config.height);
        if config.fullscreen {
            window_builder.fullscreen_desktop();
        }
        let window = window_builder.build()?;
        let mut canvas = window.into_canvas().build()?;
        // Draw in configured coordinates regardless of the real window size,
        // which differs from the configured size when fullscreen.
        canvas.set_logical_size(config.width, config.height)?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "opened {}x{} window (fullscreen: {})",
            config.width,
            config.height,
            config.fullscreen
        );
        Ok(Self {
            surface: SdlSurface {
                canvas,
                foreground: color(config.foreground),
                background: color(config.background),
            },
            events: SdlEvents { event_pump },
            _sdl_context: sdl_context,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn q_is_the_only_recognised_key() {
        assert_eq!(key_from_keycode(Some(Keycode::Q)), Key::Q);
        assert_eq!(key_from_keycode(Some(Keycode::W)), Key::Other);
        assert_eq!(key_from_keycode(None), Key::Other);
    }

    #[test]
    fn pressing_q_is_a_quit_key_press() {
        assert_eq!(key_down(Some(Keycode::Q)), InputEvent::KeyDown(Key::Q));
        assert_eq!(
            key_down(Some(Keycode::Escape)),
            InputEvent::KeyDown(Key::Other)
        );
    }

    #[test]
    fn window_close_is_a_quit() {
        assert_eq!(input_event(Event::Quit { timestamp: 0 }), InputEvent::Quit);
    }

    #[test]
    fn colors_keep_their_channels() {
        assert_eq!(color(Rgb24::new(1, 2, 3)), Color::RGB(1, 2, 3));
    }
}
