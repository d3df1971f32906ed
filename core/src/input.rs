use crate::state::RenderState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Q,
    Other,
}

pub const QUIT_KEY: Key = Key::Q;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    KeyDown(Key),
    Other,
}

pub trait EventSource {
    /// Returns the next pending event, or `None` if there are no events
    /// waiting. Never blocks.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Drains every pending event. Only closing the window or pressing the quit
/// key has any effect.
pub fn handle_events<E: EventSource>(state: &mut RenderState, events: &mut E) {
    while let Some(event) = events.poll() {
        match event {
            InputEvent::Quit => state.request_quit(),
            InputEvent::KeyDown(key) if key == QUIT_KEY => state.request_quit(),
            _ => (),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::{SurfaceSize, WaveParams};
    use std::collections::VecDeque;

    struct Pending(VecDeque<InputEvent>);

    impl EventSource for Pending {
        fn poll(&mut self) -> Option<InputEvent> {
            self.0.pop_front()
        }
    }

    fn state() -> RenderState {
        RenderState::new(
            SurfaceSize {
                width: 4,
                height: 4,
            },
            WaveParams {
                frequency: 1.0,
                phase: 0.0,
                amplitude: 2.0,
            },
        )
    }

    fn handle(events: &[InputEvent]) -> (RenderState, Pending) {
        let mut state = state();
        let mut pending = Pending(events.iter().cloned().collect());
        handle_events(&mut state, &mut pending);
        (state, pending)
    }

    #[test]
    fn window_close_quits() {
        let (state, _) = handle(&[InputEvent::Quit]);
        assert!(state.quit_requested());
    }

    #[test]
    fn quit_key_quits() {
        let (state, _) = handle(&[InputEvent::KeyDown(Key::Q)]);
        assert!(state.quit_requested());
    }

    #[test]
    fn other_input_is_ignored() {
        let (state, _) =
            handle(&[InputEvent::KeyDown(Key::Other), InputEvent::Other]);
        assert!(!state.quit_requested());
    }

    #[test]
    fn drains_every_pending_event() {
        let (state, pending) = handle(&[
            InputEvent::Other,
            InputEvent::Quit,
            InputEvent::KeyDown(Key::Other),
        ]);
        assert!(state.quit_requested());
        assert!(pending.0.is_empty());
    }
}
