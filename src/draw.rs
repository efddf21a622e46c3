// Window glue over minifb.
// Visual effects provided here:
// 1) A fixed-size window placed near the top of the screen.
// 2) Each finished frame blitted 1:1 onto it.
// 3) Close button and key presses turned into loop events.

use std::collections::VecDeque;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use tracing::{debug, trace};

use crate::error::Error;
use crate::pacer::{Event, EventSource, KeyCode, Surface};
use crate::types::FrameBuffer;

pub struct Drawer {
    window: Window,            // the on-screen window you see
    pending: VecDeque<Event>,  // events seen during the last present, not yet polled
}

impl Drawer {
    /// Create a window whose client area is exactly `width` x `height`.
    /// Visual: a new black window appears at `position` with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, position: (isize, isize)) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_position(position.0, position.1);
        // the loop paces itself; no sleeping inside update
        window.set_target_fps(0);
        debug!(title, width, height, x = position.0, y = position.1, "window created");

        Ok(Self { window, pending: VecDeque::new() })
    }

    /// Snapshot window state into queued events.
    /// minifb only refreshes this state while pushing a buffer, so it runs right after.
    fn collect_events(&mut self) {
        if !self.window.is_open() {
            self.pending.push_back(Event::Quit);
        }
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            self.pending.push_back(Event::KeyDown(key_code(key)));
        }
        for key in self.window.get_keys_released() {
            self.pending.push_back(Event::KeyUp(key_code(key)));
        }
    }
}

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Escape => KeyCode::Escape,
        other => KeyCode::Other(other as u32),
    }
}

impl Surface for Drawer {
    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(frame.as_u32(), frame.width(), frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        self.collect_events();
        Ok(())
    }
}

impl EventSource for Drawer {
    fn poll_event(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    fn dispatch(&mut self, event: Event) {
        // minifb has already run the platform handlers by the time we see the event
        trace!(?event, "handled by minifb");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_maps_to_the_stop_key() {
        assert_eq!(key_code(Key::Escape), KeyCode::Escape);
        assert!(Event::KeyDown(key_code(Key::Escape)).is_stop());
    }

    #[test]
    fn other_keys_keep_their_code() {
        assert_eq!(key_code(Key::A), KeyCode::Other(Key::A as u32));
        assert!(!Event::KeyUp(key_code(Key::Space)).is_stop());
    }
}
