// Window facade over minifb. Everything here is pass-through plumbing:
// the scene holds what is drawn, this file shows it and reports input.
//
// Visual effects provided here:
// 1) A window displaying the scene (grid of squares, then the eraser).
// 2) Mouse position / click polling for the eraser to follow.
// 3) Key polling so 'q' can quit.

use std::thread;
use std::time::Duration;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::scene::Scene;
use crate::types::{FrameBuffer, WHITE};

pub struct Canvas {
    window: Window, // the on-screen window you see
    scene: Scene,
    frame: FrameBuffer, // reused every update
}

impl Canvas {
    /// Create a window of the given size with an empty white scene.
    /// Visual: a new blank window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self {
            window,
            scene: Scene::new(),
            frame: FrameBuffer::new(width, height, WHITE),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Render the scene and push it to the window. This is also the
    /// point where minifb processes pending UI events, so call it once
    /// per loop iteration before reading mouse/key state.
    pub fn update(&mut self) -> Result<(), Error> {
        self.scene.render(&mut self.frame);
        self.window
            .update_with_buffer(&self.frame.pixels, self.frame.width, self.frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current mouse position in window pixel coordinates (clamped to the
    /// window, so an off-canvas pointer reads as the nearest edge).
    pub fn mouse_pos(&self) -> (i32, i32) {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
            .unwrap_or((0, 0))
    }

    /// Most recently pressed key as a lowercase character, reported once
    /// per press (the press is consumed by reporting it).
    pub fn last_key_press(&self) -> Option<char> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .find_map(key_to_char)
    }

    /// Poll for a left-button press at a fixed interval, presenting
    /// frames between polls so the window stays live. Returns the
    /// pointer position of the first observed press, or None if the
    /// window is closed while waiting.
    pub fn wait_for_click(&mut self, poll: Duration) -> Result<Option<(i32, i32)>, Error> {
        loop {
            self.update()?;
            if !self.is_open() {
                return Ok(None);
            }
            if self.window.get_mouse_down(MouseButton::Left) {
                return Ok(Some(self.mouse_pos()));
            }
            thread::sleep(poll);
        }
    }
}

/// Map a minifb key to the character the quit check compares against.
/// Only letters and digits matter for this program.
fn key_to_char(key: Key) -> Option<char> {
    let ch = match key {
        Key::A => 'a',
        Key::B => 'b',
        Key::C => 'c',
        Key::D => 'd',
        Key::E => 'e',
        Key::F => 'f',
        Key::G => 'g',
        Key::H => 'h',
        Key::I => 'i',
        Key::J => 'j',
        Key::K => 'k',
        Key::L => 'l',
        Key::M => 'm',
        Key::N => 'n',
        Key::O => 'o',
        Key::P => 'p',
        Key::Q => 'q',
        Key::R => 'r',
        Key::S => 's',
        Key::T => 't',
        Key::U => 'u',
        Key::V => 'v',
        Key::W => 'w',
        Key::X => 'x',
        Key::Y => 'y',
        Key::Z => 'z',
        Key::Key0 => '0',
        Key::Key1 => '1',
        Key::Key2 => '2',
        Key::Key3 => '3',
        Key::Key4 => '4',
        Key::Key5 => '5',
        Key::Key6 => '6',
        Key::Key7 => '7',
        Key::Key8 => '8',
        Key::Key9 => '9',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_key_maps_to_lowercase_q() {
        assert_eq!(key_to_char(Key::Q), Some('q'));
        assert_eq!(key_to_char(Key::Key7), Some('7'));
        assert_eq!(key_to_char(Key::Escape), None);
    }
}
