//! Cursor capture and window-mode requests.
//!
//! Escape releases a captured cursor; a second Escape asks the host to close.
//! Clicking while released recaptures it. The host applies the returned
//! [`WindowRequest`]s; nothing here touches a real window.

use log::debug;

use crate::camera::MouseLook;
use crate::input::{Key, KeyPresses};

/// Windowed placement remembered while fullscreen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowRect {
    /// Left edge in screen pixels.
    pub x: i32,
    /// Top edge in screen pixels.
    pub y: i32,
    /// Client width in pixels.
    pub width: u32,
    /// Client height in pixels.
    pub height: u32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 1280,
            height: 720,
        }
    }
}

/// Something the host window should do this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRequest {
    /// Hide and lock the cursor for mouse look.
    CaptureCursor,
    /// Show a free cursor.
    ReleaseCursor,
    /// Switch to fullscreen on the primary monitor.
    EnterFullscreen,
    /// Return to the remembered windowed placement.
    ExitFullscreen(WindowRect),
    /// Close the window and end the frame loop.
    Close,
}

/// Tracks whether mouse look owns the cursor and the fullscreen toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorCapture {
    locked: bool,
    fullscreen: bool,
    windowed: WindowRect,
}

impl Default for CursorCapture {
    fn default() -> Self {
        Self {
            locked: true,
            fullscreen: false,
            windowed: WindowRect::default(),
        }
    }
}

impl CursorCapture {
    /// Whether the cursor is currently captured for mouse look.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the window is fullscreen.
    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Records the windowed placement to restore after fullscreen.
    pub fn remember_windowed(&mut self, rect: WindowRect) {
        self.windowed = rect;
    }

    /// Reacts to this frame's presses and focus change.
    ///
    /// `look` is reset whenever the cursor is recaptured so the jump between
    /// old and new cursor positions is not read as motion.
    pub fn update(
        &mut self,
        presses: &KeyPresses,
        focus_regained: bool,
        look: &mut MouseLook,
    ) -> Vec<WindowRequest> {
        let mut requests = Vec::new();

        if presses.contains(Key::Escape) {
            if self.locked {
                debug!("cursor released");
                self.locked = false;
                requests.push(WindowRequest::ReleaseCursor);
            } else {
                debug!("close requested");
                requests.push(WindowRequest::Close);
            }
        } else if presses.contains(Key::PrimaryClick) && !self.locked {
            debug!("cursor recaptured");
            self.locked = true;
            look.reset();
            requests.push(WindowRequest::CaptureCursor);
        }

        if focus_regained && self.locked {
            look.reset();
            requests.push(WindowRequest::CaptureCursor);
        }

        if presses.contains(Key::Fullscreen) {
            self.fullscreen = !self.fullscreen;
            debug!("fullscreen {}", self.fullscreen);
            requests.push(if self.fullscreen {
                WindowRequest::EnterFullscreen
            } else {
                WindowRequest::ExitFullscreen(self.windowed)
            });
        }

        requests
    }
}
