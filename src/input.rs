//! Polled input snapshots and press-edge detection.
//!
//! The platform layer fills an [`InputSnapshot`] once per frame and hands it
//! to the scene by value. [`KeyEdges`] turns held state into one-shot
//! presses: a key fires on the frame it goes from released to down and not
//! again until it has been released.

use glam::Vec2;
use hashbrown::{HashMap, HashSet};

/// Logical keys the scene reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Walk along the camera's forward vector.
    Forward,
    /// Walk backwards.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Jump when grounded.
    Jump,
    /// Hold to sprint.
    Sprint,
    /// Start talking to the NPC, or stop talking.
    Interact,
    /// Show the next dialogue line.
    Advance,
    /// Release the cursor, or quit when already released.
    Escape,
    /// Toggle fullscreen.
    Fullscreen,
    /// Primary mouse button; recaptures a released cursor.
    PrimaryClick,
}

impl Key {
    /// Every key, in a fixed order.
    pub const ALL: [Self; 11] = [
        Self::Forward,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Jump,
        Self::Sprint,
        Self::Interact,
        Self::Advance,
        Self::Escape,
        Self::Fullscreen,
        Self::PrimaryClick,
    ];
}

/// Anything that can answer "is this key down right now?".
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Whether `key` is currently held.
    fn is_down(&self, key: Key) -> bool;
}

/// By-value record of input for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    held: HashSet<Key>,
    /// Absolute cursor position in window pixels, if the cursor moved or was sampled.
    pub cursor: Option<Vec2>,
    /// Set on the frame the window regains focus.
    pub focus_regained: bool,
}

impl InputSnapshot {
    /// Snapshot with the given keys held and no cursor sample.
    #[must_use]
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Captures every key from another source.
    #[must_use]
    pub fn capture(source: &impl InputSource) -> Self {
        Self {
            held: Key::ALL
                .into_iter()
                .filter(|key| source.is_down(*key))
                .collect(),
            ..Self::default()
        }
    }

    /// Marks `key` as held or released.
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Builder form of [`Self::set`] that holds `key`.
    #[must_use]
    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }

    /// Builder form that attaches a cursor sample.
    #[must_use]
    pub fn with_cursor(mut self, cursor: Vec2) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl InputSource for InputSnapshot {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Keys that went down this frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPresses(HashSet<Key>);

impl KeyPresses {
    /// Whether `key` was pressed this frame.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.0.contains(&key)
    }

    /// Whether nothing was pressed this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Key> for KeyPresses {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One bit of memory per key for press-edge detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEdges {
    previous: HashMap<Key, bool>,
}

impl KeyEdges {
    /// Polls `key` and reports whether it was pressed since the last poll.
    ///
    /// A key that is already down the first time it is polled counts as a
    /// press.
    pub fn pressed(&mut self, source: &impl InputSource, key: Key) -> bool {
        let down = source.is_down(key);
        let was_down = self.previous.insert(key, down).unwrap_or(false);
        down && !was_down
    }

    /// Polls every key once and returns the set of fresh presses.
    pub fn sample(&mut self, source: &impl InputSource) -> KeyPresses {
        Key::ALL
            .into_iter()
            .filter(|key| self.pressed(source, *key))
            .collect()
    }
}
