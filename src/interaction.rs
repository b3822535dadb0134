//! NPC look-at prompt and dialogue progression.
//!
//! ```text
//! Idle ──look──▶ PromptVisible ──Interact──▶ Talking(0)
//!   ▲                 │                        │ Advance
//!   └────look away────┘                        ▼
//!   ▲                                      Talking(i+1)
//!   └──── Interact, or Advance past the last line ─┘
//! ```
//!
//! Inputs are press edges, so a held key advances at most one line.

use glam::Vec3;
use log::debug;
use thiserror::Error;

use crate::constants::{NPC_HALF_EXTENTS, NPC_POSITION};
use crate::geometry::Aabb;

/// Lines spoken by the courier's contact.
pub const DEFAULT_DIALOGUE: [&str; 4] = [
    "Courier, you made it. Supplies are thin in this block.",
    "I need a crate recovered from the old warehouse near the wall.",
    "Watch for patrols. They do not miss twice.",
    "Come back alive. We still need you.",
];

/// Errors raised while building interaction data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// A dialogue needs at least one line to show.
    #[error("dialogue must contain at least one line")]
    EmptyDialogue,
}

/// A fixed, non-empty sequence of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialogue {
    lines: Vec<String>,
}

impl Dialogue {
    /// Wraps `lines`, rejecting an empty sequence.
    ///
    /// # Errors
    /// Returns [`InteractionError::EmptyDialogue`] when `lines` is empty.
    pub fn new(lines: Vec<String>) -> Result<Self, InteractionError> {
        if lines.is_empty() {
            return Err(InteractionError::EmptyDialogue);
        }
        Ok(Self { lines })
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines. Never true for a value built by [`Self::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, if any.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl Default for Dialogue {
    fn default() -> Self {
        Self {
            lines: DEFAULT_DIALOGUE.iter().map(|l| (*l).to_owned()).collect(),
        }
    }
}

/// A stationary character the player can talk to.
#[derive(Clone, Debug, PartialEq)]
pub struct Npc {
    /// Centre of the NPC's bounding box.
    pub position: Vec3,
    /// Half extents of the bounding box.
    pub half_extents: Vec3,
    /// What the NPC says.
    pub dialogue: Dialogue,
}

impl Default for Npc {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(NPC_POSITION),
            half_extents: Vec3::from_array(NPC_HALF_EXTENTS),
            dialogue: Dialogue::default(),
        }
    }
}

impl Npc {
    /// Bounding box used both for look-at and collision.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_centre_half_extents(self.position, self.half_extents)
    }

    /// Whether a look ray from `eye` along `direction` hits within `reach`.
    ///
    /// The hit must be strictly in front of the eye and strictly closer than
    /// `reach`.
    #[must_use]
    pub fn is_looked_at(&self, eye: Vec3, direction: Vec3, reach: f32) -> bool {
        self.bounds()
            .ray_entry(eye, direction)
            .is_some_and(|t| t > 0.0 && t < reach)
    }
}

/// Where the player is in the conversation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// Not near or not looking at the NPC.
    #[default]
    Idle,
    /// Looking at the NPC within reach; the talk prompt is shown.
    PromptVisible,
    /// Talking; `line` always indexes the dialogue.
    Talking {
        /// Index of the line on screen.
        line: usize,
    },
}

impl InteractionState {
    /// Whether a conversation is in progress.
    #[must_use]
    pub const fn is_talking(&self) -> bool {
        matches!(self, Self::Talking { .. })
    }
}

/// Edges and look-at result consumed by [`advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionInput {
    /// Look ray hits the NPC within reach this frame.
    pub looking_at_npc: bool,
    /// Interact key went down this frame.
    pub interact: bool,
    /// Advance key went down this frame.
    pub advance: bool,
}

/// Moves the conversation on by one frame.
///
/// While talking, Interact cancels and takes priority over Advance. Advancing
/// past the last of `line_count` lines ends the conversation.
#[must_use]
pub fn advance(
    state: InteractionState,
    input: InteractionInput,
    line_count: usize,
) -> InteractionState {
    match state {
        InteractionState::Idle | InteractionState::PromptVisible => {
            if !input.looking_at_npc {
                InteractionState::Idle
            } else if input.interact && line_count > 0 {
                debug!("conversation started");
                InteractionState::Talking { line: 0 }
            } else {
                InteractionState::PromptVisible
            }
        }
        InteractionState::Talking { line } => {
            if input.interact {
                debug!("conversation cancelled at line {line}");
                InteractionState::Idle
            } else if input.advance {
                let next = line + 1;
                if next < line_count {
                    debug!("dialogue advanced to line {next}");
                    InteractionState::Talking { line: next }
                } else {
                    debug!("conversation finished");
                    InteractionState::Idle
                }
            } else {
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LOOKING: InteractionInput = InteractionInput {
        looking_at_npc: true,
        interact: false,
        advance: false,
    };

    #[rstest]
    #[case::idle_looks(InteractionState::Idle, LOOKING, InteractionState::PromptVisible)]
    #[case::prompt_looks_away(
        InteractionState::PromptVisible,
        InteractionInput::default(),
        InteractionState::Idle
    )]
    #[case::prompt_interacts(
        InteractionState::PromptVisible,
        InteractionInput { interact: true, ..LOOKING },
        InteractionState::Talking { line: 0 }
    )]
    #[case::interact_needs_look(
        InteractionState::Idle,
        InteractionInput { interact: true, ..InteractionInput::default() },
        InteractionState::Idle
    )]
    #[case::talking_advances(
        InteractionState::Talking { line: 1 },
        InteractionInput { advance: true, ..InteractionInput::default() },
        InteractionState::Talking { line: 2 }
    )]
    #[case::last_line_ends(
        InteractionState::Talking { line: 3 },
        InteractionInput { advance: true, ..LOOKING },
        InteractionState::Idle
    )]
    #[case::interact_cancels(
        InteractionState::Talking { line: 2 },
        InteractionInput { interact: true, advance: true, ..LOOKING },
        InteractionState::Idle
    )]
    #[case::talking_survives_look_away(
        InteractionState::Talking { line: 1 },
        InteractionInput::default(),
        InteractionState::Talking { line: 1 }
    )]
    fn transitions(
        #[case] from: InteractionState,
        #[case] input: InteractionInput,
        #[case] expected: InteractionState,
    ) {
        assert_eq!(advance(from, input, 4), expected);
    }

    #[test]
    fn n_advances_return_to_idle() {
        let dialogue = Dialogue::default();
        let mut state = advance(
            InteractionState::PromptVisible,
            InteractionInput {
                interact: true,
                ..LOOKING
            },
            dialogue.len(),
        );
        for _ in 0..dialogue.len() {
            let InteractionState::Talking { line } = state else {
                panic!("conversation ended early: {state:?}");
            };
            assert!(dialogue.line(line).is_some());
            state = advance(
                state,
                InteractionInput {
                    advance: true,
                    ..LOOKING
                },
                dialogue.len(),
            );
        }
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn empty_dialogue_is_rejected() {
        assert_eq!(Dialogue::new(Vec::new()), Err(InteractionError::EmptyDialogue));
    }

    #[rstest]
    #[case::close_and_centred(Vec3::new(3.0, 1.8, -3.0), Vec3::NEG_Z, true)]
    #[case::out_of_reach(Vec3::new(3.0, 1.8, 0.0), Vec3::NEG_Z, false)]
    #[case::looking_away(Vec3::new(3.0, 1.8, -3.0), Vec3::Z, false)]
    fn look_at_requires_reach(#[case] eye: Vec3, #[case] dir: Vec3, #[case] expected: bool) {
        assert_eq!(Npc::default().is_looked_at(eye, dir, 3.0), expected);
    }
}
