//! Scripted input for running the scene without a window.
//!
//! The autopilot turns toward the NPC with synthetic cursor motion, walks
//! until the talk prompt appears, opens the conversation and presses through
//! every line. Keys are released on alternate frames so each press registers
//! as a fresh edge.

use glam::Vec2;
use log::info;

use crate::input::{InputSnapshot, Key};
use crate::interaction::InteractionState;
use crate::scene::Scene;

/// Largest cursor step per frame in pixels.
const MAX_CURSOR_STEP: f32 = 40.0;
/// Walk only once the heading is within this many degrees of the target.
const WALK_CONE_DEG: f32 = 10.0;

/// Stage of the scripted walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Turning toward and walking up to the NPC.
    Approach,
    /// Prompt is up; pressing Interact.
    Greet,
    /// Talking; pressing Advance through the lines.
    Listen,
    /// Conversation finished.
    Done,
}

/// Generates one [`InputSnapshot`] per frame for a [`Scene`].
#[derive(Clone, Debug, PartialEq)]
pub struct Autopilot {
    cursor: Vec2,
    sensitivity: f32,
    phase: Phase,
    key_down_last_frame: bool,
}

impl Autopilot {
    /// Creates an autopilot whose cursor math assumes `sensitivity` degrees per pixel.
    #[must_use]
    pub const fn new(sensitivity: f32) -> Self {
        Self {
            cursor: Vec2::new(640.0, 360.0),
            sensitivity,
            phase: Phase::Approach,
            key_down_last_frame: false,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the conversation has been played through.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Input for the next frame given the scene as it stands.
    pub fn next_input(&mut self, scene: &Scene) -> InputSnapshot {
        self.update_phase(scene.interaction());
        match self.phase {
            Phase::Approach => self.approach(scene),
            Phase::Greet => self.tap(Key::Interact),
            Phase::Listen => self.tap(Key::Advance),
            Phase::Done => InputSnapshot::default(),
        }
    }

    fn update_phase(&mut self, interaction: InteractionState) {
        let next = match (self.phase, interaction) {
            (Phase::Approach | Phase::Greet, InteractionState::PromptVisible) => Phase::Greet,
            (Phase::Greet, InteractionState::Idle) => Phase::Approach,
            (Phase::Approach | Phase::Greet, InteractionState::Talking { .. }) => Phase::Listen,
            (Phase::Listen, InteractionState::Idle | InteractionState::PromptVisible) => {
                Phase::Done
            }
            (phase, _) => phase,
        };
        if next != self.phase {
            info!("autopilot {:?} -> {next:?}", self.phase);
            self.phase = next;
        }
    }

    fn approach(&mut self, scene: &Scene) -> InputSnapshot {
        let camera = scene.camera();
        let to_npc = scene.npc().position - camera.position;
        let target_yaw = to_npc.z.atan2(to_npc.x).to_degrees();
        let error = wrap_degrees(target_yaw - camera.yaw_deg);

        let step = if self.sensitivity > 0.0 {
            (error / self.sensitivity).clamp(-MAX_CURSOR_STEP, MAX_CURSOR_STEP)
        } else {
            0.0
        };
        self.cursor.x += step;
        self.key_down_last_frame = false;

        let snapshot = InputSnapshot::default().with_cursor(self.cursor);
        if error.abs() < WALK_CONE_DEG {
            snapshot.with(Key::Forward)
        } else {
            snapshot
        }
    }

    fn tap(&mut self, key: Key) -> InputSnapshot {
        self.key_down_last_frame = !self.key_down_last_frame;
        let snapshot = InputSnapshot::default().with_cursor(self.cursor);
        if self.key_down_last_frame {
            snapshot.with(key)
        } else {
            snapshot
        }
    }
}

/// Wraps an angle into `[-180, 180)`.
fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
