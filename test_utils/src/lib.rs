//! Utility helpers for tests.
//!
//! Builders for scenes placed at known distances from the NPC and small
//! drivers that feed input frames through [`Scene::tick`].

pub mod scenes;

use exit_strategy::{FrameOutput, InputSnapshot, Key, Scene};

/// Frame length used by the scene helpers.
pub const DT: f32 = 1.0 / 60.0;

/// Runs `frames` ticks with the same input, returning the last output.
///
/// # Examples
/// ```
/// use exit_strategy::{Key, Scene};
/// use test_utils::run_frames;
/// let mut scene = Scene::default();
/// run_frames(&mut scene, &[Key::Forward], 30);
/// assert!(scene.motion().position.z < 5.0);
/// ```
pub fn run_frames(scene: &mut Scene, held: &[Key], frames: usize) -> FrameOutput {
    let input = InputSnapshot::holding(held);
    let mut last = FrameOutput::default();
    for _ in 0..frames {
        last = scene.tick(&input, DT);
    }
    last
}

/// Presses `key` for one frame then releases it for one frame.
///
/// Returns the output of the press frame.
///
/// # Examples
/// ```
/// use exit_strategy::{InteractionState, Key};
/// use test_utils::{press_then_release, scenes::facing_npc};
/// let mut scene = facing_npc(2.0);
/// press_then_release(&mut scene, Key::Interact);
/// assert_eq!(scene.interaction(), InteractionState::Talking { line: 0 });
/// ```
pub fn press_then_release(scene: &mut Scene, key: Key) -> FrameOutput {
    let out = scene.tick(&InputSnapshot::holding(&[key]), DT);
    scene.tick(&InputSnapshot::default(), DT);
    out
}
