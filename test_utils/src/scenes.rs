//! Scene constructors at known positions.

use exit_strategy::config::BoxConfig;
use exit_strategy::{Scene, SceneConfig, EYE_HEIGHT, NPC_HALF_EXTENTS, NPC_POSITION};

/// Z coordinate of the NPC box's +Z face.
#[must_use]
pub fn npc_front_face() -> f32 {
    NPC_POSITION[2] + NPC_HALF_EXTENTS[2]
}

/// A default scene with the player `distance` metres in front of the NPC,
/// looking straight at it.
///
/// # Panics
/// Panics if the resulting config is invalid.
///
/// # Examples
/// ```
/// use exit_strategy::InteractionState;
/// use test_utils::{run_frames, scenes::facing_npc};
/// let mut scene = facing_npc(2.0);
/// run_frames(&mut scene, &[], 1);
/// assert_eq!(scene.interaction(), InteractionState::PromptVisible);
/// ```
#[must_use]
pub fn facing_npc(distance: f32) -> Scene {
    let config = SceneConfig {
        spawn_position: [NPC_POSITION[0], EYE_HEIGHT, npc_front_face() + distance],
        spawn_yaw_deg: -90.0,
        ..SceneConfig::default()
    };
    Scene::from_config(&config).expect("facing_npc config is valid")
}

/// A default scene spawned at `position` with `yaw_deg`, plus extra boxes.
///
/// # Panics
/// Panics if the resulting config is invalid.
///
/// # Examples
/// ```
/// use test_utils::scenes::spawned_at;
/// let scene = spawned_at([0.0, 1.8, 0.0], 0.0, &[]);
/// assert_eq!(scene.obstacles().len(), 1);
/// ```
#[must_use]
pub fn spawned_at(position: [f32; 3], yaw_deg: f32, extra: &[BoxConfig]) -> Scene {
    let config = SceneConfig {
        spawn_position: position,
        spawn_yaw_deg: yaw_deg,
        obstacles: extra.to_vec(),
        ..SceneConfig::default()
    };
    Scene::from_config(&config).expect("spawned_at config is valid")
}
