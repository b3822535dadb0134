//! Behaviour tests for walking into obstacles using rust-rspec.
//!
//! The player walks at the NPC and at an extra crate from several headings.
//! The body may slide along faces but never ends up inside a footprint
//! grown by the player radius.

use exit_strategy::config::BoxConfig;
use exit_strategy::{Aabb, Key, Scene, PLAYER_RADIUS};
use static_assertions::assert_impl_all;
use test_utils::{run_frames, scenes::spawned_at};

assert_impl_all!(Aabb: Copy, Send, Sync);
assert_impl_all!(Scene: Clone, Send, Sync);

const CRATE_BOX: BoxConfig = BoxConfig {
    centre: [-3.0, 0.5, 0.0],
    half_extents: [0.5, 0.5, 0.5],
};

#[derive(Clone, Debug, Default)]
struct WalkWorld {
    runs: Vec<Scene>,
    walked: bool,
}

impl WalkWorld {
    fn setup(&mut self) {
        if !self.runs.is_empty() {
            return;
        }
        // Spawns ringed around the NPC at (3, _, -6), each facing it.
        self.runs = (0..12)
            .map(|i| {
                let angle = (i as f32) * 30.0_f32.to_radians();
                let spawn = [3.0 + 5.0 * angle.cos(), 1.8, -6.0 + 5.0 * angle.sin()];
                let yaw = (angle + std::f32::consts::PI).to_degrees();
                spawned_at(spawn, yaw, &[CRATE_BOX])
            })
            .chain(std::iter::once(spawned_at([-6.0, 1.8, 0.3], 0.0, &[CRATE_BOX])))
            .collect();
    }

    fn walk_forward(&mut self) {
        if self.walked {
            return;
        }
        for scene in &mut self.runs {
            run_frames(scene, &[Key::Forward, Key::Sprint], 240);
        }
        self.walked = true;
    }

    fn assert_outside_every_footprint(&self) {
        for scene in &self.runs {
            let position = scene.motion().position;
            for aabb in scene.obstacles().as_slice() {
                assert!(
                    !aabb.inflated_xz(PLAYER_RADIUS).contains_xz_strict(position),
                    "player at {position:?} ended inside {aabb:?}"
                );
            }
        }
    }

    fn assert_camera_tracks_body(&self) {
        for scene in &self.runs {
            let gap = scene.motion().position.distance(scene.camera().position);
            assert!(gap < 1e-4, "camera must follow the body");
            assert!(scene.motion().grounded);
        }
    }
}

#[test]
fn walking_into_boxes_never_penetrates() {
    rspec::run(&rspec::given(
        "players ringed around the NPC and one lined up on a crate",
        WalkWorld::default(),
        |ctx| {
            ctx.before_each(WalkWorld::setup);
            ctx.when("each sprints forward for four seconds", |ctx| {
                ctx.before_each(WalkWorld::walk_forward);
                ctx.then("no player is inside an inflated footprint", |world| {
                    world.assert_outside_every_footprint();
                });
                ctx.then("each camera tracks its grounded body", |world| {
                    world.assert_camera_tracks_body();
                });
            });
        },
    ));
}

#[test]
fn head_on_walk_stops_at_the_inflated_face() {
    // Straight down -Z at the NPC's +Z face.
    let mut scene = spawned_at([3.0, 1.8, -2.0], -90.0, &[]);
    run_frames(&mut scene, &[Key::Forward], 120);
    let face = -6.0 + 0.7 + PLAYER_RADIUS;
    let z = scene.motion().position.z;
    assert!(z >= face - 1e-4, "z {z} passed face {face}");
    assert!(z - face < 0.1, "z {z} should rest against face {face}");
}
