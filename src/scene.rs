//! The per-frame update tying input, motion, look-at and dialogue together.
//!
//! [`Scene::tick`] runs the frame in a fixed order:
//! 1. sample press edges from the input snapshot;
//! 2. cursor capture, window requests and mouse look;
//! 3. walk/jump with collision against the obstacle registry;
//! 4. look ray against the NPC box;
//! 5. conversation step and HUD strings;
//! 6. FPS title while no NPC UI is showing.

use glam::Vec3;
use log::{debug, info};

use crate::camera::{Camera, MouseLook};
use crate::collision::Obstacles;
use crate::config::{ConfigError, SceneConfig};
use crate::cursor::{CursorCapture, WindowRequest};
use crate::hud::{window_title, FpsCounter, HudFrame};
use crate::input::{InputSnapshot, Key, KeyEdges};
use crate::interaction::{advance, InteractionInput, InteractionState, Npc};
use crate::motion::{self, MotionIntent, MotionParams, MotionState};

/// Everything a host needs to present one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Prompt and dialogue strings.
    pub hud: HudFrame,
    /// New window title, when the FPS meter refreshed and no NPC UI is up.
    pub title: Option<String>,
    /// Window actions the host should perform.
    pub window_requests: Vec<WindowRequest>,
}

impl FrameOutput {
    /// Whether the host was asked to close the window.
    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.window_requests.contains(&WindowRequest::Close)
    }
}

/// All state owned by the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    camera: Camera,
    motion: MotionState,
    params: MotionParams,
    look: MouseLook,
    cursor: CursorCapture,
    edges: KeyEdges,
    npc: Npc,
    obstacles: Obstacles,
    interaction: InteractionState,
    talk_distance: f32,
    fps: FpsCounter,
}

impl Default for Scene {
    fn default() -> Self {
        let config = SceneConfig::default();
        let npc = Npc::default();
        let obstacles = config.obstacles(&npc);
        Self::assemble(&config, npc, obstacles)
    }
}

impl Scene {
    /// Builds a scene from a validated config.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when `config` fails validation.
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let npc = config.npc()?;
        let obstacles = config.obstacles(&npc);
        info!(
            "scene ready: spawn {:?}, {} obstacle(s), {} dialogue line(s)",
            config.spawn_position,
            obstacles.len(),
            npc.dialogue.len()
        );
        Ok(Self::assemble(config, npc, obstacles))
    }

    fn assemble(config: &SceneConfig, npc: Npc, obstacles: Obstacles) -> Self {
        let spawn = Vec3::from_array(config.spawn_position);
        let params = config.motion_params();
        let mut motion = MotionState::standing(spawn);
        motion.grounded = motion.feet_height(&params) <= 0.0;
        Self {
            camera: Camera::new(spawn, config.spawn_yaw_deg),
            motion,
            params,
            look: MouseLook::new(config.mouse_sensitivity),
            cursor: CursorCapture::default(),
            edges: KeyEdges::default(),
            npc,
            obstacles,
            interaction: InteractionState::Idle,
            talk_distance: config.talk_distance,
            fps: FpsCounter::default(),
        }
    }

    /// Advances the scene by `dt` seconds using this frame's input.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> FrameOutput {
        let presses = self.edges.sample(input);

        let window_requests = self
            .cursor
            .update(&presses, input.focus_regained, &mut self.look);
        if self.cursor.is_locked() {
            if let Some(cursor) = input.cursor {
                self.look.apply(&mut self.camera, cursor);
            }
        }

        self.motion = motion::step(
            self.motion,
            MotionIntent::from_input(input, &presses),
            self.camera.yaw_deg,
            dt,
            &self.params,
            self.obstacles.as_slice(),
        );
        self.camera.position = self.motion.position;

        let looking_at_npc = self.npc.is_looked_at(
            self.camera.position,
            self.camera.look_direction(),
            self.talk_distance,
        );
        let previous = self.interaction;
        self.interaction = advance(
            previous,
            InteractionInput {
                looking_at_npc,
                interact: presses.contains(Key::Interact),
                advance: presses.contains(Key::Advance),
            },
            self.npc.dialogue.len(),
        );
        if previous != self.interaction {
            debug!("interaction {previous:?} -> {:?}", self.interaction);
        }

        let hud = HudFrame::from_interaction(self.interaction, &self.npc.dialogue);
        let title = self
            .fps
            .tick(dt)
            .filter(|_| !hud.ui_active)
            .map(window_title);

        FrameOutput {
            hud,
            title,
            window_requests,
        }
    }

    /// The player's camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Body position, vertical speed and grounded flag.
    #[must_use]
    pub const fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Motion tuning in use.
    #[must_use]
    pub const fn params(&self) -> &MotionParams {
        &self.params
    }

    /// The NPC.
    #[must_use]
    pub const fn npc(&self) -> &Npc {
        &self.npc
    }

    /// Static obstacles.
    #[must_use]
    pub const fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    /// Current conversation state.
    #[must_use]
    pub const fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Look-at reach for starting a conversation.
    #[must_use]
    pub const fn talk_distance(&self) -> f32 {
        self.talk_distance
    }

    /// Whether mouse look currently owns the cursor.
    #[must_use]
    pub const fn cursor_locked(&self) -> bool {
        self.cursor.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EYE_HEIGHT;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn facing_npc() -> Scene {
        // Two metres in front of the NPC's +Z face, looking down -Z.
        let config = SceneConfig {
            spawn_position: [3.0, EYE_HEIGHT, -3.3],
            ..SceneConfig::default()
        };
        Scene::from_config(&config).expect("valid config")
    }

    #[test]
    fn default_scene_spawns_grounded_and_idle() {
        let mut scene = Scene::default();
        let out = scene.tick(&InputSnapshot::default(), DT);
        assert!(scene.motion().grounded);
        assert_eq!(scene.interaction(), InteractionState::Idle);
        assert_eq!(out.hud, HudFrame::default());
        assert_eq!(scene.obstacles().len(), 1);
    }

    #[test]
    fn looking_at_npc_shows_prompt_and_interact_starts_talk() {
        let mut scene = facing_npc();
        let out = scene.tick(&InputSnapshot::default(), DT);
        assert_eq!(scene.interaction(), InteractionState::PromptVisible);
        assert!(out.hud.prompt.is_some());

        let out = scene.tick(&InputSnapshot::holding(&[Key::Interact]), DT);
        assert_eq!(scene.interaction(), InteractionState::Talking { line: 0 });
        assert_eq!(out.hud.npc_line.as_deref(), scene.npc().dialogue.line(0));

        // Holding Interact must not cancel on the next frame.
        scene.tick(&InputSnapshot::holding(&[Key::Interact]), DT);
        assert!(scene.interaction().is_talking());
    }

    #[test]
    fn mouse_look_is_ignored_while_cursor_released() {
        let mut scene = Scene::default();
        scene.tick(&InputSnapshot::holding(&[Key::Escape]), DT);
        assert!(!scene.cursor_locked());
        let yaw = scene.camera().yaw_deg;
        scene.tick(&InputSnapshot::default().with_cursor(Vec2::ZERO), DT);
        scene.tick(&InputSnapshot::default().with_cursor(Vec2::new(500.0, 0.0)), DT);
        assert_eq!(scene.camera().yaw_deg, yaw);
    }

    #[test]
    fn title_is_withheld_while_npc_ui_is_up() {
        let mut scene = facing_npc();
        let titles = (0..60)
            .filter_map(|_| scene.tick(&InputSnapshot::default(), DT).title)
            .count();
        assert_eq!(titles, 0);

        let mut idle = Scene::default();
        let titles = (0..60)
            .filter_map(|_| idle.tick(&InputSnapshot::default(), DT).title)
            .count();
        assert!(titles >= 1);
    }

    #[test]
    fn second_escape_requests_close() {
        let mut scene = Scene::default();
        let escape = InputSnapshot::holding(&[Key::Escape]);
        assert!(!scene.tick(&escape, DT).close_requested());
        scene.tick(&InputSnapshot::default(), DT);
        assert!(scene.tick(&escape, DT).close_requested());
    }
}
