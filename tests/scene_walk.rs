//! End-to-end run of the scripted autopilot through the default scene.

use anyhow::{ensure, Result};
use exit_strategy::autopilot::Phase;
use exit_strategy::{Autopilot, InteractionState, Scene, SceneConfig};
use test_utils::DT;

fn drive(scene: &mut Scene, pilot: &mut Autopilot, max_frames: usize) -> (usize, Vec<String>) {
    let mut lines: Vec<String> = Vec::new();
    for frame in 0..max_frames {
        let input = pilot.next_input(scene);
        let out = scene.tick(&input, DT);
        if let Some(line) = out.hud.npc_line {
            if lines.last() != Some(&line) {
                lines.push(line);
            }
        }
        if pilot.is_done() {
            return (frame, lines);
        }
    }
    (max_frames, lines)
}

#[test]
fn autopilot_walks_up_and_hears_every_line() -> Result<()> {
    exit_strategy::init_logging(false);
    let config = SceneConfig::default();
    let mut scene = Scene::from_config(&config)?;
    let mut pilot = Autopilot::new(config.mouse_sensitivity);

    let (frames, lines) = drive(&mut scene, &mut pilot, 1200);

    ensure!(pilot.is_done(), "autopilot stuck in {:?}", pilot.phase());
    ensure!(frames < 1200, "took too long");
    ensure!(
        lines == config.dialogue,
        "heard {lines:?}, expected {:?}",
        config.dialogue
    );
    ensure!(
        !scene
            .obstacles()
            .blocks(scene.motion().position, scene.params().radius),
        "player walked into the NPC"
    );
    Ok(())
}

#[test]
fn autopilot_stays_idle_without_dialogue_reach() -> Result<()> {
    // With a tiny reach the prompt never appears and the pilot keeps walking.
    let config = SceneConfig {
        talk_distance: 0.05,
        ..SceneConfig::default()
    };
    let mut scene = Scene::from_config(&config)?;
    let mut pilot = Autopilot::new(config.mouse_sensitivity);

    let (_, lines) = drive(&mut scene, &mut pilot, 600);

    ensure!(pilot.phase() == Phase::Approach);
    ensure!(lines.is_empty());
    ensure!(scene.interaction() == InteractionState::Idle);
    Ok(())
}
