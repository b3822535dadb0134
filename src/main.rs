//! Headless runner for the Exit Strategy scene.
//!
//! Drives the scene with the scripted autopilot for a fixed number of frames
//! and logs the HUD, window title and window requests as they change.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use exit_strategy::numeric::{frame_delta, frame_pause};
use exit_strategy::{init_logging, Autopilot, Scene, SceneConfig};
use log::{info, warn};

/// First-person walk-and-talk demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Scene config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Pace frames against the wall clock instead of stepping by --dt
    #[arg(long)]
    realtime: bool,
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    path.map_or_else(
        || Ok(SceneConfig::default()),
        |p| {
            SceneConfig::load(p).with_context(|| format!("loading scene from {}", p.display()))
        },
    )
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let pause = frame_pause(args.dt)
        .with_context(|| format!("--dt {} is not a usable frame length in seconds", args.dt))?;

    let config = load_config(args.config.as_deref())?;
    let mut scene = Scene::from_config(&config).context("building scene")?;
    let mut pilot = Autopilot::new(config.mouse_sensitivity);
    let mut last_hud = None;
    let clock = Instant::now();
    let mut last_reading = 0.0_f64;

    for frame in 0..args.frames {
        let step = if args.realtime {
            thread::sleep(pause);
            let now = clock.elapsed().as_secs_f64();
            let elapsed = frame_delta(last_reading, now);
            last_reading = now;
            elapsed
        } else {
            args.dt
        };
        let input = pilot.next_input(&scene);
        let out = scene.tick(&input, step);

        if let Some(title) = &out.title {
            info!("title: {title}");
        }
        for request in &out.window_requests {
            info!("window request: {request:?}");
        }
        if last_hud.as_ref() != Some(&out.hud) {
            if let Some(prompt) = &out.hud.prompt {
                info!("frame {frame}: prompt {prompt:?}");
            }
            if let Some(line) = &out.hud.npc_line {
                info!("frame {frame}: npc says {line:?}");
            }
            last_hud = Some(out.hud.clone());
        }
        if out.close_requested() {
            info!("close requested at frame {frame}");
            return Ok(());
        }
        if pilot.is_done() {
            info!(
                "conversation finished at frame {frame}, player at {:?}",
                scene.motion().position
            );
            return Ok(());
        }
    }

    warn!(
        "stopped after {} frames in phase {:?}",
        args.frames,
        pilot.phase()
    );
    Ok(())
}
