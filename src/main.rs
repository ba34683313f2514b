//! frameanim demo entry point.
//!
//! Registers one synthetic animation (`frame_0`, `frame_1`, ...) in an
//! [`AnimationManager`] and runs a simulated game loop, printing the current
//! frame on every tick.
//!
//! # Main Loop
//!
//! 1. Load settings from the INI file (defaults if absent), then apply CLI overrides
//! 2. Insert [`WorldTime`] and the manager into a bevy_ecs `World`
//! 3. Each tick: advance world time, sync the animation clock, query the frame
//!
//! # Running
//!
//! ```sh
//! cargo run -- --frames 6 --duration 1.5 --looped false --reversed --json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

use frameanim::components::animation::{Animation, AnimationState, FrameHandle};
use frameanim::resources::animationmanager::AnimationManager;
use frameanim::resources::animconfig::AnimationConfig;
use frameanim::resources::clock::ManualClock;
use frameanim::resources::worldtime::WorldTime;
use frameanim::systems::time::{sync_animation_clock, update_world_time};

const DEMO_ANIMATION: &str = "demo";

/// Frame-based sprite animation demo
#[derive(Parser)]
#[command(version, about = "Steps a frame animation through a simulated game loop.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames in the animation.
    #[arg(long)]
    frames: Option<usize>,

    /// Seconds for one full pass over all frames.
    #[arg(long)]
    duration: Option<f32>,

    /// Restart at the end of each pass (`true`) or finish after one (`false`).
    #[arg(long, value_name = "BOOL")]
    looped: Option<bool>,

    /// Play the frames back-to-front.
    #[arg(long)]
    reversed: bool,

    /// Number of game-loop ticks to simulate.
    #[arg(long)]
    ticks: Option<u32>,

    /// Unscaled seconds per tick.
    #[arg(long)]
    dt: Option<f32>,

    /// Print one JSON object per tick.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FrameReport<'a> {
    tick: u64,
    time: f32,
    frame: &'a str,
    state: AnimationState,
}

fn load_config(cli: &Cli) -> AnimationConfig {
    let mut config = match &cli.config {
        Some(path) => AnimationConfig::with_path(path),
        None => AnimationConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }

    if let Some(frames) = cli.frames.filter(|f| *f > 0) {
        config.frames = frames;
    }
    if let Some(duration) = cli.duration.filter(|d| *d > 0.0) {
        config.duration = duration;
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    apply_flags(&mut config, cli);
    config
}

fn apply_flags(config: &mut AnimationConfig, cli: &Cli) {
    if let Some(looped) = cli.looped {
        config.looped = looped;
    }
    config.reversed |= cli.reversed;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    let animation = Animation::new(config.duration, config.looped)
        .with_frames((0..config.frames).map(|i| FrameHandle::from(format!("frame_{i}"))));

    let mut manager = AnimationManager::with_clock(ManualClock::default());
    manager.add(DEMO_ANIMATION, animation);
    if config.reversed {
        manager.start_reversed(DEMO_ANIMATION);
    } else {
        manager.start(DEMO_ANIMATION);
    }

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(manager);

    let mut update = Schedule::default();
    update.add_systems(sync_animation_clock);

    info!(
        "Running {} ticks of {}s over a {}-frame animation",
        config.ticks, config.dt, config.frames
    );

    for _ in 0..config.ticks {
        update_world_time(&mut world, config.dt);
        update.run(&mut world);

        let time = *world.resource::<WorldTime>();
        let mut manager = world.resource_mut::<AnimationManager<ManualClock>>();
        let frame = match manager.current_frame(DEMO_ANIMATION) {
            Ok(frame) => frame.clone(),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        let state = manager
            .get(DEMO_ANIMATION)
            .map(Animation::state)
            .unwrap_or(AnimationState::NotStarted);

        let report = FrameReport {
            tick: time.frame_count,
            time: time.elapsed,
            frame: frame.key(),
            state,
        };
        if cli.json {
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error encoding report: {e}");
                    std::process::exit(1);
                }
            }
        } else {
            println!(
                "tick {:>4}  t={:>7.3}s  {:<12} {:?}",
                report.tick, report.time, report.frame, report.state
            );
        }

        if state == AnimationState::Finished {
            info!("Animation finished after {} ticks", time.frame_count);
            break;
        }
    }
}
