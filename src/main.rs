//! Gopher Shooter entry point
//!
//! Runs a headless session: the autopilot plays, the world updates once per
//! frame, and every frame is handed to the CPU sprite batcher.
//!
//! Usage: `gopher-shooter [settings.json]`

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use gopher_shooter::Settings;
use gopher_shooter::platform::{Autopilot, FrameClock, frame_duration};
use gopher_shooter::renderer::{RenderFrame, Renderer, SpriteBatch};
use gopher_shooter::sim::{GameEvent, Playfield, World, apply_inputs, tick};

fn main() {
    env_logger::init();

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    let score = run(&settings, seed);
    println!("score: {}", score);
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Run the demo session and return the final score
fn run(settings: &Settings, seed: u64) -> u64 {
    let playfield = Playfield::new(settings.window.width, settings.window.height);
    let mut world = World::new(seed, playfield);
    let mut renderer = SpriteBatch::new(playfield.width, playfield.height);
    let mut autopilot = Autopilot::new();
    let mut clock = FrameClock::new();
    log::info!(
        "{} starting ({}x{}, seed {})",
        settings.window.title,
        world.playfield.width,
        world.playfield.height,
        world.seed
    );

    let fixed_dt = settings.frame_dt();
    let frame_budget = frame_duration(settings.demo.frame_rate);
    let summary_every = settings.demo.summary_every;

    for frame in 1..=settings.demo.frames {
        let frame_start = Instant::now();

        if let Some(step) = settings.demo.resize.filter(|step| step.frame == frame) {
            world.resize(step.width, step.height);
            renderer.resize(step.width, step.height);
        }

        // Input is applied between frames, never during an update
        let events = autopilot.poll(&world);
        apply_inputs(&mut world, events);

        let dt = if settings.demo.realtime {
            clock.tick(frame_start)
        } else {
            fixed_dt
        };
        tick(&mut world, dt);

        for event in world.drain_events() {
            log_event(&event);
        }

        renderer.draw(&RenderFrame::capture(&world));

        if summary_every > 0 && frame % summary_every == 0 {
            log::info!(
                "frame {}: {} | enemies {} | projectiles {} | {} vertices",
                frame,
                world.score_text,
                world.enemies.len(),
                world.projectiles.len(),
                renderer.vertices().len()
            );
        }

        if settings.demo.realtime {
            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }
    }

    apply_inputs(&mut world, autopilot.release_all());
    log::info!(
        "Session over after {} frames - final score: {}",
        renderer.frames_drawn(),
        world.score
    );
    world.score
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::EnemyDestroyed { variant, points, .. } => {
            log::info!("{} gopher down (+{})", variant.as_str(), points);
        }
        GameEvent::EnemyEscaped { variant, .. } => {
            log::debug!("{} gopher escaped", variant.as_str());
        }
        GameEvent::EnemySpawned { id, variant } => {
            log::debug!("{} gopher {} spawned", variant.as_str(), id);
        }
        GameEvent::ShotFired { tick } => {
            log::trace!("shot fired at tick {}", tick);
        }
    }
}
