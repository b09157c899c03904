//! Headless egg arena runner.
//!
//! Plays a match with random bots in every seat for a fixed span of simulated
//! time and logs the outcome.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use egg_arena::plugin::step_arena_system;
use egg_arena::{init_logging, ArenaConfig, ArenaInput, ArenaPlugin, ArenaState, SlotBindings};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A turn-paced 2D egg-carrying arena
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON match configuration; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,
    /// Seed for the match and the bots
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Simulation ticks per simulated second
    #[arg(long, default_value_t = 30)]
    tick_rate: u32,
}

/// Random input for every configured seat.
#[derive(Resource)]
struct Bots {
    rng: ChaCha8Rng,
    seats: Vec<SlotBindings>,
}

fn random_axis(rng: &mut ChaCha8Rng) -> f32 {
    match rng.random_range(0..3_u8) {
        0 => -1.0,
        1 => 0.0,
        _ => 1.0,
    }
}

fn drive_bots(mut bots: ResMut<Bots>, mut input: ResMut<ArenaInput>) {
    let Bots { rng, seats } = &mut *bots;
    for seat in seats.iter() {
        let horizontal = random_axis(rng);
        let vertical = if horizontal == 0.0 { random_axis(rng) } else { 0.0 };
        input.0.set_axis(&seat.horizontal, horizontal);
        input.0.set_axis(&seat.vertical, vertical);
        input.0.set_axis(&seat.horizontal_aim, rng.random_range(-1.0..=1.0));
        input.0.set_axis(&seat.vertical_aim, rng.random_range(-1.0..=1.0));
        if rng.random_bool(0.05) {
            input.0.press(&seat.fire);
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ArenaConfig> {
    match path {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading arena config from {}", path.display())),
        None => Ok(ArenaConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.tick_rate == 0 {
        bail!("--tick-rate must be at least 1");
    }
    let config = load_config(args.config.as_ref())?;
    let seats = config
        .players
        .iter()
        .filter_map(|seat| SlotBindings::for_slot(seat.slot))
        .collect();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / f64::from(args.tick_rate),
        )))
        .insert_resource(Bots {
            rng: ChaCha8Rng::seed_from_u64(args.seed.wrapping_add(1)),
            seats,
        })
        .add_plugins(ArenaPlugin {
            config,
            seed: args.seed,
        })
        .add_systems(Update, drive_bots.before(step_arena_system));

    if app.world().get_non_send_resource::<ArenaState>().is_none() {
        bail!("arena failed to start; see the log for the setup error");
    }

    let ticks = (args.seconds.max(0.0) * args.tick_rate as f32).ceil() as u64;
    info!("running {ticks} ticks at {} Hz", args.tick_rate);
    for _ in 0..ticks {
        app.update();
    }

    let state = app
        .world()
        .get_non_send_resource::<ArenaState>()
        .context("arena state disappeared")?;
    let arena = &state.arena;
    info!(
        "finished after {:.1}s: round {}, {}, score {}",
        arena.clock(),
        arena.level(),
        arena.phase(),
        arena.score()
    );
    for player in arena.players() {
        info!(
            "player {} ({} team): {} food",
            player.index(),
            player.team(),
            player.food()
        );
    }
    Ok(())
}
