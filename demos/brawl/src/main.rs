//! brawl: ten creatures, one field, nobody leaves politely.
//!
//! Spawns 5 Orcs, 3 Knights and 2 Bears at random positions on a 500×500
//! field, prints a map every two seconds, and reports the survivors.
//!
//! ```text
//! cargo run -p brawl                 # random roster, saved to roster.txt
//! cargo run -p brawl -- roster.txt   # replay a saved roster
//! RUST_LOG=debug LOG_FORMAT=json cargo run -p brawl
//! ```
//!
//! Every fight is appended to `battle_log.csv`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use arena_core::{ArenaConfig, Kind};
use arena_creature::{Creature, CreatureFactory, save_roster};
use arena_output::{BattleLog, GRID_CELLS, TracingObserver, render_grid, render_summary};
use arena_sim::ArenaBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const ORCS:         usize = 5;
const KNIGHTS:      usize = 3;
const BEARS:        usize = 2;
const MAX_TURNS:    u32 = 30;
const MAX_TICKS:    u64 = 25;
const TURN_PERIOD:  Duration = Duration::from_secs(2);
const ROSTER_PATH:  &str = "roster.txt";
const BATTLE_LOG:   &str = "battle_log.csv";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Load the roster named on the command line, or spawn a fresh one and save
/// it for replay.
fn roster(factory: &mut CreatureFactory, config: &ArenaConfig) -> Result<Vec<Arc<Creature>>> {
    if let Some(path) = std::env::args().nth(1) {
        let file = File::open(&path).with_context(|| format!("opening roster {path}"))?;
        let roster = factory
            .load(BufReader::new(file))
            .with_context(|| format!("reading roster {path}"))?;
        if !roster.rejected.is_empty() {
            warn!(rejected = roster.rejected.len(), path = %path, "some roster records were skipped");
        }
        return Ok(roster.creatures);
    }

    let bounds = config.bounds();
    let creatures: Vec<_> = [(Kind::Orc, ORCS), (Kind::Knight, KNIGHTS), (Kind::Bear, BEARS)]
        .into_iter()
        .flat_map(|(kind, count)| std::iter::repeat_n(kind, count))
        .map(|kind| factory.spawn_random(kind, bounds))
        .collect();

    let out = File::create(ROSTER_PATH).with_context(|| format!("creating {ROSTER_PATH}"))?;
    save_roster(&creatures, BufWriter::new(out))?;
    info!(path = ROSTER_PATH, "roster saved");
    Ok(creatures)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = ArenaConfig { seed: SEED, ..ArenaConfig::default() };

    let battle_log = Arc::new(BattleLog::create(BATTLE_LOG)?);
    let mut factory = CreatureFactory::new(config.seed)
        .with_observer(Arc::new(TracingObserver))
        .with_observer(battle_log.clone());

    println!("=== Game Start ===");
    let creatures = roster(&mut factory, &config)?;
    println!("Starting NPCs ({}):", creatures.len());
    for c in &creatures {
        println!("{c}");
    }

    let running = ArenaBuilder::new(config.clone()).creatures(creatures).build()?.start()?;

    for turn in 0..MAX_TURNS {
        if running.ticks() > MAX_TICKS {
            break;
        }
        println!("\n=== Turn {turn:>2} ===");
        print!("{}", render_grid(running.creatures(), config.bounds(), GRID_CELLS));
        println!("\nStatistics: {}, queued fights: {}", running.census(), running.queued());
        thread::sleep(TURN_PERIOD);
    }

    let report = running.stop()?;
    battle_log.finish()?;
    if let Some(e) = battle_log.take_error() {
        warn!(error = %e, path = BATTLE_LOG, "battle log incomplete");
    }

    println!("\n\n{}", render_summary(&report));
    Ok(())
}
