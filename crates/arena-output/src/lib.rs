//! `arena-output` — where fights and arena state end up.
//!
//! | Item               | Kind              | Destination                         |
//! |--------------------|-------------------|-------------------------------------|
//! | [`TracingObserver`]| `FightObserver`   | `tracing` events (kills at `info`)  |
//! | [`BattleLog`]      | `FightObserver`   | one CSV row per fight               |
//! | [`render_grid`]    | function          | 20×20 text map of the field         |
//! | [`render_summary`] | function          | survivors, dead, totals, winner     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use arena_output::{BattleLog, TracingObserver};
//!
//! let log = Arc::new(BattleLog::create("battle_log.csv")?);
//! let mut factory = CreatureFactory::new(seed)
//!     .with_observer(Arc::new(TracingObserver))
//!     .with_observer(log.clone());
//! // ... run the arena ...
//! log.finish()?;
//! ```

pub mod battle_log;
pub mod error;
pub mod grid;
pub mod summary;
pub mod trace;


pub use battle_log::BattleLog;
pub use error::{OutputError, OutputResult};
pub use grid::{GRID_CELLS, LEGEND, render_grid};
pub use summary::{render_summary, winner_line};
pub use trace::TracingObserver;
