//! `arena-sim` — the threaded arena driver.
//!
//! # Threads
//!
//! ```text
//! caller ──ArenaBuilder::build──▶ Arena ──start──▶ RunningArena ──stop──▶ ArenaReport
//!                                                     │
//!                         ┌───────────────────────────┴───────────────┐
//!                   "arena-mover"                               "arena-fights"
//!             every scan period:                          poll FightQueue:
//!               ① shift every living creature               resolve, notify, kill
//!               ② push a FightEvent per close pair          sleep when empty
//! ```
//!
//! The caller's thread stays free for rendering: it reads creature state
//! through [`RunningArena::creatures`] and [`RunningArena::census`].  Both
//! background loops poll one shared `AtomicBool`; [`RunningArena::stop`]
//! sets it and joins them.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the pair scan on Rayon's thread pool.      |

pub mod arena;
pub mod builder;
pub mod census;
pub mod error;
pub mod mover;


pub use arena::{Arena, ArenaReport, RunningArena};
pub use builder::ArenaBuilder;
pub use census::{Census, Leader};
pub use error::{SimError, SimResult};
pub use mover::{Mover, ScanStats};
