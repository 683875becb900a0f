//! `arena-combat` — fight resolution for the arena simulation.
//!
//! # Request lifecycle
//!
//! ```text
//! scanner ── push ──▶ FightQueue ── pop ──▶ FightScheduler::process_next
//!                        ▲                     │  both alive?      no → dropped
//!                        │                     │  Referee::judge
//!                        │                     │    Ok(Decided)  → notify attacker,
//!                        │                     │                   kill defender if it lost
//!                        │                     │    Ok(Stale)    → dropped
//!                        └──── push (tail) ────┘    Err(transient) → re-queued
//! ```
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`rules`]     | `resolve(attacker, defender)` — the outcome table    |
//! | [`event`]     | `FightEvent`                                         |
//! | [`queue`]     | `FightQueue` (mutex-protected FIFO)                  |
//! | [`referee`]   | `Referee` trait, `TableReferee`, `Verdict`           |
//! | [`scheduler`] | `FightScheduler`, `Step`, `SchedulerStats`           |

pub mod error;
pub mod event;
pub mod queue;
pub mod referee;
pub mod rules;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{CombatError, CombatResult};
pub use event::FightEvent;
pub use queue::FightQueue;
pub use referee::{Referee, TableReferee, Verdict};
pub use rules::resolve;
pub use scheduler::{FightScheduler, SchedulerStats, StatsSnapshot, Step};
