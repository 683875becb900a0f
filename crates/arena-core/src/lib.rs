//! `arena-core` — foundational types for the arena simulation.
//!
//! This crate is a dependency of every other `arena-*` crate.  It has no
//! `arena-*` dependencies and only `rand` and `thiserror` (plus optional
//! `serde`) from the outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `CreatureId`                                   |
//! | [`kind`]   | `Kind` — the closed set of creature kinds      |
//! | [`geo`]    | `Position`, `Bounds`                           |
//! | [`config`] | `ArenaConfig`                                  |
//! | [`rng`]    | `ArenaRng`                                     |
//! | [`error`]  | `ArenaError`, `ArenaResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use geo::{Bounds, Position};
pub use ids::CreatureId;
pub use kind::Kind;
pub use rng::ArenaRng;
