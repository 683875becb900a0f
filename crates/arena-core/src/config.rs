//! Arena configuration.
//!
//! Periods are stored as integer milliseconds so the struct stays plain data
//! when serialized; use the `Duration` accessors at call sites.

use std::time::Duration;

use crate::{ArenaError, ArenaResult, Bounds};

/// Top-level arena configuration.
///
/// Typically built in the application crate (or loaded from a file with the
/// `serde` feature) and passed to the arena builder, which calls
/// [`validate`](Self::validate) before any thread starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Inclusive upper bound of the x axis.  Default: 500.
    pub max_x: i32,

    /// Inclusive upper bound of the y axis.  Default: 500.
    pub max_y: i32,

    /// Two living creatures this close (inclusive) are paired for a fight.
    /// Default: 10.
    pub kill_distance: u32,

    /// Period of the mover/scanner loop.  Default: 1000 ms.
    pub scan_period_ms: u64,

    /// How long the fight worker sleeps when its queue is empty.  This also
    /// bounds how late the worker notices shutdown.  Default: 100 ms.
    pub poll_interval_ms: u64,

    /// Root RNG seed for the mover and the factory.
    pub seed: u64,

    /// Log a warning each time a single fight event has been re-queued this
    /// many times.  `None` disables the warning.  Never caps retries.
    pub retry_warn_threshold: Option<u32>,
}

impl ArenaConfig {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.max_x, self.max_y)
    }

    #[inline]
    pub fn scan_period(&self) -> Duration {
        Duration::from_millis(self.scan_period_ms)
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> ArenaResult<()> {
        if self.max_x <= 0 || self.max_y <= 0 {
            return Err(ArenaError::Config(format!(
                "field bounds must be positive, got {}x{}",
                self.max_x, self.max_y
            )));
        }
        if self.scan_period_ms == 0 {
            return Err(ArenaError::Config("scan_period_ms must be non-zero".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ArenaError::Config("poll_interval_ms must be non-zero".into()));
        }
        if self.retry_warn_threshold == Some(0) {
            return Err(ArenaError::Config(
                "retry_warn_threshold must be at least 1 (use None to disable)".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_x:                500,
            max_y:                500,
            kill_distance:        10,
            scan_period_ms:       1_000,
            poll_interval_ms:     100,
            seed:                 0,
            retry_warn_threshold: Some(64),
        }
    }
}
