//! `BattleLog`: one CSV row per fight notification.
//!
//! Columns:
//!
//! ```text
//! attacker_kind,attacker_name,attacker_x,attacker_y,defender_kind,defender_name,defender_x,defender_y,won
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use arena_creature::{Creature, FightObserver};
use csv::Writer;

use crate::{OutputError, OutputResult};

const HEADER: [&str; 9] = [
    "attacker_kind",
    "attacker_name",
    "attacker_x",
    "attacker_y",
    "defender_kind",
    "defender_name",
    "defender_x",
    "defender_y",
    "won",
];

struct Inner<W: Write> {
    writer:     Writer<W>,
    last_error: Option<OutputError>,
}

/// A [`FightObserver`] appending fights to a CSV file.
///
/// Errors from the writer are stored internally because `on_fight` has no
/// return value.  Check for them with [`take_error`][Self::take_error] after
/// the arena stops.
pub struct BattleLog<W: Write = File> {
    inner: Mutex<Inner<W>>,
}

impl BattleLog<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: impl AsRef<Path>) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> BattleLog<W> {
    /// Write the header row to `out` and log every following fight into it.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(HEADER)?;
        Ok(Self {
            inner: Mutex::new(Inner { writer, last_error: None }),
        })
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.lock().last_error.take()
    }

    /// Flush buffered rows.
    pub fn finish(&self) -> OutputResult<()> {
        self.lock().writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        let inner = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        inner.writer.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }

    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> FightObserver for BattleLog<W> {
    fn on_fight(&self, attacker: &Creature, defender: &Creature, won: bool) {
        let a = attacker.position();
        let d = defender.position();
        let row = [
            attacker.kind().to_string(),
            attacker.name().to_owned(),
            a.x.to_string(),
            a.y.to_string(),
            defender.kind().to_string(),
            defender.name().to_owned(),
            d.x.to_string(),
            d.y.to_string(),
            (won as u8).to_string(),
        ];

        let mut inner = self.lock();
        if let Err(e) = inner.writer.write_record(&row) {
            // Keep only the first error.
            if inner.last_error.is_none() {
                inner.last_error = Some(e.into());
            }
        }
    }
}
