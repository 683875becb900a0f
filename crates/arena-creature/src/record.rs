//! Line-oriented roster format.
//!
//! # Format
//!
//! One field per line, four lines per creature, records back to back:
//!
//! ```text
//! 1          ← kind tag (1 = Orc, 2 = Knight, 3 = Bear)
//! 120        ← x
//! 45         ← y
//! Grom       ← name (may be empty; the factory then draws a random one)
//! ```
//!
//! Blank lines between records are skipped.  A record with an unknown or
//! non-numeric tag, or a bad coordinate, is consumed in full before it is
//! reported, so the reader stays aligned on the next record.  Line breaks
//! inside a name are written as spaces.

use std::io::{BufRead, Write};

use arena_core::{Kind, Position};

use crate::{Creature, RecordError, RecordResult};

/// The persisted fields of one creature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureRecord {
    pub kind:     Kind,
    pub position: Position,
    pub name:     String,
}

impl CreatureRecord {
    /// Capture the current state of `creature`.
    pub fn of(creature: &Creature) -> Self {
        Self {
            kind:     creature.kind(),
            position: creature.position(),
            name:     creature.name().to_owned(),
        }
    }
}

/// Write one record (four lines).
pub fn write_record<W: Write>(record: &CreatureRecord, out: &mut W) -> RecordResult<()> {
    writeln!(out, "{}", record.kind.tag())?;
    writeln!(out, "{}", record.position.x)?;
    writeln!(out, "{}", record.position.y)?;
    writeln!(out, "{}", record.name.replace(['\r', '\n'], " "))?;
    Ok(())
}

/// Streaming record parser over any `BufRead`.
///
/// Also an `Iterator<Item = RecordResult<CreatureRecord>>`; iteration ends at
/// a clean end of input.
pub struct RecordReader<R> {
    inner: R,
    line:  usize,
    buf:   String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0, buf: String::new() }
    }

    /// Read the next record.  `Ok(None)` at end of input.
    pub fn next_record(&mut self) -> RecordResult<Option<CreatureRecord>> {
        // ── Tag line (leading blank lines skipped) ─────────────────────────
        let tag_text = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(l) if l.trim().is_empty() => continue,
                Some(l) => break l,
            }
        };
        let tag_line = self.line;

        // ── Remaining fields ──────────────────────────────────────────────
        // Read before judging the tag so a bad record is consumed whole.
        let x = self.require_line("x")?;
        let y = self.require_line("y")?;
        let name = self.require_line("name")?;

        let tag: i64 = tag_text.trim().parse().map_err(|_| RecordError::Malformed {
            line: tag_line,
            what: format!("invalid kind tag {:?}", tag_text.trim()),
        })?;
        let kind = Kind::from_tag(tag).ok_or(RecordError::UnknownKind { line: tag_line, tag })?;
        let x = self.parse_coord(&x, "x", tag_line + 1)?;
        let y = self.parse_coord(&y, "y", tag_line + 2)?;

        Ok(Some(CreatureRecord {
            kind,
            position: Position::new(x, y),
            name: name.trim().to_owned(),
        }))
    }

    fn next_line(&mut self) -> RecordResult<Option<String>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(self.buf.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn require_line(&mut self, field: &str) -> RecordResult<String> {
        self.next_line()?.ok_or_else(|| RecordError::Malformed {
            line: self.line + 1,
            what: format!("unexpected end of input, expected {field}"),
        })
    }

    fn parse_coord(&self, text: &str, field: &str, line: usize) -> RecordResult<i32> {
        text.trim().parse().map_err(|_| RecordError::Malformed {
            line,
            what: format!("invalid {field} coordinate {:?}", text.trim()),
        })
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = RecordResult<CreatureRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
