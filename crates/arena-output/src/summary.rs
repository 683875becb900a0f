//! End-of-run report text.

use std::fmt::Write;

use arena_core::Kind;
use arena_sim::{ArenaReport, Census, Leader};

/// Final listing: survivors, the dead, per-kind totals, and the winner.
pub fn render_summary(report: &ArenaReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, report);
    out
}

fn write_summary(out: &mut String, report: &ArenaReport) -> std::fmt::Result {
    let census = &report.census;

    writeln!(out, "=== FINAL RESULTS ===")?;
    writeln!(out, "\nSurvivors:")?;
    for c in report.creatures.iter().filter(|c| c.is_alive()) {
        writeln!(out, "{c}")?;
    }
    writeln!(out, "\nDead NPCs:")?;
    for c in report.creatures.iter().filter(|c| !c.is_alive()) {
        writeln!(out, "DEAD - {c}")?;
    }

    writeln!(out, "\n=== Summary ===")?;
    writeln!(out, "Total survivors: {}", census.alive())?;
    for kind in [Kind::Knight, Kind::Orc, Kind::Bear] {
        writeln!(out, "{kind}s: {}", census.alive_of(kind))?;
    }
    writeln!(out, "Total dead: {}", census.dead)?;
    writeln!(
        out,
        "Ticks: {}, fights resolved: {}, kills: {}, discarded: {}",
        report.ticks, report.stats.resolved, report.stats.kills, report.discarded
    )?;

    writeln!(out, "\n=== WINNER ===")?;
    writeln!(out, "{}", winner_line(census))
}

/// One-line verdict for `census`.
pub fn winner_line(census: &Census) -> String {
    match census.leader() {
        Leader::Faction(kind) => format!("{kind}s win the battle!"),
        Leader::Draw => "Everyone died! It's a draw!".to_owned(),
        Leader::Tie => "It's a tie between multiple factions!".to_owned(),
    }
}
