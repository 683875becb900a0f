//! Coarse text map of the field.

use std::fmt::Write;
use std::sync::Arc;

use arena_core::Bounds;
use arena_creature::Creature;

/// Cells per side in the demo's map.
pub const GRID_CELLS: usize = 20;

pub const LEGEND: &str = "Legend: K=Knight, O=Orc, B=Bear, X=Dead";

#[derive(Clone)]
enum Cell {
    Empty,
    Dead,
    Alive { symbol: char, tag: String },
}

/// Render `creatures` onto a `cells`×`cells` grid covering `bounds`.
///
/// Each cell is six characters wide: `[<symbol><first three letters of the
/// name>]` for a living creature, `[XXXX]` for a dead one,
/// `[    ]` when empty.  When several creatures share a cell the one latest
/// in `creatures` is shown.  Rows run from `y = 0` at the top; the output
/// starts with the legend line and every row ends in `\n`.
pub fn render_grid(creatures: &[Arc<Creature>], bounds: Bounds, cells: usize) -> String {
    let cells = cells.max(1);
    let mut grid = vec![Cell::Empty; cells * cells];

    for creature in creatures {
        let snap = creature.snapshot();
        let col = cell_of(snap.position.x, bounds.max_x, cells);
        let row = cell_of(snap.position.y, bounds.max_y, cells);
        grid[row * cells + col] = if snap.alive {
            Cell::Alive {
                symbol: creature.kind().symbol(),
                tag:    creature.name().chars().take(3).collect(),
            }
        } else {
            Cell::Dead
        };
    }

    let mut out = String::with_capacity(LEGEND.len() + 1 + cells * (cells * 6 + 1));
    out.push_str(LEGEND);
    out.push('\n');
    for row in grid.chunks(cells) {
        for cell in row {
            match cell {
                Cell::Empty => out.push_str("[    ]"),
                Cell::Dead => out.push_str("[XXXX]"),
                // Writing to a String cannot fail.
                Cell::Alive { symbol, tag } => {
                    let _ = write!(out, "[{symbol}{tag:<3}]");
                }
            }
        }
        out.push('\n');
    }
    out
}

fn cell_of(coord: i32, max: i32, cells: usize) -> usize {
    let width = (max as usize / cells).max(1);
    (coord.max(0) as usize / width).min(cells - 1)
}
