//! Terminal rendering of selected grids.

use std::io::{self, Write};

use gol::engine::SimulationBatch;
use gol::grid::{Grid, ALIVE_GLYPH, DEAD_GLYPH};

/// Write one grid: glyph rows, a blank line, then its counters.
pub fn render_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for row in grid.cells().iter_rows() {
        let line: String = row
            .iter()
            .map(|&alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH })
            .collect();
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Count of live cells: {}", grid.alive_count())?;
    writeln!(out, "Step: {}", grid.generation())?;
    writeln!(out)
}

/// Write every selected grid, labelled with its 1-based number, then the
/// batch totals.
pub fn render_batch<W: Write>(out: &mut W, batch: &SimulationBatch) -> io::Result<()> {
    for (&index, grid) in batch.selection().iter().zip(batch.selected()) {
        writeln!(out, "Game #{}", index + 1)?;
        render_grid(out, grid)?;
    }
    let stats = batch.stats();
    writeln!(
        out,
        "Active games: {} of {}",
        stats.active_count, stats.grid_count
    )?;
    writeln!(out, "Total live cells: {}", stats.total_alive)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_test_utils::{grid_from, BLINKER, BLOCK};

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn grid_layout() {
        let grid = grid_from(BLINKER[1]);
        let text = rendered(|out| render_grid(out, &grid));
        assert_eq!(
            text,
            "   \n+++\n   \n\nCount of live cells: 3\nStep: 1\n\n"
        );
    }

    #[test]
    fn batch_shows_selection_in_order_and_totals() {
        let mut batch = SimulationBatch::new();
        batch.push(grid_from(BLOCK));
        batch.push(grid_from(BLINKER[0]));
        batch.set_selection(&[1, 0]).unwrap();
        let text = rendered(|out| render_batch(out, &batch));
        let second = text.find("Game #1").unwrap();
        let first = text.find("Game #2").unwrap();
        assert!(first < second);
        assert!(text.ends_with("Active games: 0 of 2\nTotal live cells: 7\n\n"));
    }
}
