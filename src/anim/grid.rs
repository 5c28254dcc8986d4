//! Grid geometry and stagger delays for the pixel-block transitions.
//!
//! All three overlay variants share the same partition rule: a fixed number
//! of primary-axis lines whose cell size is a fraction of one viewport
//! dimension, with the secondary-axis cell count derived from the other
//! dimension. Only the delay conventions differ per variant.

/// Columns in the centered and horizontal variants (each 5vw wide).
pub const SWEEP_COLUMNS: usize = 20;
/// Rows in the vertical variant (each 10vh tall).
pub const SWEEP_ROWS: usize = 10;

/// Seconds between consecutive ranks in the centered wipe.
pub const CENTERED_STEP: f64 = 0.03;
/// Seconds between consecutive ranks in the directional sweeps.
pub const SWEEP_STEP: f64 = 0.02;

/// Shape of a reveal grid: `lines` along the primary axis, each holding
/// `cells_per_line` blocks along the secondary axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub lines: usize,
    pub cells_per_line: usize,
}

impl GridSpec {
    pub fn block_count(&self) -> usize {
        self.lines * self.cells_per_line
    }
}

/// Column-major grid: 20 columns of square cells sized at 5% of the viewport
/// width, stacked until they cover the viewport height. A degenerate
/// viewport yields zero cells rather than a division error.
pub fn column_grid(width: f64, height: f64) -> GridSpec {
    GridSpec {
        lines: SWEEP_COLUMNS,
        cells_per_line: cell_count(height, width * 0.05),
    }
}

/// Row-major grid: 10 rows of square cells sized at 10% of the viewport
/// height, laid out until they cover the viewport width.
pub fn row_grid(width: f64, height: f64) -> GridSpec {
    GridSpec {
        lines: SWEEP_ROWS,
        cells_per_line: cell_count(width, height * 0.10),
    }
}

fn cell_count(span: f64, cell_size: f64) -> usize {
    if cell_size <= 0.0 || span <= 0.0 {
        return 0;
    }
    (span / cell_size).ceil() as usize
}

/// Delay for the centered wipe: rank order only, same in both directions.
pub fn centered_delay(rank: usize) -> f64 {
    CENTERED_STEP * rank as f64
}

/// Delay for a directional sweep that starts at line 0.
pub fn sweep_delay(line: usize, rank: usize) -> f64 {
    SWEEP_STEP * (line + rank) as f64
}

/// Delay for the opposite sweep, starting at the last line.
pub fn sweep_delay_reversed(total_lines: usize, line: usize, rank: usize) -> f64 {
    SWEEP_STEP * (total_lines.saturating_sub(line) + rank) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_grid_has_fixed_line_count() {
        for width in [320.0, 1024.0, 1920.0, 3840.0] {
            assert_eq!(column_grid(width, 900.0).lines, 20);
        }
    }

    #[test]
    fn width_change_only_moves_cells_per_line() {
        let narrow = column_grid(500.0, 1000.0);
        let wide = column_grid(2000.0, 1000.0);
        assert_eq!(narrow.lines, wide.lines);
        // Cells shrink from ceil(1000 / 25) to ceil(1000 / 100).
        assert_eq!(narrow.cells_per_line, 40);
        assert_eq!(wide.cells_per_line, 10);
    }

    #[test]
    fn row_grid_shape() {
        let grid = row_grid(1600.0, 1000.0);
        assert_eq!(grid.lines, 10);
        // ceil(1600 / 100) columns of 10vh cells.
        assert_eq!(grid.cells_per_line, 16);
        assert_eq!(grid.block_count(), 160);
    }

    #[test]
    fn partial_cells_round_up() {
        // 900 / (0.05 * 1000) = 18 exactly; 901 needs a 19th cell.
        assert_eq!(column_grid(1000.0, 900.0).cells_per_line, 18);
        assert_eq!(column_grid(1000.0, 901.0).cells_per_line, 19);
    }

    #[test]
    fn degenerate_viewport_yields_empty_grid() {
        assert_eq!(column_grid(0.0, 800.0).cells_per_line, 0);
        assert_eq!(column_grid(1200.0, 0.0).cells_per_line, 0);
        assert_eq!(row_grid(800.0, 0.0).cells_per_line, 0);
        assert_eq!(row_grid(800.0, 0.0).block_count(), 0);
    }

    #[test]
    fn sweep_delays_run_in_opposite_directions() {
        // Entering: line 0 fires before line 19 at equal rank.
        assert!(sweep_delay(0, 3) < sweep_delay(19, 3));
        // Exiting: line 19 fires before line 0 at equal rank.
        assert!(sweep_delay_reversed(20, 19, 3) < sweep_delay_reversed(20, 0, 3));
    }

    #[test]
    fn delay_scaling() {
        assert!((centered_delay(5) - 0.15).abs() < 1e-12);
        assert!((sweep_delay(4, 6) - 0.20).abs() < 1e-12);
        assert!((sweep_delay_reversed(20, 4, 6) - 0.44).abs() < 1e-12);
        assert_eq!(sweep_delay_reversed(10, 12, 0), 0.0);
    }
}
