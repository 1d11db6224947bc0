//! Cursor bookkeeping and DDRAM addressing
//!
//! The HD44780 addresses its display memory (DDRAM) per line: in two-line
//! mode line 0 starts at `0x00` and line 1 at `0x40`. Four-row panels are
//! two long lines folded in half, so rows 2 and 3 continue lines 0 and 1
//! right after the visible columns.
//!
//! | Row | Base address   |
//! |-----|----------------|
//! | 0   | `0x00`         |
//! | 1   | `0x40`         |
//! | 2   | `0x00 + cols`  |
//! | 3   | `0x40 + cols`  |
//!
//! ## Example
//!
//! ```
//! use hd44780_i2c::cursor::{CursorPosition, RowOffsets};
//!
//! let offsets = RowOffsets::new(20, 4);
//! assert_eq!(offsets.ddram_address(CursorPosition::new(0, 2)), 0x14);
//! assert_eq!(offsets.ddram_address(CursorPosition::new(5, 3)), 0x59);
//! ```

use crate::config::Dimensions;

/// Number of row base addresses the controller can address
pub const MAX_ROWS: usize = 4;

/// Zero-based `(col, row)` cursor position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorPosition {
    /// Column, 0 to cols-1
    pub col: u8,
    /// Row, 0 to rows-1
    pub row: u8,
}

impl CursorPosition {
    /// Top-left corner
    pub const HOME: Self = Self { col: 0, row: 0 };

    /// Create a position without clamping
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Clamp both coordinates into the panel
    ///
    /// Out-of-range values snap to the last valid column or row; this never
    /// fails.
    pub fn clamped(self, dims: Dimensions) -> Self {
        Self {
            col: self.col.min(dims.cols.saturating_sub(1)),
            row: self.row.min(dims.rows.saturating_sub(1)),
        }
    }
}

impl From<(u8, u8)> for CursorPosition {
    fn from((col, row): (u8, u8)) -> Self {
        Self { col, row }
    }
}

impl From<CursorPosition> for (u8, u8) {
    fn from(pos: CursorPosition) -> Self {
        (pos.col, pos.row)
    }
}

/// Row to DDRAM base address table
///
/// Built once from the panel dimensions and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowOffsets {
    offsets: [u8; MAX_ROWS],
    rows: u8,
}

impl RowOffsets {
    /// Build the table for a panel with `cols` columns and `rows` rows
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            offsets: [0x00, 0x40, cols, 0x40u8.wrapping_add(cols)],
            rows,
        }
    }

    /// Base address of `row`
    ///
    /// Rows past the end clamp to the last row the panel has (and to the last
    /// table entry for panels configured with more than four rows).
    pub fn base(&self, row: u8) -> u8 {
        let last = (self.rows.max(1) as usize).min(MAX_ROWS) - 1;
        self.offsets[(row as usize).min(last)]
    }

    /// DDRAM address of `pos`
    ///
    /// The caller is expected to pass a clamped position.
    pub fn ddram_address(&self, pos: CursorPosition) -> u8 {
        self.base(pos.row).wrapping_add(pos.col)
    }
}

impl From<Dimensions> for RowOffsets {
    fn from(dims: Dimensions) -> Self {
        Self::new(dims.cols, dims.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_two_rows() {
        let offsets = RowOffsets::new(16, 2);
        assert_eq!(offsets.base(0), 0x00);
        assert_eq!(offsets.base(1), 0x40);
    }

    #[test]
    fn test_offsets_four_rows() {
        let offsets = RowOffsets::new(20, 4);
        assert_eq!(offsets.base(2), 0x14);
        assert_eq!(offsets.base(3), 0x54);
    }

    #[test]
    fn test_offsets_clamp_to_last_row() {
        // 2-row panel: rows 2 and 3 resolve to row 1
        let offsets = RowOffsets::new(16, 2);
        assert_eq!(offsets.base(2), 0x40);
        assert_eq!(offsets.base(200), 0x40);

        // 1-row panel only ever uses row 0
        let offsets = RowOffsets::new(16, 1);
        assert_eq!(offsets.base(1), 0x00);
    }

    #[test]
    fn test_offsets_misconfigured_rows_do_not_panic() {
        assert_eq!(RowOffsets::new(16, 0).base(3), 0x00);
        assert_eq!(RowOffsets::new(16, 9).base(8), 0x50);
    }

    #[test]
    fn test_cursor_clamp() {
        let dims = Dimensions { cols: 16, rows: 2 };
        assert_eq!(
            CursorPosition::new(10, 2).clamped(dims),
            CursorPosition::new(10, 1)
        );
        assert_eq!(
            CursorPosition::new(40, 0).clamped(dims),
            CursorPosition::new(15, 0)
        );
        assert_eq!(
            CursorPosition::new(3, 1).clamped(dims),
            CursorPosition::new(3, 1)
        );
    }

    #[test]
    fn test_ddram_address() {
        let offsets = RowOffsets::new(16, 2);
        assert_eq!(offsets.ddram_address(CursorPosition::new(7, 1)), 0x47);
        assert_eq!(offsets.ddram_address(CursorPosition::HOME), 0x00);
    }

    #[test]
    fn test_tuple_conversion() {
        let pos: CursorPosition = (4, 1).into();
        assert_eq!(pos, CursorPosition::new(4, 1));
        assert_eq!(<(u8, u8)>::from(pos), (4, 1));
    }
}
