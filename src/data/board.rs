//! Hex board grid shown on the builder page.

pub const BOARD_ROWS: i32 = 4;
pub const BOARD_COLS: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow {
    pub index: usize,
    /// Odd rows are shifted half a hex to the right.
    pub offset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<BoardRow>,
    pub cols: Vec<usize>,
}

impl BoardView {
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0) as usize;
        let cols = cols.max(0) as usize;
        BoardView {
            rows: (0..rows)
                .map(|index| BoardRow {
                    index,
                    offset: index % 2 == 1,
                })
                .collect(),
            cols: (0..cols).collect(),
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_rows_are_offset() {
        let board = BoardView::new(4, 7);
        assert_eq!(board.rows.len(), 4);
        assert_eq!(board.cols, vec![0, 1, 2, 3, 4, 5, 6]);
        let offsets: Vec<bool> = board.rows.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![false, true, false, true]);
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let board = BoardView::new(-1, -3);
        assert!(board.rows.is_empty());
        assert!(board.cols.is_empty());
    }
}
