use std::fmt;

/// A column range within one team's sheet, optionally bounded to a row window.
///
/// Renders in A1 notation as the values API expects: `A:A`, `D:F`, `A2:A5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start_col: char,
    pub end_col: char,
    pub start_row: Option<u32>,
    pub end_row: Option<u32>,
}

impl Range {
    /// Whole columns, e.g. `A:A` or `D:F`
    pub const fn columns(start_col: char, end_col: char) -> Self {
        Self {
            start_col,
            end_col,
            start_row: None,
            end_row: None,
        }
    }

    /// Column window bounded to 1-based rows `start_row..=end_row`
    pub const fn rows(start_col: char, end_col: char, start_row: u32, end_row: u32) -> Self {
        Self {
            start_col,
            end_col,
            start_row: Some(start_row),
            end_row: Some(end_row),
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        (self.end_col as usize) - (self.start_col as usize) + 1
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_row, self.end_row) {
            (Some(start), Some(end)) => {
                write!(f, "{}{}:{}{}", self.start_col, start, self.end_col, end)
            }
            _ => write!(f, "{}:{}", self.start_col, self.end_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_column_display() {
        assert_eq!(Range::columns('A', 'A').to_string(), "A:A");
        assert_eq!(Range::columns('D', 'F').to_string(), "D:F");
    }

    #[test]
    fn test_row_window_display() {
        assert_eq!(Range::rows('A', 'A', 2, 5).to_string(), "A2:A5");
        assert_eq!(Range::rows('D', 'F', 1, 1).to_string(), "D1:F1");
    }

    #[test]
    fn test_width() {
        assert_eq!(Range::columns('A', 'A').width(), 1);
        assert_eq!(Range::columns('D', 'F').width(), 3);
        assert_eq!(Range::rows('D', 'F', 3, 9).width(), 3);
    }
}
