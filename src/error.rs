/// Errors reported by the checked and fallible forms of this crate.
///
/// The panicking forms (e.g. [`SpanTuple::new()`], [`ArrayTuple::row()`])
/// panic with the `Display` text of the same variant.
///
/// [`SpanTuple::new()`]: super::SpanTuple::new
/// [`ArrayTuple::row()`]: super::ArrayTuple::row
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A column does not have the same length as column `0`.
    #[error("column {column} has length {found}, but column 0 has length {expected}")]
    LengthMismatch { column: usize, expected: usize, found: usize },

    /// A static extent was requested for a run-time length that differs.
    #[error("cannot use length {found} for a span with static extent {expected}")]
    ExtentMismatch { expected: usize, found: usize },

    /// A row position is not less than the length.
    #[error("position {pos} is out of range for length {len}")]
    OutOfRange { pos: usize, len: usize },

    /// A window `start..end` does not fit in the length.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// Result type for the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Checks that column `column` has the same length as column `0`.
pub(crate) fn check_len(column: usize, expected: usize, found: usize) -> Result<()> {
    if expected == found { return Ok(()); }
    tracing::debug!(column, expected, found, "parallel column length mismatch");
    Err(Error::LengthMismatch {column, expected, found})
}

/// Checks that `pos` is a row of a sequence of length `len`.
pub(crate) fn check_pos(pos: usize, len: usize) -> Result<()> {
    if pos < len { return Ok(()); }
    tracing::debug!(pos, len, "row position out of range");
    Err(Error::OutOfRange {pos, len})
}

/// Checks that `start..end` is a window of a sequence of length `len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end <= len { return Ok(()); }
    Err(Error::RangeOutOfBounds {start, end, len})
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::LengthMismatch {column: 2, expected: 4, found: 3}.to_string(),
            "column 2 has length 3, but column 0 has length 4",
        );
        assert_eq!(
            Error::OutOfRange {pos: 7, len: 4}.to_string(),
            "position 7 is out of range for length 4",
        );
    }

    #[test]
    fn checks() {
        assert_eq!(check_len(1, 4, 4), Ok(()));
        assert_eq!(check_len(1, 4, 5), Err(Error::LengthMismatch {column: 1, expected: 4, found: 5}));
        assert_eq!(check_pos(2, 3), Ok(()));
        assert_eq!(check_pos(3, 3), Err(Error::OutOfRange {pos: 3, len: 3}));
        assert_eq!(check_range(1, 3, 3), Ok(()));
        assert_eq!(check_range(0, 0, 0), Ok(()));
        assert_eq!(check_range(2, 1, 3), Err(Error::RangeOutOfBounds {start: 2, end: 1, len: 3}));
        assert_eq!(check_range(1, 4, 3), Err(Error::RangeOutOfBounds {start: 1, end: 4, len: 3}));
    }
}
