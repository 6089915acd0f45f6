//! Cursor handling for pagination.
//! See: https://graphql.org/learn/pagination/
//! See: https://relay.dev/graphql/connections.htm#sec-Cursor

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

const CURSOR_PREFIX: &str = "cursor";

pub type PagingResult<T> = Result<T, PagingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid cursor: {0:?}")]
    InvalidCursor(String),
}

/// Issue the opaque cursor for the edge at 0-based `position` within the
/// full edge sequence.
pub fn encode_cursor(position: usize) -> String {
    STANDARD.encode(format!("{CURSOR_PREFIX}{}", position + 1))
}

/// Recover the 0-based edge position a cursor was issued for.
///
/// Anything that does not round-trip through [`encode_cursor`] is rejected,
/// rather than silently treated as the start of the list.
pub fn decode_cursor(cursor: &str) -> PagingResult<usize> {
    let invalid = || PagingError::InvalidCursor(cursor.to_string());

    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let decoded = String::from_utf8(bytes).map_err(|_| invalid())?;
    let ordinal: usize = decoded
        .strip_prefix(CURSOR_PREFIX)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    // Positions are encoded 1-based, so `cursor0` is as foreign as `cursorx`.
    ordinal.checked_sub(1).ok_or_else(invalid)
}

/// The slice of the full edge sequence selected by a `(first, after)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub end: usize,
    pub has_next_page: bool,
}

impl PageWindow {
    /// Derive the window over a reference list of length `len`.
    ///
    /// `first` defaults to `len` (no limit) and is rejected when negative.
    /// `after` must be a cursor previously issued for this list; the window
    /// starts on the edge following it.
    pub fn new(len: usize, first: Option<i32>, after: Option<&str>) -> PagingResult<Self> {
        let first = match first {
            Some(n) if n < 0 => {
                return Err(PagingError::InvalidArgument(format!(
                    "`first` must be non-negative, got {n}"
                )))
            }
            Some(n) => n as usize,
            None => len,
        };

        let offset = match after {
            Some(cursor) => {
                let position = decode_cursor(cursor)?;
                if position >= len {
                    return Err(PagingError::InvalidCursor(cursor.to_string()));
                }
                position + 1
            }
            None => 0,
        };

        Ok(Self {
            offset,
            end: len.min(offset.saturating_add(first)),
            has_next_page: offset.saturating_add(first) < len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_round_trips_over_valid_positions() {
        for position in 0..=64 {
            assert_eq!(decode_cursor(&encode_cursor(position)), Ok(position));
        }
    }

    #[test]
    fn test_cursor_encoding_is_stable() {
        // base64("cursor1")
        assert_eq!(encode_cursor(0), "Y3Vyc29yMQ==");
        // base64("cursor4")
        assert_eq!(encode_cursor(3), "Y3Vyc29yNA==");
    }

    #[test]
    fn test_malformed_cursors_are_rejected() {
        for cursor in [
            "not base64!",
            // base64("bogus")
            "Ym9ndXM=",
            // base64("cursor")
            "Y3Vyc29y",
            // base64("cursorx")
            "Y3Vyc29yeA==",
            // base64("cursor0")
            "Y3Vyc29yMA==",
        ] {
            assert_eq!(
                decode_cursor(cursor),
                Err(PagingError::InvalidCursor(cursor.to_string()))
            );
        }
    }

    #[test]
    fn test_window_defaults_to_whole_list() {
        let window = PageWindow::new(4, None, None).unwrap();
        assert_eq!(
            window,
            PageWindow {
                offset: 0,
                end: 4,
                has_next_page: false,
            }
        );
    }

    #[test]
    fn test_window_resumes_after_cursor() {
        let after = encode_cursor(0);
        let window = PageWindow::new(4, Some(2), Some(&after)).unwrap();
        assert_eq!(
            window,
            PageWindow {
                offset: 1,
                end: 3,
                has_next_page: true,
            }
        );
    }

    #[test]
    fn test_window_clamps_to_list_end() {
        let after = encode_cursor(2);
        let window = PageWindow::new(4, Some(10), Some(&after)).unwrap();
        assert_eq!(
            window,
            PageWindow {
                offset: 3,
                end: 4,
                has_next_page: false,
            }
        );
    }

    #[test]
    fn test_window_rejects_negative_first() {
        assert_eq!(
            PageWindow::new(4, Some(-1), None),
            Err(PagingError::InvalidArgument(
                "`first` must be non-negative, got -1".to_string()
            ))
        );
    }

    #[test]
    fn test_window_rejects_out_of_range_cursor() {
        let foreign = encode_cursor(4);
        assert_eq!(
            PageWindow::new(4, None, Some(&foreign)),
            Err(PagingError::InvalidCursor(foreign.clone()))
        );

        // Any cursor is out of range for an empty list.
        let cursor = encode_cursor(0);
        assert_eq!(
            PageWindow::new(0, None, Some(&cursor)),
            Err(PagingError::InvalidCursor(cursor.clone()))
        );
    }

    #[test]
    fn test_window_allows_cursor_of_last_edge() {
        // Resuming after the final edge yields an empty page, not an error.
        let after = encode_cursor(3);
        let window = PageWindow::new(4, None, Some(&after)).unwrap();
        assert_eq!(
            window,
            PageWindow {
                offset: 4,
                end: 4,
                has_next_page: false,
            }
        );
    }

    #[test]
    fn test_window_with_zero_first() {
        let window = PageWindow::new(4, Some(0), None).unwrap();
        assert_eq!(
            window,
            PageWindow {
                offset: 0,
                end: 0,
                has_next_page: true,
            }
        );
    }
}
