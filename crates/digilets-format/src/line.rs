//! Line classification for corpus blobs
//!
//! A participant file mixes trajectory records with label markers and the
//! occasional malformed line. Classification is purely token-count based.

use crate::{LABEL_TOKEN_COUNT, RAW_FEATURES};

/// Classification of one whitespace-tokenized corpus line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Label/metadata marker (exactly 62 tokens); carries no sample data
    Label,
    /// Trajectory record of `points` samples
    Trajectory {
        /// Number of 5-tuple points encoded on the line
        points: usize,
    },
    /// Blank line or a token count that fits neither record kind
    Invalid,
}

impl LineKind {
    /// Classify a line from its token count
    ///
    /// The label width is checked before the point-width rule; label lines
    /// always win.
    pub const fn from_token_count(count: usize) -> LineKind {
        if count == LABEL_TOKEN_COUNT {
            return LineKind::Label;
        }
        if count > 0 && count % RAW_FEATURES == 0 {
            return LineKind::Trajectory {
                points: count / RAW_FEATURES,
            };
        }
        LineKind::Invalid
    }

    /// Whether this line holds trajectory samples
    pub const fn is_trajectory(&self) -> bool {
        matches!(self, LineKind::Trajectory { .. })
    }
}

/// Classify one raw text line
pub fn classify_line(line: &str) -> LineKind {
    LineKind::from_token_count(line.split_whitespace().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_width_wins() {
        assert_eq!(LineKind::from_token_count(62), LineKind::Label);
    }

    #[test]
    fn test_point_multiples() {
        assert_eq!(
            LineKind::from_token_count(5),
            LineKind::Trajectory { points: 1 }
        );
        assert_eq!(
            LineKind::from_token_count(65),
            LineKind::Trajectory { points: 13 }
        );
        assert!(LineKind::from_token_count(65).is_trajectory());
    }

    #[test]
    fn test_invalid_widths() {
        assert_eq!(LineKind::from_token_count(0), LineKind::Invalid);
        assert_eq!(LineKind::from_token_count(3), LineKind::Invalid);
        assert_eq!(LineKind::from_token_count(63), LineKind::Invalid);
    }

    #[test]
    fn test_classify_text_line() {
        assert_eq!(
            classify_line("0 0 0.5 1 0"),
            LineKind::Trajectory { points: 1 }
        );
        assert_eq!(classify_line("   "), LineKind::Invalid);
        assert_eq!(classify_line(""), LineKind::Invalid);

        let label = vec!["1"; 62].join(" ");
        assert_eq!(classify_line(&label), LineKind::Label);
    }
}
