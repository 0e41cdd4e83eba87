//! Trajectory line parsing

use ndarray::Array2;

use crate::{
    error::{FormatError, Result},
    RawTrajectory, RAW_FEATURES,
};

/// Parse one trajectory line's tokens into a [`RawTrajectory`]
///
/// `line` is the 1-based line number used for error reporting. The token
/// count must be a positive multiple of [`RAW_FEATURES`]; the classifier
/// guarantees this in the scanning path. Any non-numeric token fails the
/// whole line.
pub fn parse_trajectory_line(line: usize, tokens: &[&str]) -> Result<RawTrajectory> {
    if tokens.is_empty() || tokens.len() % RAW_FEATURES != 0 {
        return Err(FormatError::token_count(line, tokens.len()));
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value: f32 = token
            .parse()
            .map_err(|_| FormatError::non_numeric(line, *token))?;
        values.push(value);
    }

    let rows = tokens.len() / RAW_FEATURES;
    let data = Array2::from_shape_vec((rows, RAW_FEATURES), values)
        .map_err(|_| FormatError::token_count(line, tokens.len()))?;
    RawTrajectory::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column;

    #[test]
    fn test_parse_two_points() {
        let tokens: Vec<&str> = "0 0 0.5 1 0 1 1 0.5 1 1".split_whitespace().collect();
        let traj = parse_trajectory_line(1, &tokens).unwrap();

        assert_eq!(traj.len(), 2);
        assert_eq!(traj.data()[[0, column::X]], 0.0);
        assert_eq!(traj.data()[[1, column::X]], 1.0);
        assert_eq!(traj.data()[[0, column::PRESSURE]], 0.5);
        assert_eq!(traj.data()[[1, column::TIME]], 1.0);
    }

    #[test]
    fn test_non_numeric_token_fails_line() {
        let tokens: Vec<&str> = "0 0 oops 1 0".split_whitespace().collect();
        let err = parse_trajectory_line(4, &tokens).unwrap_err();
        match err {
            FormatError::NonNumericToken { line, token } => {
                assert_eq!(line, 4);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_token_count() {
        let tokens: Vec<&str> = "1 2 3".split_whitespace().collect();
        assert!(matches!(
            parse_trajectory_line(1, &tokens),
            Err(FormatError::TokenCount { count: 3, .. })
        ));
        assert!(matches!(
            parse_trajectory_line(1, &[]),
            Err(FormatError::TokenCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_single_point_line() {
        let tokens: Vec<&str> = "7.5 -2.25 0.1 0 42".split_whitespace().collect();
        let traj = parse_trajectory_line(9, &tokens).unwrap();
        assert_eq!(traj.len(), 1);
        let p = traj.point(0).unwrap();
        assert_eq!(p.x, 7.5);
        assert_eq!(p.y, -2.25);
        assert_eq!(p.timestamp, 42.0);
    }
}
