//! Property tests for the line classifier, parser, and scanner.

use proptest::prelude::*;

use digilets_format::{
    classify_line, parse_trajectory_line, scan_blob, LineKind, LABEL_TOKEN_COUNT, RAW_FEATURES,
};

fn trajectory_tokens(max_points: usize) -> impl Strategy<Value = Vec<String>> {
    (1..=max_points).prop_flat_map(|points| {
        prop::collection::vec(-1000.0f32..1000.0, points * RAW_FEATURES)
            .prop_map(|values| values.iter().map(|v| v.to_string()).collect())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_classifier_dispatch_is_exact(count in 0usize..400) {
        let kind = LineKind::from_token_count(count);
        if count == LABEL_TOKEN_COUNT {
            prop_assert_eq!(kind, LineKind::Label);
        } else if count > 0 && count % RAW_FEATURES == 0 {
            prop_assert_eq!(kind, LineKind::Trajectory { points: count / RAW_FEATURES });
        } else {
            prop_assert_eq!(kind, LineKind::Invalid);
        }
    }

    #[test]
    fn prop_parse_preserves_values(tokens in trajectory_tokens(20)) {
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let traj = parse_trajectory_line(1, &refs).unwrap();

        prop_assert_eq!(traj.len(), tokens.len() / RAW_FEATURES);
        for (index, token) in tokens.iter().enumerate() {
            let expected: f32 = token.parse().unwrap();
            let (row, col) = (index / RAW_FEATURES, index % RAW_FEATURES);
            prop_assert_eq!(traj.data()[[row, col]], expected);
        }
    }

    #[test]
    fn prop_one_bad_token_fails_only_its_line(position in 0usize..10) {
        let mut tokens: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        tokens[position] = "bad".to_string();
        let line = tokens.join(" ");
        let blob = format!("{}\n0 0 0.5 1 0\n", line);

        let scan = scan_blob(&blob);
        prop_assert_eq!(scan.report.trajectory_lines, 2);
        prop_assert_eq!(scan.report.parse_failures, 1);
        prop_assert_eq!(scan.trajectories.len(), 1);
    }

    #[test]
    fn prop_scan_accounting_adds_up(lines in prop::collection::vec(0usize..100, 0..30)) {
        let mut blob = String::new();
        for &count in &lines {
            blob.push_str(&vec!["1.5"; count].join(" "));
            blob.push('\n');
        }
        let scan = scan_blob(&blob);
        let report = scan.report;

        prop_assert_eq!(report.lines, lines.len());
        prop_assert_eq!(
            report.label_lines + report.trajectory_lines + report.invalid_lines,
            report.lines
        );
        // Every token here is numeric, so classified lines all parse
        prop_assert_eq!(report.parse_failures, 0);
        prop_assert_eq!(scan.trajectories.len(), report.parsed());
    }

    #[test]
    fn prop_classify_matches_whitespace_tokenization(count in 0usize..100) {
        let line = vec!["0.5"; count].join("  ");
        prop_assert_eq!(classify_line(&line), LineKind::from_token_count(count));
    }
}
