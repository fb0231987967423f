//! Plain-text report layout.

use std::fmt::Write;

use crate::stats::TestResult;
use crate::tally::{ObservedCounts, MAX_NUMBER};

const LINE_WIDTH: usize = 75;

/// Render the report for one run. Output depends only on the inputs.
pub fn format_report(observed: &ObservedCounts, result: &TestResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Observed counts for each number (1 to {MAX_NUMBER}):");
    let _ = writeln!(out, "{}", wrap_counts(observed.as_slice()));
    out.push('\n');
    let _ = writeln!(out, "Total observed numbers: {}", observed.total());
    let _ = writeln!(
        out,
        "Expected frequency for each number: {:.2}",
        result.expected_frequency
    );
    out.push('\n');
    let _ = writeln!(out, "Chi-square statistic: {:.4}", result.chi_square_statistic);
    let _ = writeln!(out, "p-value: {:.6}", result.p_value);
    out.push('\n');
    let _ = writeln!(
        out,
        "Standard Deviation of observed counts: {:.4}",
        result.standard_deviation
    );
    let _ = writeln!(out, "Variance of observed counts: {:.4}", result.variance);
    out
}

/// `[a, b, c]` broken into lines of at most `LINE_WIDTH` columns, with
/// continuation lines indented by one space.
fn wrap_counts(counts: &[u64]) -> String {
    if counts.is_empty() {
        return "[]".into();
    }

    let mut lines = Vec::new();
    let mut line = String::from("[");
    let mut first_on_line = true;

    for (i, c) in counts.iter().enumerate() {
        let token = if i + 1 == counts.len() {
            format!("{c}]")
        } else {
            format!("{c},")
        };

        if !first_on_line && line.len() + 1 + token.len() > LINE_WIDTH {
            lines.push(std::mem::replace(&mut line, String::from(" ")));
            first_on_line = true;
        }
        if !first_on_line {
            line.push(' ');
        }
        line.push_str(&token);
        first_on_line = false;
    }
    lines.push(line);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::chi_square_uniform;

    #[test]
    fn test_wrap_short() {
        assert_eq!(wrap_counts(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(wrap_counts(&[]), "[]");
    }

    #[test]
    fn test_wrap_respects_width() {
        let counts = [123u64; MAX_NUMBER];
        let wrapped = wrap_counts(&counts);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= LINE_WIDTH));
        assert!(lines[0].starts_with('['));
        assert!(lines[1..].iter().all(|l| l.starts_with(' ')));
        assert!(wrapped.ends_with(']'));

        let values: Vec<u64> = wrapped
            .trim_matches(|c| c == '[' || c == ']')
            .split(',')
            .map(|s| s.trim().parse().unwrap())
            .collect();
        assert_eq!(values, counts.to_vec());
    }

    #[test]
    fn test_report_layout() {
        let observed = ObservedCounts::from_counts([10; MAX_NUMBER]);
        let result = chi_square_uniform(&observed).unwrap();
        let report = format_report(&observed, &result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Observed counts for each number (1 to 42):");
        assert!(report.contains("\n\nTotal observed numbers: 420\n"));
        assert!(report.contains("Expected frequency for each number: 10.00\n\n"));
        assert!(report.contains("Chi-square statistic: 0.0000\n"));
        assert!(report.contains("p-value: 1.000000\n\n"));
        assert!(report.contains("Standard Deviation of observed counts: 0.0000\n"));
        assert!(report.ends_with("Variance of observed counts: 0.0000\n"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut raw = [0u64; MAX_NUMBER];
        raw[6] = 50;
        raw[20] = 3;
        let observed = ObservedCounts::from_counts(raw);
        let result = chi_square_uniform(&observed).unwrap();
        assert_eq!(
            format_report(&observed, &result),
            format_report(&observed, &result)
        );
    }
}
