//! Human-readable output for evaluation runs

use crate::report::{PatternError, Summary};

const RULE_WIDTH: usize = 50;

pub(crate) fn header(pattern: &str) -> String {
    format!("Testing pattern: {pattern}\n{}", "-".repeat(RULE_WIDTH))
}

pub(crate) fn test_line(number: usize, input: &str, groups: Option<&[Option<String>]>) -> String {
    match groups {
        Some(groups) if groups.is_empty() => {
            format!("Test {number}: ✓ MATCH\n   String: '{input}'")
        }
        Some(groups) => format!(
            "Test {number}: ✓ MATCH\n   String: '{input}' | Groups: ({})",
            format_groups(groups)
        ),
        None => format!("Test {number}: ✗ NO MATCH\n   String: '{input}'"),
    }
}

pub(crate) fn footer(summary: &Summary) -> String {
    let remark = if summary.fails == 0 && summary.total > 0 {
        "✓ All tests passed!".to_string()
    } else {
        format!("✗ {} test(s) failed.", summary.fails)
    };

    format!(
        "{}\nScore: {}/{} tests passed\n{remark}",
        "-".repeat(RULE_WIDTH),
        summary.matches,
        summary.total
    )
}

pub(crate) fn error_block(err: &PatternError) -> String {
    format!("✗ Pattern error: {err}\nThe pattern did not compile; no tests were run.")
}

fn format_groups(groups: &[Option<String>]) -> String {
    groups
        .iter()
        .map(|group| match group {
            Some(value) => format!("'{value}'"),
            None => "unset".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
