//! The evaluate loop: compile once, match each test in order, report

mod render;

use crate::pattern::FullMatcher;
use crate::report::{RunReport, TestOutcome};

/// Evaluate `pattern` against each of `tests` in order.
///
/// Progress is printed to stdout as each test is evaluated; the returned
/// [`RunReport`] carries the same information in structured form. A pattern
/// that fails to compile produces a report holding the engine diagnostic
/// instead of per-test entries — it is never a panic or a propagated error.
pub fn evaluate<S: AsRef<str>>(pattern: &str, tests: &[S]) -> RunReport {
    let mut report = RunReport::new(pattern);

    let matcher = match FullMatcher::new(pattern) {
        Ok(matcher) => matcher,
        Err(err) => {
            println!("{}", render::error_block(&err));
            report.error = Some(err.to_string());
            return report;
        }
    };

    println!("{}", render::header(pattern));

    for (index, test) in tests.iter().enumerate() {
        let input = test.as_ref();
        let groups = matcher.full_match(input);

        report.summary.total += 1;
        if groups.is_some() {
            report.summary.matches += 1;
        } else {
            report.summary.fails += 1;
        }

        // Each outcome is printed as soon as it is known.
        println!("{}", render::test_line(index + 1, input, groups.as_deref()));

        report.tests.push(TestOutcome {
            input: input.to_string(),
            matched: groups.is_some(),
            groups,
        });
    }

    println!("{}", render::footer(&report.summary));
    report
}
