//! rxcheck: interactive regex tester with full-match semantics
//!
//! rxcheck compiles a single pattern and evaluates it against a list of
//! candidate strings. A string only counts as a match when the pattern
//! consumes it entirely, so `abc` does not match `xabcx`. Each outcome is
//! printed as it is produced, followed by a pass/fail tally.
//!
//! # Quick Start
//!
//! ```
//! use rxcheck::evaluate;
//!
//! let report = evaluate(r"(\d+)-(\d+)", &["12-34", "12-34-56"]);
//!
//! assert_eq!(report.summary.total, 2);
//! assert_eq!(report.summary.matches, 1);
//! assert!(report.tests[0].matched);
//! ```
//!
//! # Capture Groups
//!
//! Matched tests carry the values of the pattern's capture groups in
//! pattern order. Groups that did not participate in the match are `None`:
//!
//! ```
//! use rxcheck::evaluate;
//!
//! let report = evaluate(r"(a)|(b)", &["a"]);
//! let groups = report.tests[0].groups.as_ref().unwrap();
//!
//! assert_eq!(groups[0].as_deref(), Some("a"));
//! assert_eq!(groups[1], None);
//! ```
//!
//! # Invalid Patterns
//!
//! A pattern that fails to compile is a reported outcome, not a panic: the
//! returned [`RunReport`] carries the engine diagnostic and no per-test
//! entries.
//!
//! ```
//! use rxcheck::evaluate;
//!
//! let report = evaluate("(abc", &["abc"]);
//!
//! assert!(report.error.is_some());
//! assert!(report.tests.is_empty());
//! ```

#![warn(missing_docs)]

mod pattern;
mod report;
mod runner;

// Public API exports
pub use pattern::FullMatcher;
pub use report::{PatternError, RunReport, Summary, TestOutcome};
pub use runner::evaluate;
