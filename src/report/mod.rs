//! Result records produced by an evaluation run

mod error;

pub use error::PatternError;

/// Outcome of evaluating one test string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    /// The test string exactly as supplied.
    pub input: String,

    /// Whether the pattern consumed the entire string.
    pub matched: bool,

    /// Captured group values in pattern order, present only when matched.
    ///
    /// Entries are `None` for groups that did not participate in the match.
    /// A matching pattern without capture groups yields `Some` of an empty
    /// vector, not `None`.
    pub groups: Option<Vec<Option<String>>>,
}

/// Aggregate counters for one run.
///
/// `total == matches + fails` holds whenever the pattern compiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of test strings evaluated.
    pub total: usize,

    /// Number of full matches.
    pub matches: usize,

    /// Number of strings the pattern did not fully match.
    pub fails: usize,
}

/// Everything produced by one [`evaluate`](crate::evaluate) call.
///
/// Built fresh per invocation and filled incrementally as each test string
/// is evaluated; nothing carries over between runs.
///
/// # Examples
///
/// ```
/// use rxcheck::evaluate;
///
/// let report = evaluate(r"\d+", &["123", "abc"]);
///
/// assert_eq!(report.pattern, r"\d+");
/// assert_eq!(report.summary.total, 2);
/// assert_eq!(report.summary.matches, 1);
/// assert_eq!(report.summary.fails, 1);
/// assert!(report.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The pattern under test, as supplied.
    pub pattern: String,

    /// Per-test outcomes in input order.
    pub tests: Vec<TestOutcome>,

    /// Aggregate counters; zeroed when the pattern failed to compile.
    pub summary: Summary,

    /// Engine diagnostic when the pattern failed to compile.
    pub error: Option<String>,
}

impl RunReport {
    /// Create an empty report for `pattern`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            tests: Vec::new(),
            summary: Summary::default(),
            error: None,
        }
    }
}
