//! Pattern compilation with whole-string match semantics

mod matcher;

pub use matcher::FullMatcher;
