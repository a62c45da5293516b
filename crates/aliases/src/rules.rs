//! Pair acceptance rules
//!
//! Only artifact ids that look like distinct, hyphenated bundle names make
//! useful aliases. Docs, samples, tests, incubator and example artifacts are
//! rejected, as are artifacts with upper-case letters.

/// Why a pair was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Artifact has no `-`
    NoHyphen,
    /// Group and artifact are the same string
    SameAsGroup,
    /// Artifact is a documentation bundle
    Docs,
    /// Artifact is an incubator build
    Incubating,
    /// Group or artifact names an example
    Example,
    /// Group or artifact names a test
    Test,
    /// Artifact has upper-case characters
    NotLowercase,
    /// Group or artifact names a sample
    Sample,
}

/// Check a (group, artifact) pair, returning the first failed rule
pub fn check(group: &str, artifact: &str) -> Result<(), SkipReason> {
    if !artifact.contains('-') {
        return Err(SkipReason::NoHyphen);
    }
    if group == artifact {
        return Err(SkipReason::SameAsGroup);
    }
    if artifact.contains("docs") {
        return Err(SkipReason::Docs);
    }
    if artifact.contains("incubating") {
        return Err(SkipReason::Incubating);
    }
    if group.contains("example") || artifact.contains("example") {
        return Err(SkipReason::Example);
    }
    if group.contains("test") || artifact.contains("test") {
        return Err(SkipReason::Test);
    }
    if artifact.to_lowercase() != artifact {
        return Err(SkipReason::NotLowercase);
    }
    if group.contains("sample") || artifact.contains("sample") {
        return Err(SkipReason::Sample);
    }
    Ok(())
}
