//! Group id allowlist
//!
//! A group qualifies when any rule matches. Rules are case-sensitive; the
//! default list is kept exactly as curated, mixing prefix and substring
//! rules without a common pattern.

/// Prefix rules of the default allowlist
pub const DEFAULT_PREFIXES: &[&str] = &[
    "org.eclipse",
    "org.apache",
    "org.springframework",
    "com.fasterxml.jackson",
    "org.quartz.",
    "org.osgi.",
    "org.opencastproject.",
    "org.slf4j.",
    "org.w3c.",
    "com.sun.",
];

/// Substring rules of the default allowlist
pub const DEFAULT_SUBSTRINGS: &[&str] = &[
    "scala",
    "gradle",
    "com.lihaoyi",
    "org.checkerframework",
    "antlr4",
];

/// A single group matching rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRule {
    /// Group starts with the pattern
    Prefix(String),
    /// Group contains the pattern anywhere
    Contains(String),
}

impl GroupRule {
    /// Check the rule against a group id
    pub fn matches(&self, group: &str) -> bool {
        match self {
            GroupRule::Prefix(p) => group.starts_with(p.as_str()),
            GroupRule::Contains(s) => group.contains(s.as_str()),
        }
    }
}

/// Ordered set of rules; a match on any one qualifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFilter {
    rules: Vec<GroupRule>,
}

impl GroupFilter {
    /// Build a filter from explicit rules
    pub fn new(rules: Vec<GroupRule>) -> Self {
        GroupFilter { rules }
    }

    /// Whether `group` matches any rule
    pub fn matches(&self, group: &str) -> bool {
        self.rules.iter().any(|r| r.matches(group))
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[GroupRule] {
        &self.rules
    }
}

impl Default for GroupFilter {
    fn default() -> Self {
        let prefixes = DEFAULT_PREFIXES
            .iter()
            .map(|p| GroupRule::Prefix((*p).to_string()));
        let substrings = DEFAULT_SUBSTRINGS
            .iter()
            .map(|s| GroupRule::Contains((*s).to_string()));
        GroupFilter::new(prefixes.chain(substrings).collect())
    }
}
