//! Group/artifact coordinate extraction
//!
//! Coordinates are read from the dedicated group and artifact fields. When
//! either is absent the composite field (`groupId|artifactId|version|classifier|extension`)
//! is split and its first two segments are used instead.

use crate::document::StoredDocument;
use std::fmt;

/// Separator used by the composite field
pub const COMPOSITE_SEPARATOR: char = '|';

/// Names of the stored fields that carry coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Group id field
    pub group: String,
    /// Artifact id field
    pub artifact: String,
    /// Composite `|`-delimited fallback field
    pub composite: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            group: "g".to_string(),
            artifact: "a".to_string(),
            composite: "u".to_string(),
        }
    }
}

/// A (group, artifact) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Group id
    pub group: String,
    /// Artifact id
    pub artifact: String,
}

impl Coordinate {
    /// Create a coordinate
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parse the first two segments of a composite value
    ///
    /// Trailing empty segments are dropped before counting, so `"g|"` has a
    /// single segment and yields `None`.
    pub fn from_composite(composite: &str) -> Option<Self> {
        let mut segments: Vec<&str> = composite.split(COMPOSITE_SEPARATOR).collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        match segments.as_slice() {
            [group, artifact, ..] => Some(Coordinate::new(*group, *artifact)),
            _ => None,
        }
    }

    /// Both parts non-empty
    pub fn is_complete(&self) -> bool {
        !self.group.is_empty() && !self.artifact.is_empty()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, COMPOSITE_SEPARATOR, self.artifact)
    }
}

/// Extract the coordinate of a document
///
/// Returns `None` when neither the direct fields nor the composite field
/// give a non-empty group and artifact.
pub fn extract(doc: &StoredDocument, fields: &FieldNames) -> Option<Coordinate> {
    let group = non_empty(doc.text(&fields.group));
    let artifact = non_empty(doc.text(&fields.artifact));

    let coordinate = match (group, artifact) {
        (Some(g), Some(a)) => Coordinate::new(g, a),
        _ => Coordinate::from_composite(doc.text(&fields.composite)?)?,
    };

    coordinate.is_complete().then_some(coordinate)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
