//! Stored document model
//!
//! A `StoredDocument` is the library-neutral view of one record fetched from
//! the index: its global ordinal plus every stored field in the order the
//! source reports them.

use std::fmt;

/// Value of one stored field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    /// Text value, visible to field lookups
    Text(String),
    /// Non-text value (number, date, bytes, ...) rendered for display only
    Other(String),
}

impl StoredValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            StoredValue::Other(_) => None,
        }
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredValue::Text(s) | StoredValue::Other(s) => f.write_str(s),
        }
    }
}

/// A named stored field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredField {
    /// Field name in the index schema
    pub name: String,
    /// Stored value
    pub value: StoredValue,
}

impl StoredField {
    /// Create a text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        StoredField {
            name: name.into(),
            value: StoredValue::Text(value.into()),
        }
    }

    /// Create a non-text field with its display rendering
    pub fn other(name: impl Into<String>, rendered: impl Into<String>) -> Self {
        StoredField {
            name: name.into(),
            value: StoredValue::Other(rendered.into()),
        }
    }
}

/// One document fetched from the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredDocument {
    /// Global ordinal in `[0, max_doc)`
    pub ordinal: u64,
    /// Stored fields; a name may repeat for multi-valued fields
    pub fields: Vec<StoredField>,
}

impl StoredDocument {
    /// Create an empty document at `ordinal`
    pub fn new(ordinal: u64) -> Self {
        StoredDocument {
            ordinal,
            fields: Vec::new(),
        }
    }

    /// Builder-style text field append
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(StoredField::text(name, value));
        self
    }

    /// Append a field
    pub fn push(&mut self, field: StoredField) {
        self.fields.push(field);
    }

    /// First text value stored under `name`
    ///
    /// Non-text values are skipped, so a numeric field reads as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .find_map(|f| f.value.as_text())
    }

    /// Iterate all fields in stored order
    pub fn iter(&self) -> impl Iterator<Item = &StoredField> {
        self.fields.iter()
    }

    /// Number of stored field values
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document has no stored fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
