//! Document source abstraction
//!
//! The scan loop only needs three things from an index: where it lives, how
//! many ordinals it has, and the stored fields of one ordinal. Index
//! libraries plug in behind this trait.

use crate::document::StoredDocument;
use crate::error::Result;
use std::path::Path;

/// Read-only, ordinal-addressable document store
pub trait DocumentSource {
    /// Location the source was opened from
    fn location(&self) -> &Path;

    /// Number of document ordinals, including deleted-but-unmerged documents
    fn max_doc(&self) -> u64;

    /// Fetch the stored fields of `ordinal`
    ///
    /// Returns `Error::OrdinalOutOfRange` when `ordinal >= max_doc()`.
    fn document(&self, ordinal: u64) -> Result<StoredDocument>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn location(&self) -> &Path {
        (**self).location()
    }

    fn max_doc(&self) -> u64 {
        (**self).max_doc()
    }

    fn document(&self, ordinal: u64) -> Result<StoredDocument> {
        (**self).document(ordinal)
    }
}
