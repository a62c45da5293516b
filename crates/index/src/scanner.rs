//! Tantivy-backed document source
//!
//! `IndexScanner` opens an index directory read-only and exposes its stored
//! documents by global ordinal. Ordinals run through the segments in the
//! order the searcher lists them; within a segment they follow the segment's
//! doc ids, deleted-but-unmerged documents included.
//!
//! Fields of a fetched document are reported grouped by name in name order,
//! with the values of a multi-valued field kept in stored order.

use crate::directory::ReadOnlyDirectory;
use crate::error::{open_error, read_error};
use std::path::{Path, PathBuf};
use tantivy::schema::{Document, OwnedValue, Schema};
use tantivy::{DocAddress, Index, IndexReader, ReloadPolicy, Searcher, TantivyDocument};
use tracing::info;
use vendor_alias_core::{DocumentSource, Error, Result, StoredDocument, StoredField};

/// Read-only handle on an index directory
///
/// The reader and its segment handles are released when the scanner is dropped.
pub struct IndexScanner {
    path: PathBuf,
    schema: Schema,
    /// Kept so the searcher's segments stay pinned for the scanner's lifetime
    _reader: IndexReader,
    searcher: Searcher,
    /// First global ordinal of each segment
    segment_starts: Vec<u64>,
    max_doc: u64,
}

impl IndexScanner {
    /// Open the index stored in `path`
    ///
    /// Fails with `Error::IndexNotFound` when `path` is not a directory and
    /// with `Error::IndexOpen` when the directory does not hold a readable index.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(Error::IndexNotFound(path));
        }

        let directory = ReadOnlyDirectory::open(&path).map_err(|e| open_error(&path, e.into()))?;
        let index = Index::open(directory).map_err(|e| open_error(&path, e))?;
        let schema = index.schema();
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| open_error(&path, e))?;
        let searcher = reader.searcher();

        let mut segment_starts = Vec::with_capacity(searcher.segment_readers().len());
        let mut max_doc = 0u64;
        for segment in searcher.segment_readers() {
            segment_starts.push(max_doc);
            max_doc += u64::from(segment.max_doc());
        }

        info!(
            target: "vendor_alias::index",
            path = %path.display(),
            segments = segment_starts.len(),
            max_doc,
            "Index opened"
        );

        Ok(IndexScanner {
            path,
            schema,
            _reader: reader,
            searcher,
            segment_starts,
            max_doc,
        })
    }

    /// Number of segments in the opened snapshot
    pub fn segment_count(&self) -> usize {
        self.segment_starts.len()
    }

    /// Names of the schema fields, in schema order
    pub fn field_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .map(|(_, entry)| entry.name().to_string())
            .collect()
    }

    /// Map a global ordinal to its segment address
    fn locate(&self, ordinal: u64) -> Result<DocAddress> {
        if ordinal >= self.max_doc {
            return Err(Error::OrdinalOutOfRange {
                ordinal,
                max_doc: self.max_doc,
            });
        }
        // segment_starts[0] == 0 whenever max_doc > 0, so the index is >= 1
        let segment = self.segment_starts.partition_point(|&start| start <= ordinal) - 1;
        let local = ordinal - self.segment_starts[segment];
        Ok(DocAddress::new(segment as u32, local as u32))
    }
}

impl DocumentSource for IndexScanner {
    fn location(&self) -> &Path {
        &self.path
    }

    fn max_doc(&self) -> u64 {
        self.max_doc
    }

    fn document(&self, ordinal: u64) -> Result<StoredDocument> {
        let address = self.locate(ordinal)?;
        let doc: TantivyDocument = self
            .searcher
            .doc(address)
            .map_err(|e| read_error(ordinal, e))?;

        let mut stored = StoredDocument::new(ordinal);
        for (name, values) in doc.to_named_doc(&self.schema).0 {
            for value in values {
                stored.push(to_stored_field(&name, value));
            }
        }
        Ok(stored)
    }
}

fn to_stored_field(name: &str, value: OwnedValue) -> StoredField {
    match value {
        OwnedValue::Str(text) => StoredField::text(name, text),
        other => {
            let rendered = serde_json::to_string(&other).unwrap_or_else(|_| format!("{:?}", other));
            StoredField::other(name, rendered)
        }
    }
}

impl std::fmt::Debug for IndexScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexScanner")
            .field("path", &self.path)
            .field("segments", &self.segment_starts.len())
            .field("max_doc", &self.max_doc)
            .finish()
    }
}
