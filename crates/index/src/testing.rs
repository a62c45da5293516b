//! Index fixtures for tests
//!
//! Builds small tantivy indexes in a caller-supplied directory. Every
//! fixture schema carries the `g`, `a` and `u` text fields; further fields
//! are added the first time a document uses them. Documents go into a single
//! segment unless [`IndexFixture::commit`] splits them; merging is disabled, so
//! each committed batch stays its own segment.
//!
//! # Example
//!
//! ```ignore
//! use vendor_alias_index::testing::IndexFixture;
//!
//! IndexFixture::new()
//!     .text_doc(&[("g", "org.apache.commons"), ("a", "lang3")])
//!     .write(dir.path())?;
//! ```

use std::path::Path;
use tantivy::schema::{Field, Schema, STORED, STRING};
use tantivy::merge_policy::NoMergePolicy;
use tantivy::{Index, IndexWriter, TantivyDocument, TantivyError};

/// Fields every fixture schema declares
const BASE_FIELDS: &[&str] = &["g", "a", "u"];

/// Single-thread writer budget; above tantivy's per-thread minimum
const WRITER_MEMORY_BYTES: usize = 20_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FixtureValue {
    Text(String),
    U64(u64),
}

impl FixtureValue {
    fn is_text(&self) -> bool {
        matches!(self, FixtureValue::Text(_))
    }
}

/// One fixture document
#[derive(Debug, Clone, Default)]
pub struct FixtureDoc {
    values: Vec<(String, FixtureValue)>,
}

impl FixtureDoc {
    /// Add a stored text value
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.values
            .push((name.to_string(), FixtureValue::Text(value.to_string())));
        self
    }

    /// Add a stored u64 value
    pub fn u64(mut self, name: &str, value: u64) -> Self {
        self.values.push((name.to_string(), FixtureValue::U64(value)));
        self
    }
}

/// Builder for a small index
#[derive(Debug, Clone, Default)]
pub struct IndexFixture {
    docs: Vec<FixtureDoc>,
    /// Document counts after which a commit closes the current segment
    commits: Vec<usize>,
}

impl IndexFixture {
    /// Empty fixture
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document made of text fields
    pub fn text_doc(self, fields: &[(&str, &str)]) -> Self {
        self.doc(|d| fields.iter().fold(d, |d, (name, value)| d.text(name, value)))
    }

    /// Add a document built by `build`
    pub fn doc(mut self, build: impl FnOnce(FixtureDoc) -> FixtureDoc) -> Self {
        self.docs.push(build(FixtureDoc::default()));
        self
    }

    /// Close the current segment; later documents go into a new one
    pub fn commit(mut self) -> Self {
        if self.commits.last() != Some(&self.docs.len()) {
            self.commits.push(self.docs.len());
        }
        self
    }

    /// Number of segments `write` produces
    pub fn segment_count(&self) -> usize {
        let mut bounds = self.commits.clone();
        bounds.push(self.docs.len());
        bounds.dedup();
        bounds.iter().filter(|&&n| n > 0).count()
    }

    /// Number of documents added so far
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if no documents were added
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Create the index in `dir` and commit every document
    pub fn write(&self, dir: &Path) -> tantivy::Result<()> {
        let (schema, fields) = self.schema()?;
        let index = Index::create_in_dir(dir, schema)?;
        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_MEMORY_BYTES)?;
        writer.set_merge_policy(Box::new(NoMergePolicy));

        for (position, doc) in self.docs.iter().enumerate() {
            if position > 0 && self.commits.contains(&position) {
                writer.commit()?;
            }
            let mut tantivy_doc = TantivyDocument::default();
            for (name, value) in &doc.values {
                let field = lookup(&fields, name)?;
                match value {
                    FixtureValue::Text(text) => tantivy_doc.add_text(field, text),
                    FixtureValue::U64(n) => tantivy_doc.add_u64(field, *n),
                }
            }
            writer.add_document(tantivy_doc)?;
        }

        writer.commit()?;
        writer.wait_merging_threads()
    }

    fn schema(&self) -> tantivy::Result<(Schema, Vec<(String, Field)>)> {
        let mut declared: Vec<(String, bool)> = BASE_FIELDS
            .iter()
            .map(|name| ((*name).to_string(), true))
            .collect();

        for (name, value) in self.docs.iter().flat_map(|d| d.values.iter()) {
            match declared.iter().find(|(n, _)| n == name) {
                Some((_, is_text)) if *is_text != value.is_text() => {
                    return Err(TantivyError::SchemaError(format!(
                        "field {name} used with two value types"
                    )));
                }
                Some(_) => {}
                None => declared.push((name.clone(), value.is_text())),
            }
        }

        let mut builder = Schema::builder();
        let fields = declared
            .into_iter()
            .map(|(name, is_text)| {
                let field = if is_text {
                    builder.add_text_field(&name, STRING | STORED)
                } else {
                    builder.add_u64_field(&name, STORED)
                };
                (name, field)
            })
            .collect();
        Ok((builder.build(), fields))
    }
}

fn lookup(fields: &[(String, Field)], name: &str) -> tantivy::Result<Field> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, f)| *f)
        .ok_or_else(|| TantivyError::FieldNotFound(name.to_string()))
}
