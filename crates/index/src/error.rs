//! Conversion of index library errors into the workspace error type

use std::path::Path;
use tantivy::TantivyError;
use vendor_alias_core::Error;

/// Wrap a failure to open the index at `path`
pub(crate) fn open_error(path: &Path, err: TantivyError) -> Error {
    Error::IndexOpen {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Wrap a failure to fetch the stored fields of `ordinal`
pub(crate) fn read_error(ordinal: u64, err: TantivyError) -> Error {
    Error::DocumentRead {
        ordinal,
        reason: err.to_string(),
    }
}
