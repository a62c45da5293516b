//! Scan configuration
//!
//! Builder-style options; the defaults reproduce the stock dump behaviour.

use crate::coordinate::FieldNames;
use crate::error::{Error, Result};
use crate::filter::GroupFilter;

/// Default number of documents between progress markers
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 5_000_000;

/// Options controlling a scan
///
/// # Example
///
/// ```
/// use vendor_alias_core::ScanOptions;
///
/// let opts = ScanOptions::new().progress_interval(1_000).debug_dump(false);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Documents between progress markers; must be greater than zero.
    pub progress_interval: u64,
    /// Dump the fields of document 0 to the diagnostic stream.
    pub debug_dump: bool,
    /// Suppress all diagnostic output.
    pub quiet: bool,
    /// Names of the coordinate fields.
    pub fields: FieldNames,
    /// Groups that are printed.
    pub filter: GroupFilter,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            debug_dump: true,
            quiet: false,
            fields: FieldNames::default(),
            filter: GroupFilter::default(),
        }
    }
}

impl ScanOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a progress marker every `n` documents
    pub fn progress_interval(mut self, n: u64) -> Self {
        self.progress_interval = n;
        self
    }

    /// Dump the fields of document 0 to the diagnostic stream
    pub fn debug_dump(mut self, enabled: bool) -> Self {
        self.debug_dump = enabled;
        self
    }

    /// Suppress all diagnostic output (matches are still written)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Override the coordinate field names
    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    /// Override the group filter
    pub fn filter(mut self, filter: GroupFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Reject inconsistent settings
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(Error::InvalidConfig(
                "progress interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
