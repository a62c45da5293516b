//! Artifact → group alias map
//!
//! Reads the `group|artifact` lines produced by an index scan and keeps the
//! first group seen for every acceptable artifact id. The map is written as
//! pretty-printed JSON with sorted keys.

use crate::rules::{check, SkipReason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{debug, info};
use vendor_alias_core::{Result, COMPOSITE_SEPARATOR};

/// Entries present before any input is read
pub const SEED_ALIASES: &[(&str, &str)] = &[("spring.boot", "org.springframework.boot")];

/// Sorted artifact id → group id map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(BTreeMap<String, String>);

impl AliasMap {
    /// Empty map without seed entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding only the seed entries
    pub fn seeded() -> Self {
        AliasMap(
            SEED_ALIASES
                .iter()
                .map(|(a, g)| ((*a).to_string(), (*g).to_string()))
                .collect(),
        )
    }

    /// Group id for `artifact`
    pub fn get(&self, artifact: &str) -> Option<&str> {
        self.0.get(artifact).map(String::as_str)
    }

    /// Insert unless `artifact` is already mapped; returns whether it was inserted
    pub fn insert_if_absent(&mut self, artifact: &str, group: &str) -> bool {
        if self.0.contains_key(artifact) {
            return false;
        }
        self.0.insert(artifact.to_string(), group.to_string());
        true
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(a, g)| (a.as_str(), g.as_str()))
    }

    /// Pretty JSON, two-space indent, keys sorted
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty JSON form to `writer`
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

/// Counters for one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AliasReport {
    /// Lines read
    pub lines: u64,
    /// Lines that were not exactly `group|artifact`
    pub malformed: u64,
    /// Pairs rejected by the acceptance rules
    pub skipped: u64,
    /// Accepted pairs whose artifact was already mapped
    pub collisions: u64,
    /// Accepted pairs that added an entry
    pub accepted: u64,
}

/// Incremental alias map builder
#[derive(Debug, Clone)]
pub struct AliasBuilder {
    map: AliasMap,
    report: AliasReport,
}

impl Default for AliasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasBuilder {
    /// Builder starting from the seed entries
    pub fn new() -> Self {
        Self::with_map(AliasMap::seeded())
    }

    /// Builder starting from an existing map
    pub fn with_map(map: AliasMap) -> Self {
        AliasBuilder {
            map,
            report: AliasReport::default(),
        }
    }

    /// Feed one input line
    pub fn ingest_line(&mut self, line: &str) {
        self.report.lines += 1;

        let parts: Vec<&str> = line.trim().split(COMPOSITE_SEPARATOR).collect();
        let [group, artifact] = parts.as_slice() else {
            self.report.malformed += 1;
            return;
        };

        if let Err(reason) = check(group, artifact) {
            self.skip(group, artifact, reason);
            return;
        }

        if self.map.insert_if_absent(artifact, group) {
            self.report.accepted += 1;
        } else {
            // artifact ids are not globally unique; the first group wins
            self.report.collisions += 1;
        }
    }

    /// Feed every line of `reader`
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.ingest_line(&line?);
        }
        Ok(())
    }

    /// Counters so far
    pub fn report(&self) -> AliasReport {
        self.report
    }

    /// Finish and return the map with its counters
    pub fn finish(self) -> (AliasMap, AliasReport) {
        info!(
            target: "vendor_alias::alias",
            aliases = self.map.len(),
            lines = self.report.lines,
            accepted = self.report.accepted,
            skipped = self.report.skipped,
            collisions = self.report.collisions,
            "Alias map generated"
        );
        (self.map, self.report)
    }

    fn skip(&mut self, group: &str, artifact: &str, reason: SkipReason) {
        self.report.skipped += 1;
        debug!(target: "vendor_alias::alias", group, artifact, ?reason, "Pair skipped");
    }
}
