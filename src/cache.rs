// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent translation cache: raw country name -> canonical alpha-3 code.
//!
//! The cache is a flat tab-delimited file, one `raw_name<TAB>code` line per
//! entry. It is loaded fully into memory at the start of a run, mutated in
//! place while resolving, and rewritten in full (not appended) exactly once
//! at the end of the pass. Insertion order is preserved across the
//! round-trip so the file stays diffable between runs.
//!
//! The file is treated as exclusively owned by one process invocation;
//! concurrent runs against the same path can lose updates.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// In-memory translation cache with stable insertion order.
///
/// Entries are never removed during a run; a cached code is trusted as-is
/// even if a newer reference table no longer recognizes it.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    codes: HashMap<String, String>,
    order: Vec<String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a cache from `path`, or returns an empty cache if the file
    /// does not exist yet. A line without exactly one tab separator is a
    /// fatal format error; guessing a code here would poison every later
    /// run that trusts the file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading translation cache {}", path.display()))?;

        let mut cache = Self::new();
        for (idx, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(raw_name), Some(code), None) if !raw_name.is_empty() && !code.is_empty() => {
                    cache.insert(raw_name, code);
                }
                _ => bail!(
                    "malformed translation cache {} at line {}: expected <name><TAB><code>, got {:?}",
                    path.display(),
                    idx + 1,
                    line
                ),
            }
        }
        Ok(cache)
    }

    /// Rewrites `path` with the full cache contents in insertion order.
    ///
    /// This is a whole-file overwrite: anything in the file that is not in
    /// this cache is gone afterwards, which is why callers always load
    /// before mutating.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for raw_name in &self.order {
            out.push_str(raw_name);
            out.push('\t');
            out.push_str(&self.codes[raw_name]);
            out.push('\n');
        }
        fs::write(path, out)
            .with_context(|| format!("writing translation cache {}", path.display()))
    }

    pub fn get(&self, raw_name: &str) -> Option<&str> {
        self.codes.get(raw_name).map(String::as_str)
    }

    /// Stores a mapping. A repeated key keeps its original position in the
    /// file; in practice the resolver never re-inserts a cached name.
    pub fn insert(&mut self, raw_name: &str, code: &str) {
        if self
            .codes
            .insert(raw_name.to_string(), code.to_string())
            .is_none()
        {
            self.order.push(raw_name.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.codes[name].as_str()))
    }
}
