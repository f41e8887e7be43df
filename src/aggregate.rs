// SPDX-License-Identifier: PMPL-1.0-or-later

//! Count-file parsing and per-code aggregation.
//!
//! The input file has one record per line, `<count> <country name>`,
//! split on the first space only so names keep their internal spaces.
//! Aggregation resolves every name (possibly blocking on the operator)
//! and sums counts per canonical code; two lines whose names resolve to
//! the same code contribute to one total.

use crate::cache::TranslationCache;
use crate::reference::CountryReference;
use crate::resolve::{self, Operator, Resolution};
use crate::types::{AggregateRecord, RawCountRecord};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parses the raw count file. Blank lines are ignored; anything else
/// that does not start with a non-negative integer count followed by a
/// space is fatal, naming the offending line.
pub fn read_country_counts(path: &Path) -> Result<Vec<RawCountRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading count file {}", path.display()))?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let Some((count_str, name)) = line.split_once(' ') else {
            bail!(
                "malformed count line {} in {}: expected <count> <country name>, got {:?}",
                idx + 1,
                path.display(),
                line
            );
        };
        if count_str.starts_with('-') {
            bail!(
                "negative count on line {} in {}: {:?}",
                idx + 1,
                path.display(),
                count_str
            );
        }
        let count: u64 = count_str.parse().with_context(|| {
            format!(
                "invalid count on line {} in {}: {:?}",
                idx + 1,
                path.display(),
                count_str
            )
        })?;
        let name = name.trim();
        if name.is_empty() {
            bail!(
                "missing country name on line {} in {}",
                idx + 1,
                path.display()
            );
        }
        records.push(RawCountRecord {
            name: name.to_string(),
            count,
        });
    }
    Ok(records)
}

/// Resolves every record and sums counts per canonical code.
///
/// Output records appear in first-resolution order, which also matches
/// the order new entries land in the cache file. Input ordering cannot
/// change any total, only that presentation order.
pub fn aggregate<R, O>(
    records: &[RawCountRecord],
    cache: &mut TranslationCache,
    reference: &R,
    operator: &mut O,
    verbose: bool,
) -> Result<Vec<AggregateRecord>>
where
    R: CountryReference,
    O: Operator,
{
    let mut totals: Vec<AggregateRecord> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let resolution = resolve::resolve(&record.name, cache, reference, operator)?;
        if verbose {
            let via = match &resolution {
                Resolution::CacheHit(_) => "cache",
                Resolution::ReferenceHit(_) => "reference",
                Resolution::OperatorSupplied { .. } => "operator",
            };
            println!(
                "  {} {} -> {} ({})",
                "resolved".green(),
                record.name,
                resolution.code(),
                via
            );
        }

        let code = resolution.code().to_string();
        match slots.get(&code) {
            Some(&idx) => totals[idx].total += record.count,
            None => {
                slots.insert(code.clone(), totals.len());
                totals.push(AggregateRecord {
                    code,
                    total: record.count,
                });
            }
        }
    }

    Ok(totals)
}
