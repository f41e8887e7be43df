// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end pipeline: counts -> resolution -> aggregation -> buckets
//! -> rendered artifact.
//!
//! The translation cache is loaded once before resolution starts and
//! persisted exactly once after every record has resolved; a crash in
//! between discards the session's new mappings, never the file's old
//! ones.

use crate::aggregate;
use crate::cache::TranslationCache;
use crate::categorize;
use crate::reference::CountryReference;
use crate::render::{self, MapRenderer, MapSeries};
use crate::resolve::Operator;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Configuration for one pipeline run.
pub struct PipelineConfig {
    /// Raw count file, one `<count> <country name>` per line.
    pub input: PathBuf,
    /// Translation cache path; created on first save if absent.
    pub translate: PathBuf,
    /// Where the rendered artifact goes.
    pub output: PathBuf,
    /// Title handed to the renderer.
    pub title: String,
    /// Natural-log scale the color values (bucketing always uses raw totals).
    pub log_scale: bool,
    /// Print one line per resolved record.
    pub verbose: bool,
}

/// Outcome summary for console reporting.
#[derive(Debug)]
pub struct PipelineReport {
    pub records_read: usize,
    pub codes_aggregated: usize,
    pub codes_rendered: usize,
    pub cache_entries: usize,
}

/// Runs the whole pipeline with the given collaborators.
pub fn run<R, O, M>(
    config: &PipelineConfig,
    reference: &R,
    operator: &mut O,
    renderer: &M,
) -> Result<PipelineReport>
where
    R: CountryReference,
    O: Operator,
    M: MapRenderer,
{
    let records = aggregate::read_country_counts(&config.input)?;
    let mut cache = TranslationCache::load(&config.translate)?;

    let aggregates =
        aggregate::aggregate(&records, &mut cache, reference, operator, config.verbose)?;

    // All records resolved; this is the single persistence point.
    cache.save(&config.translate)?;

    let assignments = categorize::categorize(&aggregates);
    let ordered = categorize::display_order(&assignments);
    let series: MapSeries =
        render::build_series(&config.title, &aggregates, &ordered, config.log_scale);
    renderer.render(&series, &config.output)?;

    Ok(PipelineReport {
        records_read: records.len(),
        codes_aggregated: aggregates.len(),
        codes_rendered: ordered.len(),
        cache_entries: cache.len(),
    })
}

impl PipelineReport {
    pub fn print(&self) {
        println!(
            "{} {} records, {} countries, {} rendered, {} cached translations",
            "done:".green().bold(),
            self.records_read,
            self.codes_aggregated,
            self.codes_rendered,
            self.cache_entries
        );
    }
}
