// SPDX-License-Identifier: PMPL-1.0-or-later

//! Map renderer collaborator seam.
//!
//! The core hands the renderer a title plus the `(code, bucket)` rows in
//! fixed display priority order and stays ignorant of projection and
//! palette. The shipped implementation writes a pretty-printed JSON
//! artifact that external choropleth tooling consumes.

use crate::types::{AggregateRecord, CategoryAssignment, CountBucket};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One row of the rendered series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRow {
    pub code: String,
    pub bucket: CountBucket,
    pub total: u64,
    /// Color value: the raw total, or ln(total) when log scaling is on.
    pub value: f64,
}

/// The full payload handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSeries {
    pub title: String,
    pub rows: Vec<MapRow>,
}

/// Builds the renderer payload from display-ordered assignments and the
/// aggregates they came from.
pub fn build_series(
    title: &str,
    aggregates: &[AggregateRecord],
    ordered: &[CategoryAssignment],
    log_scale: bool,
) -> MapSeries {
    let totals: HashMap<&str, u64> = aggregates
        .iter()
        .map(|record| (record.code.as_str(), record.total))
        .collect();

    let rows = ordered
        .iter()
        .map(|assignment| {
            let total = totals.get(assignment.code.as_str()).copied().unwrap_or(0);
            let value = if log_scale {
                (total as f64).ln()
            } else {
                total as f64
            };
            MapRow {
                code: assignment.code.clone(),
                bucket: assignment.bucket,
                total,
                value,
            }
        })
        .collect();

    MapSeries {
        title: title.to_string(),
        rows,
    }
}

/// Renders a [`MapSeries`] to an artifact at `path`.
pub trait MapRenderer {
    fn render(&self, series: &MapSeries, path: &Path) -> Result<()>;
}

/// Writes the series as a JSON document for external map tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArtifactRenderer;

impl MapRenderer for JsonArtifactRenderer {
    fn render(&self, series: &MapSeries, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(series)?;
        fs::write(path, payload)
            .with_context(|| format!("writing map artifact {}", path.display()))
    }
}
