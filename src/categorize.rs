// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bucketing of aggregate totals into the four fixed categories.
//!
//! Pure and deterministic, no I/O. Zero totals drop out here; every
//! other aggregate gets exactly one bucket.

use crate::types::{AggregateRecord, CategoryAssignment, CountBucket};

/// Assigns a bucket to every aggregate with a non-zero total, keeping
/// the aggregates' relative order.
pub fn categorize(aggregates: &[AggregateRecord]) -> Vec<CategoryAssignment> {
    aggregates
        .iter()
        .filter_map(|record| {
            CountBucket::from_total(record.total).map(|bucket| CategoryAssignment {
                code: record.code.clone(),
                bucket,
            })
        })
        .collect()
}

/// Reorders assignments into the fixed display priority (">100" first,
/// "1-10" last) for the renderer. Within a bucket the incoming order is
/// kept.
pub fn display_order(assignments: &[CategoryAssignment]) -> Vec<CategoryAssignment> {
    let mut ordered = Vec::with_capacity(assignments.len());
    for bucket in CountBucket::DISPLAY_ORDER {
        ordered.extend(
            assignments
                .iter()
                .filter(|assignment| assignment.bucket == bucket)
                .cloned(),
        );
    }
    ordered
}
