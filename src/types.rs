// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for genomap
//!
//! The pipeline moves data through three shapes: raw per-line count
//! records, per-code aggregates, and bucketed category assignments.

use serde::{Deserialize, Serialize};

/// One line of the input count file: a free-text country label and a count.
///
/// Names are not validated here; duplicates across lines are legal and are
/// summed during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCountRecord {
    pub name: String,
    pub count: u64,
}

/// Summed count for one canonical ISO 3166-1 alpha-3 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub code: String,
    pub total: u64,
}

/// The four fixed ordinal count buckets used for map coloring.
///
/// The boundaries are a design contract, not a tunable parameter:
/// exactly 100 and exactly 50 both land in `50-100`, exactly 10 in
/// `10-50`, exactly 1 in `1-10`. A total of zero gets no bucket at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountBucket {
    #[serde(rename = ">100")]
    Over100,
    #[serde(rename = "50-100")]
    FiftyTo100,
    #[serde(rename = "10-50")]
    TenTo50,
    #[serde(rename = "1-10")]
    OneTo10,
}

impl CountBucket {
    /// Fixed display priority for rendered output, highest bucket first.
    ///
    /// This ordering is explicit on purpose; it must never fall out of
    /// incidental map iteration order.
    pub const DISPLAY_ORDER: [CountBucket; 4] = [
        CountBucket::Over100,
        CountBucket::FiftyTo100,
        CountBucket::TenTo50,
        CountBucket::OneTo10,
    ];

    /// Buckets a total, or `None` for zero (zero-count codes are omitted
    /// from the final output, a confirmed policy rather than an oversight).
    pub fn from_total(total: u64) -> Option<CountBucket> {
        match total {
            0 => None,
            t if t > 100 => Some(CountBucket::Over100),
            t if t >= 50 => Some(CountBucket::FiftyTo100),
            t if t >= 10 => Some(CountBucket::TenTo50),
            _ => Some(CountBucket::OneTo10),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CountBucket::Over100 => ">100",
            CountBucket::FiftyTo100 => "50-100",
            CountBucket::TenTo50 => "10-50",
            CountBucket::OneTo10 => "1-10",
        }
    }
}

/// Final pipeline output row: one canonical code and its bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAssignment {
    pub code: String,
    pub bucket: CountBucket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_totals_bucket_exactly() {
        assert_eq!(CountBucket::from_total(1), Some(CountBucket::OneTo10));
        assert_eq!(CountBucket::from_total(9), Some(CountBucket::OneTo10));
        assert_eq!(CountBucket::from_total(10), Some(CountBucket::TenTo50));
        assert_eq!(CountBucket::from_total(49), Some(CountBucket::TenTo50));
        assert_eq!(CountBucket::from_total(50), Some(CountBucket::FiftyTo100));
        assert_eq!(CountBucket::from_total(100), Some(CountBucket::FiftyTo100));
        assert_eq!(CountBucket::from_total(101), Some(CountBucket::Over100));
    }

    #[test]
    fn zero_total_has_no_bucket() {
        assert_eq!(CountBucket::from_total(0), None);
    }

    #[test]
    fn display_order_is_highest_first() {
        assert_eq!(CountBucket::DISPLAY_ORDER[0].label(), ">100");
        assert_eq!(CountBucket::DISPLAY_ORDER[3].label(), "1-10");
    }
}
