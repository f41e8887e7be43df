// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country code reference for genomap.
//!
//! The reference is the read-only authority on canonical codes: given a
//! free-form name or a candidate code it either canonicalizes to an ISO
//! 3166-1 alpha-3 code or reports "not found". The pipeline consumes it
//! through the [`CountryReference`] trait so tests can substitute a toy
//! table; the shipped implementation is the embedded ISO table in
//! [`iso3166`].

mod iso3166;

pub use iso3166::{find, CountryEntry, COUNTRIES};

/// Read-only capability to canonicalize country names and codes.
pub trait CountryReference {
    /// Resolve a free-form name or candidate code to a canonical alpha-3
    /// code, or `None` if the reference does not know it.
    fn canonical_code(&self, query: &str) -> Option<String>;

    /// Whether the query canonicalizes at all. Used to validate
    /// operator-supplied codes before they are accepted.
    fn is_valid(&self, query: &str) -> bool {
        self.canonical_code(query).is_some()
    }
}

/// The embedded ISO 3166-1 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166Reference;

impl CountryReference for Iso3166Reference {
    fn canonical_code(&self, query: &str) -> Option<String> {
        find(query).map(|entry| entry.alpha3.to_string())
    }
}
