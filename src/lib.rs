// SPDX-License-Identifier: PMPL-1.0-or-later

//! genomap — per-country genome-count choropleth pipeline.
//!
//! Ingests raw per-country genome counts, resolves free-text country
//! names to canonical ISO 3166-1 alpha-3 codes, aggregates counts per
//! code, buckets the totals into four fixed ordinal categories, and
//! hands the result to a map renderer.
//!
//! PIPELINE STAGES:
//! 1. **Aggregate**: parse `<count> <name>` lines and sum per resolved code.
//! 2. **Resolve**: translation cache first, then the embedded ISO 3166-1
//!    reference, then a blocking operator prompt that retries until a
//!    valid code is typed. Newly learned mappings persist to the cache
//!    file at the end of the pass.
//! 3. **Categorize**: bucket totals into `>100`, `50-100`, `10-50`,
//!    `1-10`; zero totals are dropped.
//! 4. **Render**: emit the display-ordered `(code, bucket)` series as an
//!    artifact for external map tooling.

pub mod aggregate;
pub mod cache;
pub mod categorize;
pub mod pipeline;
pub mod reference;
pub mod render;
pub mod resolve;
pub mod types;
