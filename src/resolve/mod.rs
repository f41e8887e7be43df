// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country name resolution: cache, then reference, then operator.
//!
//! Every raw name must end up with a valid canonical code before the
//! pipeline can continue; there is no placeholder code and no skip. The
//! three-step lookup is:
//!
//! 1. Translation cache. A hit short-circuits everything, including the
//!    reference, so a stale cached mapping is trusted forever until a
//!    human edits the cache file.
//! 2. Country code reference. A hit is recorded into the cache.
//! 3. The operator. The unresolved name is shown and the pipeline blocks
//!    until a code that the reference accepts is supplied; invalid codes
//!    re-prompt without bound. The accepted code is recorded into the
//!    cache.
//!
//! The operator is a capability ([`Operator`]) rather than a literal
//! stdin read, so non-interactive contexts can script the recovery path.
//! [`ConsoleOperator`] is the blocking stdin implementation used by the
//! CLI.

mod operator;

pub use operator::{ConsoleOperator, Operator, OperatorPrompt, ScriptedOperator};

use crate::cache::TranslationCache;
use crate::reference::CountryReference;
use anyhow::Result;

/// How a raw name was resolved. Carries the canonical code either way;
/// callers that only need the code use [`Resolution::code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name was already in the translation cache.
    CacheHit(String),
    /// The reference recognized the name directly; the mapping is now
    /// cached.
    ReferenceHit(String),
    /// The operator supplied the code after one or more prompts;
    /// `rejected` holds the invalid candidates typed along the way.
    OperatorSupplied { code: String, rejected: Vec<String> },
}

impl Resolution {
    pub fn code(&self) -> &str {
        match self {
            Resolution::CacheHit(code) => code,
            Resolution::ReferenceHit(code) => code,
            Resolution::OperatorSupplied { code, .. } => code,
        }
    }
}

/// Resolves one raw country name to a canonical alpha-3 code.
///
/// Mutates `cache` in place on a reference hit or operator answer; the
/// caller persists the cache once after the whole pass, so a crash
/// mid-run discards the session's new mappings.
pub fn resolve<R, O>(
    raw_name: &str,
    cache: &mut TranslationCache,
    reference: &R,
    operator: &mut O,
) -> Result<Resolution>
where
    R: CountryReference,
    O: Operator,
{
    if let Some(code) = cache.get(raw_name) {
        return Ok(Resolution::CacheHit(code.to_string()));
    }

    if let Some(code) = reference.canonical_code(raw_name) {
        cache.insert(raw_name, &code);
        return Ok(Resolution::ReferenceHit(code));
    }

    let mut rejected: Vec<String> = Vec::new();
    loop {
        let prompt = match rejected.last() {
            None => OperatorPrompt::Unresolved { raw_name },
            Some(candidate) => OperatorPrompt::InvalidCode {
                raw_name,
                candidate: candidate.as_str(),
            },
        };
        let answer = operator.request_code(&prompt)?;
        let candidate = answer.trim().to_string();
        if let Some(code) = reference.canonical_code(&candidate) {
            cache.insert(raw_name, &code);
            return Ok(Resolution::OperatorSupplied { code, rejected });
        }
        rejected.push(candidate);
    }
}
