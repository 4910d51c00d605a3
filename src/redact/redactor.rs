//! Span redaction strategies
//!
//! Walks a merged span list over the original text, replacing each
//! spanned substring according to the configured mode and accumulating
//! per-label counts plus a coarse residual-risk classification.

use crate::config::RedactionMode;
use crate::detect::merge::MergedSpans;
use crate::detect::span::PiiLabel;
use crate::error::Result;
use crate::redact::pseudonym::PseudonymStore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Character used by the mask strategy
pub const MASK_CHAR: char = '*';

const MASK_MIN: usize = 6;
const MASK_MAX: usize = 32;
const HASH_LEN: usize = 12;

/// Coarse classification of how much PII-bearing content remains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidualRisk {
    /// No redactions were necessary
    Low,
    /// 1-4 redactions
    Medium,
    /// 5 or more redactions
    High,
}

impl ResidualRisk {
    /// Classify by total redaction count
    pub fn from_total(total: u32) -> Self {
        match total {
            0 => Self::Low,
            1..=4 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl std::fmt::Display for ResidualRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Result of one redaction pass
#[derive(Debug, Clone, Serialize)]
pub struct Redaction {
    /// Redacted output text
    pub text: String,
    /// Per-label redaction counts
    pub counts: BTreeMap<PiiLabel, u32>,
    /// Residual-risk classification derived from the total count
    pub residual_risk: ResidualRisk,
}

impl Redaction {
    /// Total number of redactions across labels
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Applies one redaction strategy to a text and its merged spans
///
/// The pseudonym store is injected by reference; only the `pseudo`
/// strategy touches it.
pub struct Redactor<'a> {
    mode: RedactionMode,
    pseudonyms: &'a PseudonymStore,
}

impl<'a> Redactor<'a> {
    /// Create a redactor for the given mode
    pub fn new(mode: RedactionMode, pseudonyms: &'a PseudonymStore) -> Self {
        Self { mode, pseudonyms }
    }

    /// Redact `text` according to the merged span list
    ///
    /// Spans starting before the current cursor are skipped silently
    /// (defense against residual overlap). In `pseudo` mode every
    /// first-seen value persists the whole map synchronously, so the
    /// call is O(map size) per new value.
    pub fn redact(&self, text: &str, spans: &MergedSpans) -> Result<Redaction> {
        let mut out = String::with_capacity(text.len());
        let mut counts: BTreeMap<PiiLabel, u32> = BTreeMap::new();
        let mut cursor = 0;

        for span in spans {
            if span.start < cursor {
                continue;
            }
            out.push_str(&text[cursor..span.start]);
            let chunk = &text[span.start..span.end];
            let replacement = match self.mode {
                RedactionMode::Mask => mask(chunk),
                RedactionMode::Hash => short_hash(chunk),
                RedactionMode::Pseudo => self.pseudonyms.alias(span.label, chunk)?,
            };
            out.push_str(&replacement);
            *counts.entry(span.label).or_insert(0) += 1;
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);

        let total = counts.values().sum();
        Ok(Redaction {
            text: out,
            counts,
            residual_risk: ResidualRisk::from_total(total),
        })
    }
}

/// Mask replacement: a `*` run clamped to 6..=32 characters
pub fn mask(value: &str) -> String {
    let len = value.chars().count().clamp(MASK_MIN, MASK_MAX);
    MASK_CHAR.to_string().repeat(len)
}

/// Hash replacement: first 12 hex characters of SHA-256 over the exact
/// substring. Deterministic and unsalted so repeated values hash
/// identically across runs.
pub fn short_hash(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(digest)[..HASH_LEN].to_string()
}
