//! ScrubClaw configuration management

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main ScrubClaw configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrubClawConfig {
    /// Redaction configuration
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cross-modal alignment configuration
    #[serde(default)]
    pub alignment: AlignmentConfig,
}

/// Redaction strategy applied to detected spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RedactionMode {
    /// Replace with a run of `*` characters
    Mask,
    /// Replace with a truncated SHA-256 digest of the value
    Hash,
    /// Replace with a stable alias from the pseudonym store
    Pseudo,
}

impl std::fmt::Display for RedactionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mask => write!(f, "mask"),
            Self::Hash => write!(f, "hash"),
            Self::Pseudo => write!(f, "pseudo"),
        }
    }
}

/// Privacy level controlling which detectors are enabled
///
/// `light` runs only the EMAIL/IP/SSN/DOB detectors; `standard` and
/// `strict` additionally enable ADDRESS, PAN and AADHAAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    /// Core identifiers only
    Light,
    /// Core identifiers plus addresses and national IDs
    Standard,
    /// Everything `standard` enables, reserved for stricter future rules
    Strict,
}

impl PrivacyLevel {
    /// Whether the extended detectors (ADDRESS, PAN, AADHAAR) run
    pub fn extended_patterns(&self) -> bool {
        matches!(self, Self::Standard | Self::Strict)
    }
}

impl std::fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Standard => write!(f, "standard"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Redaction defaults used when a call does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Default redaction mode
    pub mode: RedactionMode,

    /// Default privacy level
    pub level: PrivacyLevel,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            mode: RedactionMode::Mask,
            level: PrivacyLevel::Standard,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted pseudonym map
    pub pseudonym_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pseudonym_path: default_data_dir().join("pseudonym_map.json"),
        }
    }
}

/// Cross-modal alignment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Maximum gap in seconds between two time ranges that still merges them
    pub gap_merge_secs: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            gap_merge_secs: 0.05,
        }
    }
}

/// Default data directory (~/.scrubclaw)
fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".scrubclaw")
}
