//! External media collaborator interfaces
//!
//! Face blurring, PDF extraction, tone overlay and muxing are external
//! capabilities invoked by the surrounding application; the engine only
//! defines their contracts and the report surface shared with them.

pub mod transcript;

pub use transcript::{Transcriber, Transcription, Word};

use crate::align::TimeRange;
use crate::config::{PrivacyLevel, RedactionMode};
use crate::detect::span::PiiLabel;
use crate::error::Result;
use crate::redact::{Redaction, ResidualRisk};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Result of blurring faces in one image
#[derive(Debug, Clone)]
pub struct BlurredImage {
    /// Re-encoded image bytes
    pub image: Vec<u8>,
    /// Number of faces blurred
    pub faces: usize,
}

/// External face-blurring capability
pub trait FaceBlurrer {
    /// Blur faces in an encoded image; `kernel` is the odd blur kernel size
    fn blur_faces(&self, image: &[u8], kernel: u32) -> Result<BlurredImage>;
}

/// An embedded image extracted from a PDF
#[derive(Debug, Clone)]
pub struct PdfImage {
    /// Name of the embedded object
    pub name: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
    /// 1-based page number the image came from
    pub page: usize,
}

/// External PDF extraction capability
pub trait PdfExtractor {
    /// Extract the full document text
    fn extract_text(&self, pdf: &[u8]) -> Result<String>;

    /// Extract embedded images with their page numbers
    fn extract_images(&self, pdf: &[u8]) -> Result<Vec<PdfImage>>;
}

/// External audio tone-overlay (or muting) capability
pub trait ToneOverlay {
    /// Overlay a tone across the given time ranges, returning the output
    /// file path
    fn overlay(&self, audio: &Path, ranges: &[TimeRange], tone_hz: u32) -> Result<PathBuf>;
}

/// External video/audio muxing capability
pub trait AudioMuxer {
    /// Replace the audio track of `video` with `audio`, returning the
    /// output file path
    fn mux(&self, video: &Path, audio: &Path) -> Result<PathBuf>;
}

/// Report emitted alongside redacted output
#[derive(Debug, Clone, Serialize)]
pub struct PrivacyReport {
    /// Redaction mode the pass ran with
    pub mode: RedactionMode,
    /// Privacy level the pass ran with
    pub level: PrivacyLevel,
    /// Per-label redaction counts
    pub counts: BTreeMap<PiiLabel, u32>,
    /// Residual-risk classification
    pub residual_risk: ResidualRisk,
    /// Images found, when media was processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_found: Option<usize>,
    /// Images successfully redacted, when media was processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_redacted: Option<usize>,
}

impl PrivacyReport {
    /// Report for a plain text redaction
    pub fn for_text(redaction: &Redaction, mode: RedactionMode, level: PrivacyLevel) -> Self {
        Self {
            mode,
            level,
            counts: redaction.counts.clone(),
            residual_risk: redaction.residual_risk,
            images_found: None,
            images_redacted: None,
        }
    }

    /// Attach image tallies for document/media flows
    pub fn with_image_tallies(mut self, found: usize, redacted: usize) -> Self {
        self.images_found = Some(found);
        self.images_redacted = Some(redacted);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_counts_by_label_name() {
        let mut counts = BTreeMap::new();
        counts.insert(PiiLabel::Email, 1);
        let redaction = Redaction {
            text: "x".into(),
            counts,
            residual_risk: ResidualRisk::Medium,
        };
        let report =
            PrivacyReport::for_text(&redaction, RedactionMode::Mask, PrivacyLevel::Standard);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["counts"]["EMAIL"], 1);
        assert_eq!(json["residual_risk"], "medium");
        assert_eq!(json["mode"], "mask");
        assert!(json.get("images_found").is_none());
    }

    #[test]
    fn test_report_with_image_tallies() {
        let redaction = Redaction {
            text: String::new(),
            counts: BTreeMap::new(),
            residual_risk: ResidualRisk::Low,
        };
        let report =
            PrivacyReport::for_text(&redaction, RedactionMode::Hash, PrivacyLevel::Light)
                .with_image_tallies(3, 2);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["images_found"], 3);
        assert_eq!(json["images_redacted"], 2);
    }
}
