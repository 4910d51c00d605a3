//! Redaction engine
//!
//! Composes the span detector, the redactor with its pseudonym store,
//! and the cross-modal aligner behind one explicitly constructed object.
//! Built once per process; all state that outlives a single call lives
//! in the injected pseudonym store.

use crate::align::{CrossModalAligner, TimeRange};
use crate::config::{PrivacyLevel, RedactionMode, ScrubClawConfig};
use crate::detect::SpanDetector;
use crate::error::Result;
use crate::media::transcript::Transcription;
use crate::redact::{PseudonymStore, Redaction, Redactor};

/// The PII detection, redaction and alignment engine
pub struct Engine {
    detector: SpanDetector,
    pseudonyms: PseudonymStore,
    aligner: CrossModalAligner,
    config: ScrubClawConfig,
}

/// A transcript redaction together with its audio suppression ranges
#[derive(Debug, Clone)]
pub struct TranscriptRedaction {
    /// Redaction of the transcript text
    pub redaction: Redaction,
    /// Sorted, gap-merged time ranges for the tone-overlay capability
    pub time_ranges: Vec<TimeRange>,
}

impl Engine {
    /// Build an engine: compiles the pattern catalog and loads the
    /// pseudonym store from the configured path
    pub fn new(config: ScrubClawConfig) -> Result<Self> {
        let detector = SpanDetector::new()?;
        let pseudonyms = PseudonymStore::open(config.storage.pseudonym_path.clone());
        let aligner = CrossModalAligner::new(config.alignment.gap_merge_secs);
        tracing::info!(
            store = %config.storage.pseudonym_path.display(),
            "engine initialized"
        );
        Ok(Self {
            detector,
            pseudonyms,
            aligner,
            config,
        })
    }

    /// Build an engine with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(ScrubClawConfig::default())
    }

    /// Redact text with the configured mode and level
    pub fn redact(&self, text: &str) -> Result<Redaction> {
        self.redact_with(
            text,
            self.config.redaction.mode,
            self.config.redaction.level,
        )
    }

    /// Redact text with an explicit mode and level
    pub fn redact_with(
        &self,
        text: &str,
        mode: RedactionMode,
        level: PrivacyLevel,
    ) -> Result<Redaction> {
        let spans = self.detector.detect_merged(text, level);
        let redaction = Redactor::new(mode, &self.pseudonyms).redact(text, &spans)?;
        tracing::debug!(
            total = redaction.total(),
            risk = %redaction.residual_risk,
            "redaction complete"
        );
        Ok(redaction)
    }

    /// Redact a transcript and align the result with its word timings
    ///
    /// The alignment is exact for `mask` mode only; see
    /// [`crate::align::recover_masked_spans`].
    pub fn redact_transcript(
        &self,
        transcription: &Transcription,
        mode: RedactionMode,
        level: PrivacyLevel,
    ) -> Result<TranscriptRedaction> {
        let redaction = self.redact_with(&transcription.transcript, mode, level)?;
        let time_ranges = self.aligner.align(
            &transcription.transcript,
            &redaction.text,
            &transcription.words,
        );
        Ok(TranscriptRedaction {
            redaction,
            time_ranges,
        })
    }
}

/// Redact text through a default-configured engine
pub fn redact_text(text: &str, mode: RedactionMode, level: PrivacyLevel) -> Result<Redaction> {
    Engine::with_defaults()?.redact_with(text, mode, level)
}
