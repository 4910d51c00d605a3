//! ScrubClaw - Multimodal PII Redaction Engine
//!
//! ScrubClaw detects and redacts personally identifiable information in
//! free text and in derived modalities (audio transcripts, video audio
//! tracks) that are reduced to text for detection.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       ScrubClaw Engine                       │
//! │                                                              │
//! │  text ──► Span Detector ──► Span Merger ──► Redactor ──►     │
//! │            (pattern catalog,  (overlap      (mask / hash /   │
//! │             phone grammar)     resolution)   pseudo)         │
//! │                                                │             │
//! │                                     Pseudonym Store          │
//! │                                     (disk-persisted)         │
//! │                                                              │
//! │  transcript + word timings ──► Cross-Modal Aligner ──►       │
//! │                                 time ranges for audio        │
//! │                                 suppression                  │
//! └──────────────────────────────────────────────────────────────┘
//!          │                                        │
//!   [external: transcription]            [external: tone overlay,
//!                                         face blur, PDF, muxing]
//! ```
//!
//! All operations are synchronous and whole-document; the pseudonym
//! store is the only state that outlives a single call.
//!
//! ## Modules
//!
//! - [`detect`]: PII span detection and overlap resolution
//! - [`redact`]: redaction strategies and the pseudonym store
//! - [`align`]: transcript-to-audio time range alignment
//! - [`media`]: external media collaborator interfaces
//! - [`engine`]: composed detection + redaction + alignment engine
//! - [`config`]: configuration management

pub mod align;
pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod media;
pub mod redact;

pub use align::{CrossModalAligner, TimeRange};
pub use config::{PrivacyLevel, RedactionMode, ScrubClawConfig};
pub use detect::{MergedSpans, PiiLabel, Span, SpanDetector};
pub use engine::{redact_text, Engine, TranscriptRedaction};
pub use error::{Error, Result};
pub use media::{PrivacyReport, Transcriber, Transcription, Word};
pub use redact::{PseudonymStore, Redaction, ResidualRisk};
