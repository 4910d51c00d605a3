//! PII span detection
//!
//! A fixed catalog of regex and labeled-field detectors plus a
//! grammar-validated phone detector produce raw spans; the merge sweep
//! resolves overlaps into an ordered, non-overlapping list.

pub mod catalog;
pub mod detector;
pub mod merge;
pub mod phone;
pub mod span;

pub use catalog::PatternCatalog;
pub use detector::SpanDetector;
pub use merge::MergedSpans;
pub use phone::PhoneDetector;
pub use span::{PiiLabel, Span};
