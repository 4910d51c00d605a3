//! Span detection over input text

use crate::config::PrivacyLevel;
use crate::detect::catalog::PatternCatalog;
use crate::detect::merge::MergedSpans;
use crate::detect::phone::PhoneDetector;
use crate::detect::span::Span;
use crate::error::Result;

/// Runs the pattern catalog and the phone grammar over input text
///
/// Compiled once at engine construction; read-only thereafter.
pub struct SpanDetector {
    catalog: PatternCatalog,
    phone: PhoneDetector,
}

impl SpanDetector {
    /// Compile all detectors
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: PatternCatalog::compile()?,
            phone: PhoneDetector::compile()?,
        })
    }

    /// Produce raw spans in detector-declaration order
    ///
    /// The output may contain overlaps and duplicates; callers resolve
    /// them with [`MergedSpans::merge`].
    pub fn detect(&self, text: &str, level: PrivacyLevel) -> Vec<Span> {
        let mut spans = self.catalog.regex_spans(text, level);
        spans.extend(self.phone.detect(text));
        spans.extend(self.catalog.credit_card_spans(text));
        spans.extend(self.catalog.labeled_spans(text));
        tracing::debug!(raw = spans.len(), %level, "span detection complete");
        spans
    }

    /// Detect and merge in one step
    pub fn detect_merged(&self, text: &str, level: PrivacyLevel) -> MergedSpans {
        MergedSpans::merge(self.detect(text, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::span::PiiLabel;

    fn detector() -> SpanDetector {
        SpanDetector::new().unwrap()
    }

    #[test]
    fn test_mixed_text_detects_all_families() {
        let text = "mail a@b.com, SSN 123-45-6789, card 4111 1111 1111 1111, \
                    call +1 650-253-0000, Passport: X1234567";
        let spans = detector().detect(text, PrivacyLevel::Standard);
        let has = |label: PiiLabel| spans.iter().any(|s| s.label == label);
        assert!(has(PiiLabel::Email));
        assert!(has(PiiLabel::Ssn));
        assert!(has(PiiLabel::CreditCard));
        assert!(has(PiiLabel::Phone));
        assert!(has(PiiLabel::Passport));
    }

    #[test]
    fn test_credit_card_survives_merge_as_single_span() {
        let text = "4111 1111 1111 1111";
        let merged = detector().detect_merged(text, PrivacyLevel::Standard);
        assert_eq!(merged.len(), 1);
        let span = merged.as_slice()[0];
        assert_eq!(span.label, PiiLabel::CreditCard);
        assert_eq!((span.start, span.end), (0, 19));
    }

    #[test]
    fn test_empty_text_yields_no_spans() {
        let merged = detector().detect_merged("", PrivacyLevel::Strict);
        assert!(merged.is_empty());
    }
}
