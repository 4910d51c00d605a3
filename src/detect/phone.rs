//! Phone number detection
//!
//! A coarse regex proposes candidate windows; the `phonenumber` grammar
//! validates them. Candidates are parsed with no default region, so only
//! internationally-formatted numbers (`+` country prefix) survive.
//! Invalid candidates are dropped silently.

use crate::detect::span::{PiiLabel, Span};
use crate::error::{Error, Result};
use regex::Regex;

// `+` or `(` optional, a digit, then 5+ digit/punctuation chars ending in
// a digit. Wide enough to cover grouped national and international forms.
const CANDIDATE: &str = r"[+(]?\d[\d)\-. \t\r\n]{5,}\d";

/// Candidate-window phone detector narrowed by grammar validation
pub struct PhoneDetector {
    candidate: Regex,
}

impl PhoneDetector {
    /// Compile the candidate pattern
    pub fn compile() -> Result<Self> {
        let candidate = Regex::new(CANDIDATE)
            .map_err(|e| Error::Pattern(format!("Invalid pattern for 'PHONE': {}", e)))?;
        Ok(Self { candidate })
    }

    /// Detect validated phone spans in `text`
    pub fn detect(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for mat in self.candidate.find_iter(text) {
            let window = mat.as_str();
            if let Some((core_start, core_end)) = validated_core(window) {
                spans.push(Span::new(
                    mat.start() + core_start,
                    mat.start() + core_end,
                    PiiLabel::Phone,
                ));
            }
        }
        spans
    }
}

/// Trim the candidate window to its `+`/digit-bounded core and validate it
/// against the phone grammar. Returns the exact byte offsets of the core
/// within the window, or `None` when the grammar rejects it.
fn validated_core(window: &str) -> Option<(usize, usize)> {
    let start = window
        .char_indices()
        .find(|(_, c)| *c == '+' || c.is_ascii_digit())
        .map(|(i, _)| i)?;
    let end = window
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i + 1)?;
    if start >= end {
        return None;
    }
    let core = &window[start..end];
    match phonenumber::parse(None, core) {
        Ok(number) if phonenumber::is_valid(&number) => Some((start, end)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> PhoneDetector {
        PhoneDetector::compile().unwrap()
    }

    #[test]
    fn test_international_number_detected() {
        let text = "call +1 650-253-0000 today";
        let spans = detector().detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, PiiLabel::Phone);
        assert_eq!(&text[spans[0].start..spans[0].end], "+1 650-253-0000");
    }

    #[test]
    fn test_national_number_without_prefix_dropped() {
        // No default region: a bare national number fails grammar parsing.
        let spans = detector().detect("call 650-253-0000 today");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_digit_noise_dropped() {
        let spans = detector().detect("order id 123456789012345678");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_core_offsets_exclude_trailing_punctuation() {
        let text = "(+44 20 7946 0958).";
        let spans = detector().detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "+44 20 7946 0958");
    }

    #[test]
    fn test_empty_and_plain_text() {
        let det = detector();
        assert!(det.detect("").is_empty());
        assert!(det.detect("no numbers here").is_empty());
    }
}
