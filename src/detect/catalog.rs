//! Compiled PII pattern catalog
//!
//! A fixed, immutable table of compiled matchers built once at engine
//! construction and read-only thereafter. Three detector families live
//! here: plain regex detectors (with a post-match digit filter standing in
//! for lookahead exclusions the `regex` crate cannot express), the
//! credit-card detector with its broad separator class, and the
//! labeled-field table including the free-text `Address:` trimming rule.

use crate::config::PrivacyLevel;
use crate::detect::span::{PiiLabel, Span};
use crate::error::{Error, Result};
use regex::Regex;

const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const IPV4: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";
// Candidate only: reserved ranges (000/666/9xx area, 00 group, 0000 serial)
// are rejected by `ssn_in_valid_range` after the match.
const SSN: &str = r"\b\d{3}[ \t\r\n-]?\d{2}[ \t\r\n-]?\d{4}\b";
const DOB_ISO: &str = r"\b(?:19|20)\d{2}[-/](?:0[1-9]|1[0-2])[-/](?:0[1-9]|[12]\d|3[01])\b";
const DOB_US: &str = r"\b(?:0[1-9]|1[0-2])[-/](?:0[1-9]|[12]\d|3[01])[-/](?:19|20)\d{2}\b";
const ADDRESS: &str = r"(?i)\b\d{1,5}[ \t\r\n]+[A-Za-z]{2,}(?:[,.]?[ \t\r\n]+[A-Za-z]{2,}){0,4}[ \t\r\n]+(?:Street|St|Avenue|Ave|Road|Rd|Lane|Ln|Boulevard|Blvd|Drive|Dr)\b";
const PAN: &str = r"\b[A-Z]{5}\d{4}[A-Z]\b";
const AADHAAR: &str = r"\b\d{4}[ \t\r\n]?\d{4}[ \t\r\n]?\d{4}\b";

// 13-19 digits separated by at most one separator each: whitespace, NBSP,
// zero-width joiners, word joiner, minus sign, Unicode dashes, or an
// ASCII hyphen. Anchored on digits at both ends so grouped card numbers
// match as a single span with separators included.
const CREDIT_CARD: &str =
    r"\b\d(?:[\s\x{00A0}\x{200B}-\x{200D}\x{2060}\x{2212}\x{2010}-\x{2015}-]?\d){12,18}\b";

// Field name followed by `:` or `-` and a bounded value, captured in group 1.
const LABEL_FIELDS: &[(PiiLabel, &str)] = &[
    (
        PiiLabel::Passport,
        r"(?i)passport(?:\s*(?:no|number))?\s*[:\-]\s*([A-Z0-9]{6,12})",
    ),
    (
        PiiLabel::EmployeeId,
        r"(?i)employee\s*id\s*[:\-]\s*([A-Za-z0-9\-]{4,20})",
    ),
    (
        PiiLabel::Mrn,
        r"(?i)(?:medical\s*record\s*number|MRN)\s*[:\-]\s*([A-Za-z0-9\-]{4,20})",
    ),
    (
        PiiLabel::InsuranceId,
        r"(?i)insurance\s*policy\s*[:\-]\s*([A-Za-z0-9\-]{4,25})",
    ),
    (
        PiiLabel::DriverLicense,
        r"(?i)driver[’']?s?\s*license\s*[:\-]\s*([A-Za-z0-9\-]{4,20})",
    ),
    (
        PiiLabel::BankAcct,
        r"(?i)account\s*number\s*[:\-]\s*(\d{6,20})",
    ),
    (PiiLabel::Routing, r"(?i)routing\s*number\s*[:\-]\s*(\d{9})"),
    (
        PiiLabel::Ktn,
        r"(?i)(?:TSA\s*PreCheck|KTN)\s*[:\-]\s*([A-Za-z0-9\-]{6,20})",
    ),
    (
        PiiLabel::BookingRef,
        r"(?i)flight\s*booking\s*ref(?:erence)?\s*[:\-]\s*([A-Z0-9]{5,8})",
    ),
    (
        PiiLabel::Ffn,
        r"(?i)frequent\s*flyer\s*(?:no|number)?\s*[:\-]\s*([A-Z0-9]{6,20})",
    ),
];

// Free text after `Address:`, trimmed and re-located by `address_field_spans`.
const ADDRESS_FIELD: &str = r"(?i)address\s*[:\-]\*?\s*([\s\S]{5,140})";

struct CompiledPattern {
    label: PiiLabel,
    regex: Regex,
    /// Post-match filter; a `false` verdict drops the candidate silently
    validate: Option<fn(&str) -> bool>,
}

/// Immutable catalog of compiled PII matchers
pub struct PatternCatalog {
    core: Vec<CompiledPattern>,
    extended: Vec<CompiledPattern>,
    credit_card: Regex,
    labeled: Vec<(PiiLabel, Regex)>,
    address_field: Regex,
}

impl PatternCatalog {
    /// Compile the full catalog
    pub fn compile() -> Result<Self> {
        let core = vec![
            pattern(PiiLabel::Email, EMAIL, None)?,
            pattern(PiiLabel::Ip, IPV4, None)?,
            pattern(PiiLabel::Ssn, SSN, Some(ssn_in_valid_range as fn(&str) -> bool))?,
            pattern(PiiLabel::Dob, DOB_ISO, None)?,
            pattern(PiiLabel::Dob, DOB_US, None)?,
        ];
        let extended = vec![
            pattern(PiiLabel::Address, ADDRESS, None)?,
            pattern(PiiLabel::Pan, PAN, None)?,
            pattern(PiiLabel::Aadhaar, AADHAAR, None)?,
        ];
        let labeled = LABEL_FIELDS
            .iter()
            .map(|(label, source)| Ok((*label, compile(label.as_str(), source)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            core,
            extended,
            credit_card: compile("CREDIT_CARD", CREDIT_CARD)?,
            labeled,
            address_field: compile("ADDRESS", ADDRESS_FIELD)?,
        })
    }

    /// Run the plain regex detectors for the given privacy level
    pub fn regex_spans(&self, text: &str, level: PrivacyLevel) -> Vec<Span> {
        let mut spans = Vec::new();
        let extended = level.extended_patterns();
        let patterns = self
            .core
            .iter()
            .chain(self.extended.iter().filter(|_| extended));
        for pat in patterns {
            for mat in pat.regex.find_iter(text) {
                if let Some(validate) = pat.validate {
                    if !validate(mat.as_str()) {
                        continue;
                    }
                }
                spans.push(Span::new(mat.start(), mat.end(), pat.label));
            }
        }
        spans
    }

    /// Run the credit-card detector
    pub fn credit_card_spans(&self, text: &str) -> Vec<Span> {
        self.credit_card
            .find_iter(text)
            .map(|mat| Span::new(mat.start(), mat.end(), PiiLabel::CreditCard))
            .collect()
    }

    /// Run the labeled-field detectors, including the `Address:` field
    pub fn labeled_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for (label, regex) in &self.labeled {
            for caps in regex.captures_iter(text) {
                if let Some(value) = caps.get(1) {
                    spans.push(Span::new(value.start(), value.end(), *label));
                }
            }
        }
        spans.extend(self.address_field_spans(text));
        spans
    }

    /// The `Address:` field captures free text; trim it to the first
    /// blank-line boundary, drop trailing lines that are themselves a new
    /// field label (end with `:`), join the rest with single spaces, and
    /// re-locate the trimmed value inside the capture window so the span
    /// is exact even when the raw capture carried trailing content.
    fn address_field_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for caps in self.address_field.captures_iter(text) {
            let mat = match caps.get(1) {
                Some(mat) => mat,
                None => continue,
            };
            let raw = mat.as_str();

            let mut cutoff = raw.len();
            for sep in ["\n\n", "\r\n\r\n"] {
                if let Some(idx) = raw.find(sep) {
                    cutoff = cutoff.min(idx);
                }
            }

            let mut kept = Vec::new();
            for line in raw[..cutoff].lines() {
                let line = line.trim();
                if line.ends_with(':') {
                    break;
                }
                if !line.is_empty() {
                    kept.push(line);
                }
            }
            let value = kept.join(" ");
            if value.is_empty() {
                continue;
            }

            if let Some(inner) = raw.find(&value) {
                let start = mat.start() + inner;
                spans.push(Span::new(start, start + value.len(), PiiLabel::Address));
            }
        }
        spans
    }
}

fn pattern(
    label: PiiLabel,
    source: &str,
    validate: Option<fn(&str) -> bool>,
) -> Result<CompiledPattern> {
    Ok(CompiledPattern {
        label,
        regex: compile(label.as_str(), source)?,
        validate,
    })
}

fn compile(name: &str, source: &str) -> Result<Regex> {
    Regex::new(source)
        .map_err(|e| Error::Pattern(format!("Invalid pattern for '{}': {}", name, e)))
}

/// Reject SSN candidates in reserved ranges: area 000/666/9xx, group 00,
/// serial 0000. Same accept/reject set as the usual lookahead formulation.
fn ssn_in_valid_range(candidate: &str) -> bool {
    let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 9 {
        return false;
    }
    let (area, rest) = digits.split_at(3);
    let (group, serial) = rest.split_at(2);
    area != "000" && area != "666" && !area.starts_with('9') && group != "00" && serial != "0000"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PatternCatalog {
        PatternCatalog::compile().unwrap()
    }

    fn labels(spans: &[Span]) -> Vec<PiiLabel> {
        spans.iter().map(|s| s.label).collect()
    }

    #[test]
    fn test_email_detected() {
        let spans = catalog().regex_spans("write to a@b.com today", PrivacyLevel::Light);
        assert_eq!(labels(&spans), vec![PiiLabel::Email]);
        assert_eq!(&"write to a@b.com today"[spans[0].start..spans[0].end], "a@b.com");
    }

    #[test]
    fn test_ipv4_detected() {
        let spans = catalog().regex_spans("host 192.168.0.1 down", PrivacyLevel::Light);
        assert_eq!(labels(&spans), vec![PiiLabel::Ip]);
    }

    #[test]
    fn test_ssn_detected_with_separators() {
        let spans = catalog().regex_spans("SSN 123-45-6789", PrivacyLevel::Light);
        assert_eq!(labels(&spans), vec![PiiLabel::Ssn]);
    }

    #[test]
    fn test_ssn_reserved_ranges_rejected() {
        let cat = catalog();
        for text in [
            "000-12-3456",
            "666-12-3456",
            "900-12-3456",
            "123-00-3456",
            "123-45-0000",
        ] {
            let spans = cat.regex_spans(text, PrivacyLevel::Light);
            assert!(spans.is_empty(), "expected no span for {}", text);
        }
    }

    #[test]
    fn test_dob_both_formats() {
        let cat = catalog();
        let iso = cat.regex_spans("born 1990-12-31 here", PrivacyLevel::Light);
        assert_eq!(labels(&iso), vec![PiiLabel::Dob]);
        let us = cat.regex_spans("born 12/31/1990 here", PrivacyLevel::Light);
        assert_eq!(labels(&us), vec![PiiLabel::Dob]);
    }

    #[test]
    fn test_street_address_requires_extended_level() {
        let cat = catalog();
        let text = "lives at 221 Baker Street now";
        assert!(cat.regex_spans(text, PrivacyLevel::Light).is_empty());
        let spans = cat.regex_spans(text, PrivacyLevel::Standard);
        assert_eq!(labels(&spans), vec![PiiLabel::Address]);
        assert_eq!(&text[spans[0].start..spans[0].end], "221 Baker Street");
    }

    #[test]
    fn test_pan_detected() {
        let spans = catalog().regex_spans("PAN ABCDE1234F on file", PrivacyLevel::Strict);
        assert_eq!(labels(&spans), vec![PiiLabel::Pan]);
    }

    #[test]
    fn test_aadhaar_grouped() {
        let spans = catalog().regex_spans("aadhaar 1234 5678 9012 ok", PrivacyLevel::Standard);
        assert!(spans.iter().any(|s| s.label == PiiLabel::Aadhaar));
    }

    #[test]
    fn test_credit_card_single_span_with_spaces() {
        let text = "card 4111 1111 1111 1111 thanks";
        let spans = catalog().credit_card_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "4111 1111 1111 1111");
    }

    #[test]
    fn test_credit_card_unicode_separators() {
        let text = "4111\u{2013}1111\u{2013}1111\u{2013}1111";
        let spans = catalog().credit_card_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, text.len());
    }

    #[test]
    fn test_credit_card_too_short_ignored() {
        assert!(catalog().credit_card_spans("order 123456789012").is_empty());
    }

    #[test]
    fn test_labeled_passport() {
        let text = "Passport No: X1234567 issued 2019";
        let spans = catalog().labeled_spans(text);
        assert_eq!(labels(&spans), vec![PiiLabel::Passport]);
        assert_eq!(&text[spans[0].start..spans[0].end], "X1234567");
    }

    #[test]
    fn test_labeled_routing_exact_nine_digits() {
        let cat = catalog();
        let spans = cat.labeled_spans("routing number: 021000021");
        assert_eq!(labels(&spans), vec![PiiLabel::Routing]);
        assert!(cat.labeled_spans("routing number: 02100002").is_empty());
    }

    #[test]
    fn test_labeled_bank_account_digits_only() {
        let spans = catalog().labeled_spans("Account Number: 123456789012");
        assert_eq!(labels(&spans), vec![PiiLabel::BankAcct]);
    }

    #[test]
    fn test_address_field_stops_at_next_label_line() {
        let text = "Address: 42 Elm Street\nPhone:\n555-0100";
        let spans = catalog().labeled_spans(text);
        let addr: Vec<_> = spans
            .iter()
            .filter(|s| s.label == PiiLabel::Address)
            .collect();
        assert_eq!(addr.len(), 1);
        assert_eq!(&text[addr[0].start..addr[0].end], "42 Elm Street");
    }

    #[test]
    fn test_address_field_multiline_value_not_relocatable() {
        // Joined lines differ from the raw capture, so the first-occurrence
        // search fails and no span is produced.
        let text = "Address: 42 Elm Street\nSpringfield\n\nmore prose";
        let spans = catalog().labeled_spans(text);
        assert!(spans.iter().all(|s| s.label != PiiLabel::Address));
    }

    #[test]
    fn test_address_field_single_line() {
        let text = "Address: 9 Rose Lane, Dublin";
        let spans = catalog().labeled_spans(text);
        let addr: Vec<_> = spans
            .iter()
            .filter(|s| s.label == PiiLabel::Address)
            .collect();
        assert_eq!(addr.len(), 1);
        assert_eq!(&text[addr[0].start..addr[0].end], "9 Rose Lane, Dublin");
    }

    #[test]
    fn test_no_detector_panics_on_degenerate_input() {
        let cat = catalog();
        for text in ["", "*", "****** ******", "no pii here at all"] {
            let _ = cat.regex_spans(text, PrivacyLevel::Strict);
            let _ = cat.credit_card_spans(text);
            let _ = cat.labeled_spans(text);
        }
    }
}
