//! PII labels and detected spans

use serde::{Deserialize, Serialize};

/// PII category assigned to a detected span
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiLabel {
    Email,
    Ip,
    Ssn,
    Dob,
    Address,
    Pan,
    Aadhaar,
    CreditCard,
    Phone,
    Passport,
    EmployeeId,
    Mrn,
    InsuranceId,
    DriverLicense,
    BankAcct,
    Routing,
    Ktn,
    BookingRef,
    Ffn,
}

impl PiiLabel {
    /// Canonical SCREAMING_SNAKE_CASE name, as used in counts and store keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Ip => "IP",
            Self::Ssn => "SSN",
            Self::Dob => "DOB",
            Self::Address => "ADDRESS",
            Self::Pan => "PAN",
            Self::Aadhaar => "AADHAAR",
            Self::CreditCard => "CREDIT_CARD",
            Self::Phone => "PHONE",
            Self::Passport => "PASSPORT",
            Self::EmployeeId => "EMPLOYEE_ID",
            Self::Mrn => "MRN",
            Self::InsuranceId => "INSURANCE_ID",
            Self::DriverLicense => "DRIVER_LICENSE",
            Self::BankAcct => "BANK_ACCT",
            Self::Routing => "ROUTING",
            Self::Ktn => "KTN",
            Self::BookingRef => "BOOKING_REF",
            Self::Ffn => "FFN",
        }
    }

    /// Alias prefix used by the pseudonym store: each underscore segment
    /// of the canonical name title-cased (`CREDIT_CARD` -> `Credit_Card`)
    pub fn alias_prefix(&self) -> String {
        self.as_str()
            .split('_')
            .map(|seg| {
                let mut chars = seg.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl std::fmt::Display for PiiLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detected PII span: half-open byte offsets into the original text
///
/// Offsets come from `regex` matches and always fall on UTF-8 boundaries.
/// Spans are ephemeral: created per detection call, never mutated,
/// discarded after redaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// PII category
    pub label: PiiLabel,
}

impl Span {
    /// Create a span; `start` must be strictly less than `end`
    pub fn new(start: usize, end: usize, label: PiiLabel) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self { start, end, label }
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this span overlaps another
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names() {
        assert_eq!(PiiLabel::Email.as_str(), "EMAIL");
        assert_eq!(PiiLabel::CreditCard.as_str(), "CREDIT_CARD");
        assert_eq!(PiiLabel::DriverLicense.as_str(), "DRIVER_LICENSE");
    }

    #[test]
    fn test_alias_prefix() {
        assert_eq!(PiiLabel::Email.alias_prefix(), "Email");
        assert_eq!(PiiLabel::CreditCard.alias_prefix(), "Credit_Card");
        assert_eq!(PiiLabel::EmployeeId.alias_prefix(), "Employee_Id");
        assert_eq!(PiiLabel::Ffn.alias_prefix(), "Ffn");
    }

    #[test]
    fn test_label_serializes_to_canonical_name() {
        let json = serde_json::to_string(&PiiLabel::BankAcct).unwrap();
        assert_eq!(json, "\"BANK_ACCT\"");
    }

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 5, PiiLabel::Email);
        let b = Span::new(4, 8, PiiLabel::Phone);
        let c = Span::new(5, 8, PiiLabel::Phone);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
