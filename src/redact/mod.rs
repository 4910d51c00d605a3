//! Redaction strategies and the pseudonym store
//!
//! Three interchangeable strategies: masking (fixed-character runs),
//! hashing (truncated SHA-256), and consistent pseudonymization backed by
//! a disk-persisted identity map.

pub mod pseudonym;
pub mod redactor;

pub use pseudonym::PseudonymStore;
pub use redactor::{mask, short_hash, Redaction, Redactor, ResidualRisk, MASK_CHAR};
