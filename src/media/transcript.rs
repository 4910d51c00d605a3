//! Transcription contract
//!
//! Speech-to-text is an external capability; what the engine depends on
//! is its output shape: a transcript string that is exactly the
//! space-joined concatenation of word tokens, plus per-word timing and
//! character offsets into that transcript.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A transcribed word with timing and character offsets
///
/// `char_start`/`char_end` are character indices into the reconstructed
/// transcript, not byte offsets. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word token with surrounding whitespace stripped
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// First character index in the transcript (inclusive)
    pub char_start: usize,
    /// Last character index in the transcript (exclusive)
    pub char_end: usize,
}

/// A transcript with its word-level timings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcription {
    /// Space-joined concatenation of the word tokens, in emission order
    pub transcript: String,
    /// Words in emission order
    pub words: Vec<Word>,
}

impl Transcription {
    /// Assemble a transcription from timed tokens
    ///
    /// Tokens are trimmed; empty tokens are skipped; surviving tokens are
    /// joined with single spaces. Character offsets are assigned so that
    /// the transcript's `char_start..char_end` characters spell each
    /// token.
    pub fn from_timed_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: AsRef<str>,
    {
        let mut transcript = String::new();
        let mut words = Vec::new();
        let mut cursor = 0usize;

        for (token, start, end) in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            if !transcript.is_empty() {
                transcript.push(' ');
                cursor += 1;
            }
            let char_start = cursor;
            cursor += token.chars().count();
            transcript.push_str(token);
            words.push(Word {
                text: token.to_string(),
                start,
                end,
                char_start,
                char_end: cursor,
            });
        }

        Self { transcript, words }
    }
}

/// External speech-to-text capability
pub trait Transcriber {
    /// Transcribe an audio file with word-level timings
    fn transcribe(&self, audio: &Path) -> Result<Transcription>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_joins_with_single_spaces() {
        let t = Transcription::from_timed_tokens(vec![
            ("call", 0.0, 0.3),
            ("me", 0.3, 0.5),
            ("maybe", 0.5, 0.9),
        ]);
        assert_eq!(t.transcript, "call me maybe");
        assert_eq!(t.words.len(), 3);
    }

    #[test]
    fn test_char_offsets_spell_each_token() {
        let t = Transcription::from_timed_tokens(vec![
            (" call ", 0.0, 0.3),
            ("me", 0.3, 0.5),
            ("at", 0.5, 0.7),
        ]);
        let chars: Vec<char> = t.transcript.chars().collect();
        for word in &t.words {
            let spelled: String = chars[word.char_start..word.char_end].iter().collect();
            assert_eq!(spelled, word.text);
        }
    }

    #[test]
    fn test_empty_tokens_skipped() {
        let t = Transcription::from_timed_tokens(vec![
            ("one", 0.0, 0.2),
            ("  ", 0.2, 0.3),
            ("two", 0.3, 0.5),
        ]);
        assert_eq!(t.transcript, "one two");
        assert_eq!(t.words.len(), 2);
        assert_eq!(t.words[1].char_start, 4);
        assert_eq!(t.words[1].char_end, 7);
    }

    #[test]
    fn test_no_tokens() {
        let t = Transcription::from_timed_tokens(Vec::<(&str, f64, f64)>::new());
        assert!(t.transcript.is_empty());
        assert!(t.words.is_empty());
    }
}
