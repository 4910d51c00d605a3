//! Span overlap resolution
//!
//! Detectors run independently and may produce overlapping or duplicate
//! spans; the merge sweep resolves them into an ordered, non-overlapping
//! list. Sorting prefers the longer span at a given start so a more
//! specific match (a full address) wins over a shorter overlapping one.
//! The label of a merged run is the label of the span that started it;
//! later-overlapping spans extend the run but do not override the label.
//! Overlapping different-labeled spans therefore collapse into one span
//! carrying the earliest-starting span's label — an accepted lossy
//! simplification.

use crate::detect::span::Span;

/// Ordered, non-overlapping spans over one text
///
/// Invariant: for consecutive entries, `spans[i].end <= spans[i+1].start`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedSpans(Vec<Span>);

impl MergedSpans {
    /// Resolve raw detector output into a merged span list
    pub fn merge(mut spans: Vec<Span>) -> Self {
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

        let mut merged: Vec<Span> = Vec::new();
        for span in spans {
            match merged.last_mut() {
                Some(current) if span.start <= current.end => {
                    current.end = current.end.max(span.end);
                }
                _ => merged.push(span),
            }
        }
        Self(merged)
    }

    /// Merged spans in order
    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }

    /// Bypass the sweep; for exercising downstream overlap defenses
    #[cfg(test)]
    pub(crate) fn from_raw(spans: Vec<Span>) -> Self {
        Self(spans)
    }

    /// Iterate the merged spans in order
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }

    /// Number of merged spans
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no spans survived merging
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a MergedSpans {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
