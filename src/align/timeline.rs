//! Projection of recovered character spans onto word timings

use crate::align::diff::CharSpan;
use crate::media::transcript::Word;
use serde::{Deserialize, Serialize};

/// A time range in seconds, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start in seconds
    pub start: f64,
    /// End in seconds
    pub end: f64,
}

impl TimeRange {
    /// Range duration in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Map recovered character spans onto word timings
///
/// Each span takes the minimum start and maximum end time across the
/// words whose character range overlaps it; spans with no overlapping
/// words are discarded. The resulting ranges are sorted by start time
/// and any two ranges whose gap is at most `gap_merge_secs` are merged
/// into one.
pub fn spans_to_time_ranges(
    spans: &[CharSpan],
    words: &[Word],
    gap_merge_secs: f64,
) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    for &(span_start, span_end) in spans {
        let mut start = f64::INFINITY;
        let mut end = f64::NEG_INFINITY;
        let mut covered = false;
        for word in words {
            if word.char_end <= span_start || word.char_start >= span_end {
                continue;
            }
            covered = true;
            start = start.min(word.start);
            end = end.max(word.end);
        }
        if covered {
            ranges.push(TimeRange { start, end });
        }
    }

    ranges.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.end.total_cmp(&b.end)));

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end + gap_merge_secs => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}
