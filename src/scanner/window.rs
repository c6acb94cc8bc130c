use anyhow::Result;

use crate::subtitle_processor::SubtitleEntry;

use super::fuzzy;

// @module: Window scoring and track traversal

/// Threshold-gated fuzzy scorer for one context window
///
/// Brute-force all-pairs comparison between the normalized terms and the
/// window's tokens, O(terms x tokens) per window. Window token counts are
/// one or two subtitle lines, so nothing smarter is needed.
#[derive(Debug, Clone, Copy)]
pub struct WindowScorer {
    threshold: u8,
}

impl WindowScorer {
    /// Create a scorer with the given threshold (0-100)
    pub fn new(threshold: u8) -> Self {
        WindowScorer { threshold }
    }

    /// Score a window against a term set
    ///
    /// Returns the maximum (term, token) ratio when it is strictly above
    /// the threshold, else 0. Zero is the "no match" sentinel: every
    /// qualifying score is above the threshold, so it can never collide
    /// with a real result.
    pub fn score(&self, window_text: &str, terms: &[String]) -> u8 {
        let lowered = window_text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let mut max_score = 0u8;
        for term in terms {
            for token in &tokens {
                let score = fuzzy::ratio(term, token);
                if score > max_score {
                    max_score = score;
                }
            }
        }

        if max_score > self.threshold { max_score } else { 0 }
    }
}

/// One context window that cleared the threshold
#[derive(Debug, Clone, PartialEq)]
pub struct WindowMatch {
    /// Concatenated text of the window's entries
    pub context: String,

    /// Start of the first entry in the window
    pub start_time_ms: u64,

    /// End of the last entry in the window
    pub end_time_ms: u64,

    /// Similarity score of the best (term, token) pair
    pub trust: u8,
}

/// Cursor-driven traversal over a subtitle track
///
/// Windows pair each entry with its successor; the final entry forms a
/// single-entry window. A match advances the cursor by two so the
/// consumed second entry never starts a window of its own; a miss slides
/// by one. The asymmetry is the de-duplication rule: once a pair is
/// reported, that pair can never be the tail of another window.
#[derive(Debug, Clone, Copy)]
pub struct TrackTraverser {
    scorer: WindowScorer,
}

impl TrackTraverser {
    /// Create a traverser around a scorer
    pub fn new(scorer: WindowScorer) -> Self {
        TrackTraverser { scorer }
    }

    /// Walk the track and hand every matching window to the sink
    ///
    /// The sink runs as matches are found, so rows hit the report without
    /// being collected per file. A sink error aborts the traversal.
    pub fn traverse<F>(&self, entries: &[SubtitleEntry], terms: &[String], mut sink: F) -> Result<()>
    where
        F: FnMut(WindowMatch) -> Result<()>,
    {
        let mut i = 0;
        while i < entries.len() {
            let (context, end_time_ms) = if i + 1 < entries.len() {
                (
                    format!("{} {}", entries[i].text, entries[i + 1].text),
                    entries[i + 1].end_time_ms,
                )
            } else {
                (entries[i].text.clone(), entries[i].end_time_ms)
            };

            let trust = self.scorer.score(&context, terms);
            if trust > 0 {
                sink(WindowMatch {
                    context,
                    start_time_ms: entries[i].start_time_ms,
                    end_time_ms,
                    trust,
                })?;

                // Skip the consumed second entry
                i += 2;
            } else {
                i += 1;
            }
        }

        Ok(())
    }
}
