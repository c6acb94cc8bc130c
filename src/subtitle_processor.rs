use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::language_utils::ScanLanguage;

// @module: SRT parsing for the scanner

// @const: SRT timing line regex
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry without validation - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    // @creates: Validated subtitle entry
    // @validates: Time range and non-empty text
    pub fn new_validated(
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        text: String,
    ) -> Result<Self> {
        if end_time_ms <= start_time_ms {
            return Err(anyhow!(
                "Invalid time range: end time {} <= start time {}",
                end_time_ms,
                start_time_ms
            ));
        }

        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty subtitle text for entry {}", seq_num));
        }

        Ok(SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text: trimmed_text.to_string(),
        })
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to milliseconds - used by tests
    #[allow(dead_code)]
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Ordered subtitle entries for one file
#[derive(Debug)]
pub struct SubtitleTrack {
    /// Source filename
    pub source_file: PathBuf,

    /// Entries sorted by start time
    pub entries: Vec<SubtitleEntry>,

    /// Language the file was tagged with
    pub language: ScanLanguage,
}

impl SubtitleTrack {
    /// Parse an SRT file into a track
    pub fn parse_file<P: AsRef<Path>>(path: P, language: ScanLanguage) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;

        let entries = Self::parse_srt_string(&content)
            .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

        Ok(SubtitleTrack {
            source_file: path.to_path_buf(),
            entries,
            language,
        })
    }

    /// Parse SRT format string into subtitle entries
    ///
    /// Entries with an inverted time range or empty text are skipped with a
    /// warning; a file that yields no entries at all is an error. Entries are
    /// sorted by start time and renumbered so the track is index-addressable
    /// in time order.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let mut entries = Vec::new();

        let mut seq_num: Option<usize> = None;
        let mut times: Option<(u64, u64)> = None;
        let mut text = String::new();

        let mut flush = |seq_num: &mut Option<usize>, times: &mut Option<(u64, u64)>, text: &mut String| {
            if let (Some(seq), Some((start_ms, end_ms))) = (seq_num.take(), times.take()) {
                if text.trim().is_empty() {
                    warn!("Skipping empty subtitle entry {}", seq);
                } else {
                    match SubtitleEntry::new_validated(seq, start_ms, end_ms, text.clone()) {
                        Ok(entry) => entries.push(entry),
                        Err(e) => warn!("Skipping invalid subtitle entry {}: {}", seq, e),
                    }
                }
            }
            text.clear();
        };

        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                flush(&mut seq_num, &mut times, &mut text);
                continue;
            }

            // A bare number opens a new entry
            if seq_num.is_none() && text.is_empty() {
                if let Ok(num) = trimmed.parse::<usize>() {
                    seq_num = Some(num);
                    continue;
                }
            }

            // The timing line follows the sequence number
            if seq_num.is_some() && times.is_none() {
                if let Some(caps) = TIMING_REGEX.captures(trimmed) {
                    times = Some((
                        Self::capture_to_ms(&caps, 1),
                        Self::capture_to_ms(&caps, 5),
                    ));
                    continue;
                }
            }

            // Everything else inside an open entry is subtitle text
            if seq_num.is_some() && times.is_some() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
            } else {
                warn!(
                    "Unexpected text at line {} before sequence number or timestamp: {}",
                    line_idx + 1,
                    trimmed
                );
            }
        }

        // Last entry may not be terminated by a blank line
        flush(&mut seq_num, &mut times, &mut text);

        if entries.is_empty() {
            return Err(anyhow!("No valid subtitle entries were found in the SRT content"));
        }

        // Sort by start time to ensure correct order
        entries.sort_by_key(|entry| entry.start_time_ms);

        let mut overlap_count = 0;
        for i in 0..entries.len().saturating_sub(1) {
            if entries[i].end_time_ms > entries[i + 1].start_time_ms {
                overlap_count += 1;
            }
        }
        if overlap_count > 0 {
            warn!("Found {} overlapping subtitle entries", overlap_count);
        }

        // Renumber entries to ensure sequential order
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }

        Ok(entries)
    }

    /// Milliseconds from four timing-regex capture groups starting at `start_idx`
    fn capture_to_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
        let part = |idx: usize| -> u64 {
            caps.get(start_idx + idx)
                .map_or(0, |m| m.as_str().parse().unwrap_or(0))
        };

        (part(0) * 3600 + part(1) * 60 + part(2)) * 1000 + part(3)
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Track")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Language: {}", self.language)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
