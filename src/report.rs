use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use url::Url;

use crate::errors::ReportError;
use crate::language_utils::ScanLanguage;
use crate::scanner::WindowMatch;

// @module: CSV report emission and VOD deep links

/// Placeholder the video URL template must contain
pub const VIDEO_ID_PLACEHOLDER: &str = "{video_id}";

/// Column order of the report; field order of `MatchRecord` must match
const CSV_HEADER: [&str; 6] = ["filename", "context", "start_time", "end_time", "link", "trust"];

/// One output row of the report
///
/// Serialized in field order, which fixes the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Source subtitle filename, marker included
    pub filename: String,

    /// Concatenated window text
    pub context: String,

    /// Window start as a time of day
    pub start_time: String,

    /// Window end as a time of day
    pub end_time: String,

    /// Deep link into the recording at the window start
    pub link: String,

    /// Similarity score of the match (always above the threshold)
    pub trust: u8,
}

/// Maps a matching window plus its source filename into a report row
#[derive(Debug, Clone)]
pub struct ReportEmitter {
    video_url_template: String,
    languages: Vec<ScanLanguage>,
}

impl ReportEmitter {
    /// Create an emitter from the URL template and the configured languages
    pub fn new(video_url_template: &str, languages: &[ScanLanguage]) -> Result<Self> {
        if !video_url_template.contains(VIDEO_ID_PLACEHOLDER) {
            return Err(ReportError::MissingPlaceholder(VIDEO_ID_PLACEHOLDER).into());
        }

        Ok(ReportEmitter {
            video_url_template: video_url_template.to_string(),
            languages: languages.to_vec(),
        })
    }

    /// Build the report row for a matching window
    pub fn emit(&self, filename: &str, window: &WindowMatch) -> Result<MatchRecord> {
        let link = self.build_link(filename, window.start_time_ms)?;

        Ok(MatchRecord {
            filename: filename.to_string(),
            context: window.context.clone(),
            start_time: format_row_time(window.start_time_ms)?,
            end_time: format_row_time(window.end_time_ms)?,
            link,
            trust: window.trust,
        })
    }

    /// Strip the language marker suffix to recover the video id
    ///
    /// `12345-de.srt` becomes `12345`. A filename that matches no marker is
    /// passed through untouched; the id is not validated either way.
    pub fn clean_filename<'a>(&self, filename: &'a str) -> &'a str {
        for language in &self.languages {
            if let Some(cleaned) = filename.strip_suffix(&language.filename_marker()) {
                return cleaned;
            }
        }
        filename
    }

    /// Deep link for a match: template with the id substituted plus a
    /// `t=<H>h<M>m<S>s` query parameter
    fn build_link(&self, filename: &str, start_time_ms: u64) -> Result<String> {
        let video_id = self.clean_filename(filename);
        let base = self.video_url_template.replace(VIDEO_ID_PLACEHOLDER, video_id);

        let mut url = Url::parse(&base)
            .map_err(|e| ReportError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.set_query(Some(&format!("t={}", format_link_timestamp(start_time_ms))));

        Ok(url.into())
    }
}

/// Timestamp encoding used in link query parameters
///
/// Whole seconds, no leading zeros: `0h0m1s`, `1h2m3s`.
pub fn format_link_timestamp(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h{}m{}s", hours, minutes, seconds)
}

/// Row timestamp: the default textual form of a time of day
///
/// `HH:MM:SS`, with a fractional part only when the milliseconds are
/// non-zero. Subtitle timestamps beyond 24 hours have no time-of-day form
/// and are an error, which the driver isolates to the file.
pub fn format_row_time(ms: u64) -> Result<String> {
    let seconds = (ms / 1000) as u32;
    let nanos = ((ms % 1000) * 1_000_000) as u32;

    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
        .ok_or(ReportError::TimeOutOfRange(ms))?;

    Ok(time.to_string())
}

/// Append-only CSV writer for the whole run
///
/// Created (and truncated) once at startup; the header row is written
/// immediately so an empty scan still produces a well-formed report.
pub struct ReportWriter {
    writer: Writer<File>,
}

impl ReportWriter {
    /// Create or truncate the report file and write the header row
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;

        // The header goes out up front, so serialization runs headerless
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write report header")?;

        Ok(ReportWriter { writer })
    }

    /// Append one match row
    pub fn write_record(&mut self, record: &MatchRecord) -> Result<()> {
        self.writer
            .serialize(record)
            .context("Failed to write report row")
    }

    /// Flush buffered rows to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush report file")
    }

    /// Flush and close the report
    pub fn finish(mut self) -> Result<()> {
        self.flush()
    }
}
