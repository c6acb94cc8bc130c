use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::report::{ReportEmitter, ReportWriter};
use crate::scanner::{TermRegistry, TermSet, TrackTraverser, WindowScorer};
use crate::subtitle_processor::SubtitleTrack;

// @module: Application controller for the directory scan

/// Main application controller for the subtitle scan
///
/// Owns the read-only term registry and the scoring/traversal machinery;
/// `run` drives one sequential pass over the configured directory.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Marker to stemmed-term-set mapping, built once
    registry: TermRegistry,

    // @field: Row construction (links, time formatting)
    emitter: ReportEmitter,

    // @field: Windowing state machine
    traverser: TrackTraverser,
}

/// Per-run counters for the closing summary
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScanSummary {
    /// Files scanned to completion
    pub scanned: usize,
    /// Files without a recognized language marker
    pub skipped: usize,
    /// Files that failed to parse or report
    pub failed: usize,
    /// Total rows written
    pub rows: usize,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        // Unsupported language tags are rejected here, before any file is read
        let languages = config.scan_languages()?;

        let registry = TermRegistry::build(&languages, &config.search_words);
        for language in &languages {
            debug!(
                "Prepared {} stemmed search terms for {}",
                config.search_words.len(),
                language.name()
            );
        }

        let emitter = ReportEmitter::new(&config.video_url_template, &languages)?;
        let traverser = TrackTraverser::new(WindowScorer::new(config.threshold));

        Ok(Self {
            config,
            registry,
            emitter,
            traverser,
        })
    }

    /// Run the scan over the configured directory
    ///
    /// The report file is created (and truncated) before any subtitle file
    /// is touched, rows stream out as windows match, and a parse failure is
    /// confined to its file: logged, counted, and the scan moves on. Rows
    /// from files already processed stay flushed.
    pub fn run(&self) -> Result<ScanSummary> {
        let run_start = std::time::Instant::now();

        if !FileManager::dir_exists(&self.config.srt_directory) {
            return Err(anyhow::anyhow!(
                "Subtitle directory does not exist: {}",
                self.config.srt_directory.display()
            ));
        }

        let mut writer = ReportWriter::create(&self.config.output_file)?;
        writer.flush()?;

        let files = FileManager::find_srt_files(&self.config.srt_directory)?;
        if files.is_empty() {
            warn!(
                "No .srt files found in directory: {}",
                self.config.srt_directory.display()
            );
        }

        let progress = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("█▓▒░"));
        progress.set_message("Scanning files");

        let mut summary = ScanSummary::default();

        for file in &files {
            let filename = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            progress.set_message(format!("Scanning: {}", filename));

            let Some(term_set) = self.registry.for_filename(&filename) else {
                debug!("Skipping {} (no recognized language marker)", filename);
                summary.skipped += 1;
                progress.inc(1);
                continue;
            };

            let file_start = std::time::Instant::now();
            info!(
                "Start processing {} at {}",
                filename,
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            );

            match self.scan_file(file, &filename, term_set, &mut writer) {
                Ok(rows) => {
                    summary.scanned += 1;
                    summary.rows += rows;
                    info!(
                        "Finished processing {} at {} - Processing time: {}",
                        filename,
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        Self::format_duration(file_start.elapsed())
                    );
                }
                Err(e) => {
                    error!("Error processing file {}: {:#}", filename, e);
                    summary.failed += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message("Scan complete");
        writer.finish()?;

        info!(
            "Scan completed: {} scanned, {} skipped, {} errors, {} rows - Duration: {}",
            summary.scanned,
            summary.skipped,
            summary.failed,
            summary.rows,
            Self::format_duration(run_start.elapsed())
        );

        Ok(summary)
    }

    /// Scan one file: parse, traverse, stream rows; returns the row count
    fn scan_file(
        &self,
        path: &Path,
        filename: &str,
        term_set: &TermSet,
        writer: &mut ReportWriter,
    ) -> Result<usize> {
        let track = SubtitleTrack::parse_file(path, term_set.language())?;

        let mut rows = 0usize;
        self.traverser
            .traverse(&track.entries, term_set.terms(), |window| {
                let record = self.emitter.emit(filename, &window)?;
                writer.write_record(&record)?;
                rows += 1;
                Ok(())
            })
            .with_context(|| format!("Failed while scanning {}", filename))?;

        writer.flush()?;

        Ok(rows)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
