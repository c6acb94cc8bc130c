/*!
 * # subgrep - fuzzy search over SRT subtitle directories
 *
 * A Rust library for scanning directories of subtitle files for fuzzy
 * occurrences of a configured search-term list, reporting matches as CSV
 * rows with deep links into the corresponding video recordings.
 *
 * ## Features
 *
 * - Parse standard SRT subtitle files
 * - Snowball stemming of search terms (German, English)
 * - Levenshtein-ratio fuzzy matching over sliding two-entry windows
 * - CSV report with timestamps and Twitch VOD deep links
 * - Language dispatch on `-de`/`-en` filename markers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle file parsing
 * - `scanner`: The matching core:
 *   - `scanner::terms`: Stemmed search-term sets
 *   - `scanner::fuzzy`: Similarity ratio
 *   - `scanner::window`: Window scoring and track traversal
 * - `report`: CSV rows and deep links
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Scan language and filename marker handling
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod scanner;
pub mod report;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ScanSummary};
pub use language_utils::ScanLanguage;
pub use report::{MatchRecord, ReportEmitter, ReportWriter};
pub use scanner::{TermRegistry, TermSet, TrackTraverser, WindowMatch, WindowScorer};
pub use subtitle_processor::{SubtitleEntry, SubtitleTrack};
pub use errors::{AppError, ConfigError, ReportError, SubtitleError};
