// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod report;
mod scanner;
mod subtitle_processor;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory of SRT files for fuzzy term matches (default command)
    Scan(ScanArgs),

    /// Generate shell completions for subgrep
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Directory of SRT files to scan
    #[arg(value_name = "SRT_DIRECTORY")]
    srt_directory: Option<PathBuf>,

    /// Output CSV file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fuzzy match threshold (0-100)
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Search word (repeatable; replaces the configured list)
    #[arg(short = 'w', long = "word")]
    words: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subgrep - fuzzy search over SRT subtitle directories
///
/// Scans a directory of subtitle files for fuzzy occurrences of a configured
/// search-word list and writes a CSV report with timestamps and deep links
/// into the matching video recordings.
#[derive(Parser, Debug)]
#[command(name = "subgrep")]
#[command(version = "1.0.0")]
#[command(about = "Fuzzy subtitle search with VOD deep links")]
#[command(long_about = "subgrep scans a directory of SRT files for fuzzy occurrences of a list of
search words and writes a CSV report with timestamps and deep links into the
corresponding video recordings.

EXAMPLES:
    subgrep                                # Scan the configured directory
    subgrep ./srts                         # Scan a specific directory
    subgrep -w hello -w goodbye ./srts     # Override the search words
    subgrep -t 85 ./srts                   # Lower the fuzzy threshold
    subgrep -o report.csv ./srts           # Write the report elsewhere
    subgrep --log-level debug ./srts       # Scan with debug logging
    subgrep completions bash > subgrep.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically; fill in search_words before the first scan.

FILENAMES:
    Files must end in -de.srt or -en.srt (per the configured languages) to
    select the stemming language; files without a marker are skipped.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of SRT files to scan
    #[arg(value_name = "SRT_DIRECTORY")]
    srt_directory: Option<PathBuf>,

    /// Output CSV file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fuzzy match threshold (0-100)
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Search word (repeatable; replaces the configured list)
    #[arg(short = 'w', long = "word")]
    words: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info).map_err(|e| anyhow!("Failed to set logger: {}", e))?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subgrep", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Scan(args)) => run_scan(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let scan_args = ScanArgs {
                srt_directory: cli.srt_directory,
                output: cli.output,
                threshold: cli.threshold,
                words: cli.words,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_scan(scan_args)
        }
    }
}

fn run_scan(options: ScanArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    apply_cli_overrides(&mut config, &options);

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create the controller and run the scan
    let controller = Controller::with_config(config)?;
    controller.run()?;

    Ok(())
}

fn apply_cli_overrides(config: &mut Config, options: &ScanArgs) {
    if let Some(srt_directory) = &options.srt_directory {
        config.srt_directory = srt_directory.clone();
    }

    if let Some(output) = &options.output {
        config.output_file = output.clone();
    }

    if let Some(threshold) = options.threshold {
        config.threshold = threshold;
    }

    if !options.words.is_empty() {
        config.search_words = options.words.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}
