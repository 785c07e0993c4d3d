// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::app_config::{Config, LogLevel};
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod markup;
mod providers;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for yacmt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// yacmt - Yet Another Chat Message Translator
///
/// Translates chat messages while keeping custom emoji tags, mentions and
/// Markdown formatting byte-for-byte intact.
#[derive(Parser, Debug)]
#[command(name = "yacmt")]
#[command(version = "1.0.0")]
#[command(about = "Markup-preserving chat message translator")]
#[command(long_about = "yacmt translates chat messages through the Google web endpoint while
preserving protected markup: custom emoji tags, mentions, code blocks,
spoilers, quotes and inline formatting pass through untouched.

EXAMPLES:
    yacmt \"Hello **world** :wave:\"              # Translate to the configured language
    yacmt -t es \"Hello <@123>\"                  # Translate to Spanish
    yacmt -f de -t en \"Guten Morgen\"            # Fix the source language
    cat messages.txt | yacmt -t fr               # One message per line from stdin
    yacmt -o \"Bonjour\"                           # Keep showing the original text
    yacmt --log-level debug \"Hello\"             # Verbose pipeline logging
    yacmt completions bash > yacmt.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Message text to translate; reads one message per line from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Source language code (ISO 639-1), or 'auto' to detect
    #[arg(short, long)]
    from: Option<String>,

    /// Target language code (ISO 639-1)
    #[arg(short, long)]
    to: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Render the stored original text instead of the translation
    #[arg(short = 'o', long)]
    show_original: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let options = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = options.command {
        let mut cmd = CommandLineOptions::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    // Load the configuration, creating a default file on first run
    let config = if Path::new(&options.config_path).exists() {
        Config::from_file(&options.config_path)?
    } else {
        info!("No config file found, creating {}", options.config_path);
        Config::create_default_config_file(&options.config_path)?
    };

    // CLI log level beats the configured one
    let log_level = options
        .log_level
        .clone()
        .map(LogLevel::from)
        .unwrap_or(config.log_level);
    log::set_max_level(log_level.to_level_filter());

    // Validate language overrides before doing any work
    if let Some(from) = &options.from {
        language_utils::validate_source_language(from)?;
    }
    if let Some(to) = &options.to {
        language_utils::validate_language_code(to)?;
    }

    // One message per line: either the positional argument or stdin
    let messages: Vec<String> = match &options.text {
        Some(text) => vec![text.clone()],
        None => {
            debug!("Reading messages from stdin");
            std::io::stdin()
                .lock()
                .lines()
                .collect::<std::io::Result<_>>()
                .context("Failed to read messages from stdin")?
        }
    };

    if messages.is_empty() {
        info!("Nothing to translate");
        return Ok(());
    }

    let controller = Controller::with_config(config)?;
    let rendered = controller
        .translate_messages(
            &messages,
            options.from.as_deref(),
            options.to.as_deref(),
            options.show_original,
        )
        .await;

    let mut stdout = std::io::stdout();
    for line in rendered {
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
