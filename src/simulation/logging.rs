//! Tracing subscriber setup and log macros for the simulator
//!
//! Logs always go to stderr so the statistics report on stdout stays clean.
//! File output, when enabled, rolls daily and is written as JSON.

use crate::types::CliArgs;
use std::io::{self, IsTerminal};
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Where and how log records are written
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Most verbose level emitted by this crate
    pub level: Level,
    /// JSON records on stderr instead of compact text
    pub json: bool,
    /// Directory for daily rolling JSON log files; off when `None`
    pub file_directory: Option<String>,
    /// File name prefix of the rolling log files
    pub file_prefix: String,
    /// Emit a record when a span closes, with its busy/idle time
    pub span_timing: bool,
    /// Colored console output
    pub ansi: bool,
    /// Filter directive overriding `level` and `RUST_LOG`
    pub directive: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json: false,
            file_directory: None,
            file_prefix: env!("CARGO_PKG_NAME").to_string(),
            span_timing: false,
            ansi: io::stderr().is_terminal(),
            directive: None,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

impl LoggingConfig {
    /// Warnings and errors on stderr
    pub fn new() -> Self {
        Self::default()
    }

    /// Logging as requested on the command line: WARN by default, INFO with
    /// `--verbose`, DEBUG with `--debug`; the latter two also time spans
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = Self::new();
        if args.debug {
            config = config.with_level(Level::DEBUG).with_span_timing();
        } else if args.verbose {
            config = config.with_level(Level::INFO).with_span_timing();
        }
        if args.log_json {
            config = config.with_json();
        }
        if let Some(directory) = &args.log_dir {
            config = config.with_log_dir(directory.clone());
        }
        config
    }

    /// Set the level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Write JSON records to stderr
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Also write daily rolling JSON files into `directory`
    pub fn with_log_dir(mut self, directory: impl Into<String>) -> Self {
        self.file_directory = Some(directory.into());
        self
    }

    /// Record span close events
    pub fn with_span_timing(mut self) -> Self {
        self.span_timing = true;
        self
    }

    /// Use a custom filter directive
    pub fn with_directive(mut self, filter: impl Into<String>) -> Self {
        self.directive = Some(filter.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_timing {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(filter) = &self.directive {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        }))
    }

    fn console_layer(&self) -> BoxedLayer {
        if self.json {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(self.ansi)
                .with_span_events(self.span_events())
                .boxed()
        }
    }

    /// Install the global subscriber; fails if one is already installed
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut layers = vec![self.console_layer()];

        if let Some(directory) = &self.file_directory {
            let (writer, guard) = non_blocking(rolling::daily(directory, &self.file_prefix));
            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
            // the writer must outlive every log call of the process
            std::mem::forget(guard);
        }

        Registry::default()
            .with(layers)
            .with(self.filter()?)
            .try_init()?;

        info!(level = %self.level, file = ?self.file_directory, "Logging initialized");
        Ok(())
    }
}

/// Log a record stamped with the simulated clock, e.g.
/// `clock_event!(info, clock, "Simulation finished", processed = n)`
#[macro_export]
macro_rules! clock_event {
    ($level:ident, $clock:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::$level!(
            target: "emergency_care_simulator::events",
            clock = %$crate::events::format_clock($clock),
            $($key = $value,)*
            "{}",
            $message
        )
    };
}

/// Span timing a stretch of the run; only reported when span timing is on
#[macro_export]
macro_rules! run_span {
    ($name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info_span!($name, $($key = $value,)*)
    };
}
