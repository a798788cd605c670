//! Tracing setup: a filtered stderr layer plus two append-only log files.
//!
//! `combined.log` gets every event at info and above, `error.log` only
//! errors. Both live in `QTAG_LOG_DIR`, or `~/.qtag/logs` by default.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

pub const COMBINED_LOG: &str = "combined.log";
pub const ERROR_LOG: &str = "error.log";

pub fn init(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("QTAG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(console_level(quiet, verbose)));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_filter(filter);

    // Missing file logs never stop the command.
    let files = log_dir().and_then(|dir| match LogFiles::open(&dir) {
        Ok(files) => Some(files),
        Err(error) => {
            eprintln!("qtag: file logging disabled: {error:#}");
            None
        }
    });
    let (combined, errors) = match files {
        Some(files) => (
            Some(file_layer(files.combined, LevelFilter::INFO)),
            Some(file_layer(files.errors, LevelFilter::ERROR)),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr)
        .with(combined)
        .with(errors)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

const fn console_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn file_layer<S>(file: Arc<File>, level: LevelFilter) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_writer(file)
        .with_filter(level)
}

fn log_dir() -> Option<PathBuf> {
    match std::env::var_os("QTAG_LOG_DIR") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".qtag").join("logs")),
    }
}

struct LogFiles {
    combined: Arc<File>,
    errors: Arc<File>,
}

impl LogFiles {
    fn open(dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("mkdir {}", dir.display()))?;
        Ok(Self {
            combined: Arc::new(append(&dir.join(COMBINED_LOG))?),
            errors: Arc::new(append(&dir.join(ERROR_LOG))?),
        })
    }
}

fn append(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}
