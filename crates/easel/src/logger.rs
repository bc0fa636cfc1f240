//! File-based logging for Easel.
//!
//! Each run writes to its own file at `~/.easel/logs/{run_id}/log`, and
//! every line is mirrored to stderr.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub struct EaselLogger {
    level: LevelFilter,
    file: Option<Arc<Mutex<File>>>,
    log_path: Option<PathBuf>,
}

impl EaselLogger {
    /// Logger writing only to stderr.
    pub fn stderr(level: LevelFilter) -> Self {
        Self {
            level,
            file: None,
            log_path: None,
        }
    }

    /// Logger writing to `{root}/{run_id}/log` as well as stderr.
    pub fn in_dir(root: &Path, level: LevelFilter) -> Result<Self> {
        let log_dir = root.join(run_id());
        create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Some(Arc::new(Mutex::new(file))),
            log_path: Some(log_path),
        })
    }

    /// Directory holding one subdirectory per run.
    pub fn default_root() -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(home.join(".easel").join("logs"))
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Install the logger. Falls back to stderr when the log file can't be
    /// created. Returns the log file path, if any.
    pub fn init(level: LevelFilter, to_file: bool) -> Result<Option<PathBuf>> {
        let logger = if to_file {
            match Self::default_root().and_then(|root| Self::in_dir(&root, level)) {
                Ok(logger) => logger,
                Err(err) => {
                    eprintln!("Logging to stderr only: {err:#}");
                    Self::stderr(level)
                }
            }
        } else {
            Self::stderr(level)
        };
        let log_path = logger.log_path.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow!("Failed to set logger: {}", e))?;

        if let Some(path) = &log_path {
            log::info!("Log file: {}", path.display());
        }
        Ok(log_path)
    }

    fn format(record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

/// `{timestamp}_{first uuid segment}`, unique per run.
fn run_id() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let uuid_string = Uuid::new_v4().to_string();
    let uuid = uuid_string.split('-').next().unwrap_or("unknown");
    format!("{timestamp}_{uuid}")
}

impl Log for EaselLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = Self::format(record);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed write must not take the app down.
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
            }
        }

        eprintln!("{}", message);
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}
