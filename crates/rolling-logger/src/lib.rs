//! Rolling Logger
//!
//! A `tracing` subscriber that writes plain-text lines to a size-rotated file
//! and keeps the most recent lines in memory. `log` records from dependencies
//! are bridged through `tracing-log`.
//!
//! Rotated files are renamed `<name>.<timestamp>.log`; only the newest
//! `RollingConfig::keep_files` archives are kept.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file would grow past this size
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Rotated archives kept next to the active file
pub const DEFAULT_KEEP_FILES: usize = 5;
/// Lines held by the in-memory ring buffer
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<RollingAppender> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

#[derive(Debug, Clone)]
pub struct RollingConfig {
    pub dir: PathBuf,
    /// File stem; the active file is `<name>.log`
    pub name: String,
    pub max_bytes: u64,
    pub keep_files: usize,
    pub buffer_lines: usize,
}

impl RollingConfig {
    pub fn new(dir: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            dir: dir.into(),
            name: name.to_lowercase(),
            max_bytes: DEFAULT_MAX_BYTES,
            keep_files: DEFAULT_KEEP_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }

    fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn archive_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        self.dir.join(format!("{}.{}.log", self.name, stamp))
    }
}

struct Inner {
    config: RollingConfig,
    file: File,
    written: u64,
    recent: VecDeque<String>,
}

impl Inner {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::rename(self.config.active_path(), self.config.archive_path())?;
        self.file = open_append(&self.config.active_path())?;
        self.written = 0;
        prune_archives(&self.config)
    }

    fn remember(&mut self, buf: &[u8]) {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.is_empty()) {
            if self.recent.len() == self.config.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
    }
}

/// Cloneable handle to the rotating file; also the subscriber's `MakeWriter`
#[derive(Clone)]
pub struct RollingAppender {
    inner: Arc<Mutex<Inner>>,
}

impl RollingAppender {
    pub fn open(config: RollingConfig) -> Result<Self, LoggerError> {
        fs::create_dir_all(&config.dir)?;
        let path = config.active_path();
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        let recent = VecDeque::with_capacity(config.buffer_lines);
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                config,
                file,
                written,
                recent,
            })),
        })
    }

    /// Most recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => inner.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.inner.lock().ok().map(|inner| inner.config.active_path())
    }
}

impl Write for RollingAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger lock poisoned"))?;

        if inner.written > 0 && inner.written + buf.len() as u64 > inner.config.max_bytes {
            inner.rotate()?;
        }
        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;
        inner.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger lock poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingAppender {
    type Writer = RollingAppender;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Delete the oldest archives beyond `keep_files`
fn prune_archives(config: &RollingConfig) -> io::Result<()> {
    let prefix = format!("{}.", config.name);
    let active = format!("{}.log", config.name);

    let mut archives: Vec<PathBuf> = fs::read_dir(&config.dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log") && n != active)
                .unwrap_or(false)
        })
        .collect();

    // Timestamps sort lexically
    archives.sort();
    let excess = archives.len().saturating_sub(config.keep_files);
    for path in archives.into_iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Install the global subscriber writing to `<dir>/<name>.log`
pub fn init_logger(dir: PathBuf, name: &str) -> Result<(), LoggerError> {
    init_with(RollingConfig::new(dir, name))
}

pub fn init_with(config: RollingConfig) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let appender = RollingAppender::open(config)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_writer(appender.clone())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
    tracing_log::LogTracer::init().map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    LOGGER
        .set(appender)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Recent lines from the global logger; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|l| l.recent_lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> RollingConfig {
        RollingConfig {
            max_bytes: 64,
            keep_files: 2,
            buffer_lines: 3,
            ..RollingConfig::new(dir.path(), "Hearth")
        }
    }

    fn archives(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|n| n != "hearth.log")
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_to_lowercase_file() {
        let dir = TempDir::new().unwrap();
        let mut appender = RollingAppender::open(config(&dir)).unwrap();
        appender.write_all(b"first line\n").unwrap();
        appender.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("hearth.log")).unwrap();
        assert_eq!(content, "first line\n");
        assert_eq!(appender.path(), Some(dir.path().join("hearth.log")));
    }

    #[test]
    fn test_rotates_and_prunes() {
        let dir = TempDir::new().unwrap();
        let mut appender = RollingAppender::open(config(&dir)).unwrap();

        for i in 0..6 {
            let line = format!("{:02} {}\n", i, "x".repeat(40));
            appender.write_all(line.as_bytes()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let kept = archives(&dir);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|n| n.starts_with("hearth.") && n.ends_with(".log")));

        let active = fs::read_to_string(dir.path().join("hearth.log")).unwrap();
        assert!(active.starts_with("05 "));
    }

    #[test]
    fn test_ring_buffer_keeps_latest() {
        let dir = TempDir::new().unwrap();
        let mut appender = RollingAppender::open(config(&dir)).unwrap();
        appender.write_all(b"a\nb\n").unwrap();
        appender.write_all(b"c\nd\n").unwrap();

        assert_eq!(appender.recent_lines(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_helpers_require_init() {
        // Only this test touches the global logger.
        assert!(matches!(info("early"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines().is_empty());

        let dir = TempDir::new().unwrap();
        init_logger(dir.path().to_path_buf(), "Hearth").unwrap();
        info("app started").unwrap();
        error("something failed").unwrap();

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("app started")));
        assert!(lines.iter().any(|l| l.contains("ERROR") && l.contains("something failed")));
        assert!(matches!(
            init_logger(dir.path().to_path_buf(), "Hearth"),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
