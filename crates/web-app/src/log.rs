use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.level, self.message)
    }
}

/// Keeps the newest entries of the current page view, newest first.
pub struct MemoryLog {
    entries: Mutex<VecDeque<Entry>>,
    capacity: usize,
}

impl MemoryLog {
    pub const DEFAULT_CAPACITY: usize = 100;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Repository for MemoryLog {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }
}

/// Entries of the installed repository, newest first.
///
/// Returns nothing if no repository is installed or the log is currently locked, so that it can
/// be called from a panic hook.
#[must_use]
pub fn entries() -> Vec<Entry> {
    LOG.try_lock()
        .ok()
        .and_then(|log| log.as_ref().and_then(|log| log.read_entries().ok()))
        .map(Vec::from)
        .unwrap_or_default()
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<dyn Repository>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = record.args().to_string();
            match record.level() {
                Level::Error => gloo_console::error!(message.clone()),
                Level::Warn => gloo_console::warn!(message.clone()),
                Level::Info => gloo_console::info!(message.clone()),
                Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
            }

            if let Ok(log) = LOG.lock() {
                if let Some(ref log) = *log {
                    let _ = log.write_entry(Entry {
                        time: Local::now().format("%b %d %H:%M:%S").to_string(),
                        level: record.level(),
                        message,
                    });
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Oct 15 12:00:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_log_newest_first() {
        let log = MemoryLog::default();

        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();

        assert_eq!(
            log.read_entries().unwrap(),
            VecDeque::from([entry("b"), entry("a")])
        );
    }

    #[test]
    fn test_memory_log_capacity() {
        let log = MemoryLog::new(2);

        for message in ["a", "b", "c"] {
            log.write_entry(entry(message)).unwrap();
        }

        assert_eq!(
            log.read_entries().unwrap(),
            VecDeque::from([entry("c"), entry("b")])
        );
    }

    #[test]
    fn test_entries() {
        let log = Arc::new(MemoryLog::default());
        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();
        *LOG.lock().unwrap() = Some(log);

        assert_eq!(entries(), vec![entry("b"), entry("a")]);

        *LOG.lock().unwrap() = None;
        assert_eq!(entries(), vec![]);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(entry("a").to_string(), "Oct 15 12:00:00 INFO a");
    }

    #[test]
    fn test_memory_log_empty() {
        assert!(MemoryLog::default().read_entries().unwrap().is_empty());
    }
}
