//! Simple file-based logging
//!
//! Nothing is written until [`init`] opens a log file, so library users
//! (and tests) that never call it pay only for the lock check.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

static LOG_FILE: Mutex<Option<File>> = parking_lot::const_mutex(None);

/// Open (and truncate) the log file; subsequent `log!` calls append to it
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    *LOG_FILE.lock() = Some(file);

    log("=== design-tokens log started ===");
    Ok(())
}

/// Whether a log file is open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().is_some()
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::log::is_enabled() {
            $crate::log::log(&format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_writes_after_init() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("design-tokens.log");
        init(&path).unwrap();
        assert!(is_enabled());

        crate::log!("resolved {} tokens", 3);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("log started"));
        assert!(content.contains("resolved 3 tokens"));
    }
}
