//! Rolling File Logger
//!
//! Size-capped rolling log files for Tauri applications.
//! Keeps a fixed window of rotated files. The `tracing` fmt subscriber is
//! routed into the same files, and its `tracing-log` bridge picks up the
//! `log` facade, so both macro families land in one place.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Rotate when the active file exceeds this size
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Number of rotated files kept (`app.log`, `app.1.log`, ..)
const MAX_ROTATED_FILES: usize = 5;

static WRITER: OnceLock<Mutex<RollingWriter>> = OnceLock::new();

/// Appends lines to `<dir>/<name>.log`, rotating by size
struct RollingWriter {
    dir: PathBuf,
    name: String,
}

impl RollingWriter {
    fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.name, index))
    }

    fn rotate_if_needed(&self) -> io::Result<()> {
        let active = self.active_path();
        let size = fs::metadata(&active).map(|m| m.len()).unwrap_or(0);
        if size < MAX_FILE_SIZE {
            return Ok(());
        }

        // Shift app.{n}.log up, dropping the oldest
        let _ = fs::remove_file(self.rotated_path(MAX_ROTATED_FILES - 1));
        for i in (1..MAX_ROTATED_FILES - 1).rev() {
            let _ = fs::rename(self.rotated_path(i), self.rotated_path(i + 1));
        }
        fs::rename(&active, self.rotated_path(1))?;
        Ok(())
    }

    fn open_active(&self) -> io::Result<File> {
        self.rotate_if_needed()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.active_path())
    }

    fn write_line(&self, level: &str, message: &str) -> io::Result<()> {
        let mut file = self.open_active()?;
        writeln!(
            file,
            "[{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            message
        )
    }
}

fn with_writer(f: impl FnOnce(&RollingWriter) -> io::Result<()>) -> Result<(), String> {
    let writer = WRITER
        .get()
        .ok_or_else(|| "rolling-logger not initialized".to_string())?;
    let guard = writer.lock().map_err(|e| e.to_string())?;
    f(&guard).map_err(|e| e.to_string())
}

/// `tracing` MakeWriter adapter so the fmt subscriber shares the same files
struct RollingMakeWriter;

struct LineBuffer(Vec<u8>);

impl Write for LineBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineBuffer {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.0);
        let line = line.trim_end();
        if !line.is_empty() {
            let _ = with_writer(|w| {
                let mut file = w.open_active()?;
                writeln!(file, "{}", line)
            });
        }
    }
}

impl<'a> MakeWriter<'a> for RollingMakeWriter {
    type Writer = LineBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        LineBuffer(Vec::new())
    }
}

/// Initialize the rolling logger.
///
/// Creates `log_dir` if missing and installs the global `tracing`
/// subscriber (whose `tracing-log` bridge also captures `log` macros).
/// Calling twice returns an error from the subscriber registry.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    fs::create_dir_all(&log_dir).map_err(|e| e.to_string())?;

    let writer = RollingWriter {
        dir: log_dir,
        name: app_name.to_string(),
    };
    let _ = WRITER.set(Mutex::new(writer));

    tracing_subscriber::fmt()
        .with_writer(RollingMakeWriter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Write an INFO line directly (usable before/without the facades)
pub fn info(message: &str) -> Result<(), String> {
    with_writer(|w| w.write_line("INFO", message))
}

/// Write an ERROR line directly
pub fn error(message: &str) -> Result<(), String> {
    with_writer(|w| w.write_line("ERROR", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_writer(dir: &std::path::Path) -> RollingWriter {
        RollingWriter {
            dir: dir.to_path_buf(),
            name: "test".to_string(),
        }
    }

    #[test]
    fn test_write_line_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = make_writer(tmp.path());

        writer.write_line("INFO", "hello").unwrap();

        let content = fs::read_to_string(writer.active_path()).unwrap();
        assert!(content.contains("[INFO] hello"));
    }

    #[test]
    fn test_rotation_shifts_files() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = make_writer(tmp.path());

        // Fill the active file past the rotation threshold
        let big = "x".repeat(MAX_FILE_SIZE as usize + 1);
        fs::write(writer.active_path(), &big).unwrap();

        writer.write_line("INFO", "after rotation").unwrap();

        assert!(writer.rotated_path(1).exists());
        let content = fs::read_to_string(writer.active_path()).unwrap();
        assert!(content.contains("after rotation"));
        assert!(!content.contains("xxx"));
    }
}
