use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// 日誌記錄器，輸出到 stderr，並可選擇寫入 logs/ 目錄
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Logger { level, file: None }
    }

    /// 在指定目錄建立以時間命名的日誌檔
    pub fn with_file(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = log_file_path(dir);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.file = Some(Mutex::new(file));
        Ok(self)
    }

    /// 設為全域 logger
    pub fn init(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| Error::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "[{} {}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

fn log_file_path(dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("issha_{}.log", timestamp))
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        eprintln!("{}", line);
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("無法寫入日誌: {}", e);
                }
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let logger = Logger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_file_output() {
        let dir = std::env::temp_dir().join(format!("issha_logs_{}", std::process::id()));
        let logger = Logger::new(LevelFilter::Debug).with_file(&dir).unwrap();
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("issha::test")
                .args(format_args!("hero moved"))
                .build(),
        );
        logger.flush();

        let entry = fs::read_dir(&dir).unwrap().next().unwrap().unwrap();
        let content = fs::read_to_string(entry.path()).unwrap();
        assert!(content.contains("WARN] issha::test: hero moved"));
        let _ = fs::remove_dir_all(&dir);
    }
}
