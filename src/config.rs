//! Roster configuration: where the data file is written, where it is moved
//! after a save, and where the log goes.
//!
//! - RosterConfig::from_env() reads STUDENTS_WORK_DIR / STUDENTS_HOME /
//!   STUDENTS_LOG_FILE / STUDENTS_RELOCATE (HOME/USERPROFILE as home fallback).
//! - with_* methods override single fields (tests point work/home at temp dirs).
//!
//! Location rules:
//! - working path = <work_dir>/<filename>, сюда пишет persist и отсюда сначала читает restore;
//! - home path    = <home_dir>/<filename>, сюда файл переносится после записи (relocate=true).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

/// Имя лог-файла по умолчанию (в рабочем каталоге).
pub const DEFAULT_LOG_FILE: &str = "students.log";

/// Top-level configuration of one CLI invocation.
#[derive(Clone, Debug)]
pub struct RosterConfig {
    /// Working directory the data file and the log file are resolved against.
    /// Env: STUDENTS_WORK_DIR (default: current dir, "." if it cannot be read)
    pub work_dir: PathBuf,

    /// Home directory the data file is moved into after a save.
    /// Env: STUDENTS_HOME, then HOME, then USERPROFILE (default None)
    pub home_dir: Option<PathBuf>,

    /// Log file name (relative names resolve against work_dir).
    /// Env: STUDENTS_LOG_FILE (default "students.log")
    pub log_file: PathBuf,

    /// Move the saved file into home_dir.
    /// Env: STUDENTS_RELOCATE (default true; "0|false|no|off" => false)
    pub relocate: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            work_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            home_dir: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            relocate: true,
        }
    }
}

impl RosterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("STUDENTS_WORK_DIR") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.work_dir = PathBuf::from(s);
            }
        }

        cfg.home_dir = ["STUDENTS_HOME", "HOME", "USERPROFILE"]
            .iter()
            .filter_map(|k| std::env::var_os(k))
            .find(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Ok(v) = std::env::var("STUDENTS_LOG_FILE") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.log_file = PathBuf::from(s);
            }
        }

        if let Ok(v) = std::env::var("STUDENTS_RELOCATE") {
            let s = v.trim().to_ascii_lowercase();
            cfg.relocate = !(s == "0" || s == "false" || s == "no" || s == "off");
        }

        cfg
    }

    // ----------------- builder-style helpers -----------------

    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    pub fn with_log_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.log_file = file.into();
        self
    }

    pub fn with_relocate(mut self, on: bool) -> Self {
        self.relocate = on;
        self
    }

    // ----------------- path resolution -----------------

    /// Путь к файлу данных в рабочем каталоге.
    pub fn working_path(&self, filename: &Path) -> PathBuf {
        self.work_dir.join(filename)
    }

    /// Путь к файлу данных в домашнем каталоге.
    pub fn home_path(&self, filename: &Path) -> Result<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|h| h.join(filename))
            .ok_or(RosterError::NoHomeDir)
    }

    /// Кандидаты для чтения: сначала рабочий каталог, затем домашний (если relocate).
    /// Дубликаты (абсолютный filename) отбрасываются.
    pub fn candidate_paths(&self, filename: &Path) -> Vec<PathBuf> {
        let mut out = vec![self.working_path(filename)];
        if self.relocate {
            if let Ok(home) = self.home_path(filename) {
                if home != out[0] {
                    out.push(home);
                }
            }
        }
        out
    }

    /// Полный путь к лог-файлу.
    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join(&self.log_file)
    }
}

impl fmt::Display for RosterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RosterConfig {{ work_dir: {}, home_dir: {}, log_file: {}, relocate: {} }}",
            self.work_dir.display(),
            self.home_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string()),
            self.log_file.display(),
            self.relocate
        )
    }
}
