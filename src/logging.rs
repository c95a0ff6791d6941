//! Logger setup: one call per process, before any command runs.
//!
//! Уровень берём из RUST_LOG, иначе дефолт: info.
//! Записи дописываются в лог-файл (append), формат: "<время> <LEVEL> <сообщение>".
//! Если лог-файл открыть не удалось, логгер остаётся на stderr.

use env_logger::{Builder, Env, Target};
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;

use crate::config::RosterConfig;

/// Инициализировать глобальный логгер. Повторный вызов ничего не делает.
pub fn init_logger(cfg: &RosterConfig) {
    let path = cfg.log_path();
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {} {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });

    let open_err = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => {
            builder.target(Target::Pipe(Box::new(f)));
            None
        }
        Err(e) => Some(e),
    };

    if builder.try_init().is_err() {
        return;
    }
    if let Some(e) = open_err {
        warn!("log file {} unavailable ({}), logging to stderr", path.display(), e);
    }
}
