//! Persist / restore the roster file.
//!
//! Формат: UTF-8 JSON массив объектов {name, group, grade}, отступ 4 пробела,
//! не-ASCII символы пишутся как есть.
//!
//! Размещение:
//! - persist пишет <work_dir>/<filename>, затем (relocate=true) переносит файл в
//!   <home_dir>/<filename>. После сохранения авторитетна домашняя копия.
//! - restore ищет файл сначала в рабочем каталоге, затем в домашнем.
//!   Отсутствие файла во всех местах даёт RosterError::NotFound.

use log::{debug, info, warn};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::roster::Roster;

/// Сериализация в JSON с отступом 4 пробела.
pub fn to_json_pretty(roster: &Roster) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    roster.serialize(&mut ser)?;
    Ok(buf)
}

/// Записать roster в файл (создать или перезаписать).
pub fn write_file(path: &Path, roster: &Roster) -> Result<()> {
    let data = to_json_pretty(roster).map_err(|e| RosterError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(|e| RosterError::io(path, e))?;
    f.write_all(&data).map_err(|e| RosterError::io(path, e))?;
    f.flush().map_err(|e| RosterError::io(path, e))?;
    debug!("store: wrote {} B to {}", data.len(), path.display());
    Ok(())
}

/// Прочитать roster из конкретного файла. Отсутствующий файл даёт NotFound.
pub fn read_file(path: &Path) -> Result<Roster> {
    let mut f = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RosterError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(RosterError::io(path, e)),
    };
    let mut buf = String::new();
    f.read_to_string(&mut buf)
        .map_err(|e| RosterError::io(path, e))?;
    serde_json::from_str(&buf).map_err(|e| RosterError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Перенести файл. Если rename не проходит (например, другая файловая система):
/// copy + remove; при неудаче копирования возвращается исходная ошибка rename.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    let rename_err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    warn!(
        "store: rename {} -> {} failed ({}), trying copy",
        from.display(),
        to.display(),
        rename_err
    );
    if fs::copy(from, to).is_err() {
        return Err(RosterError::io(to, rename_err));
    }
    fs::remove_file(from).map_err(|e| RosterError::io(from, e))
}

/// Сохранить roster и перенести файл в домашний каталог.
///
/// Возвращает путь, по которому файл лежит после операции.
pub fn persist(cfg: &RosterConfig, filename: &Path, roster: &Roster) -> Result<PathBuf> {
    let work = cfg.working_path(filename);
    write_file(&work, roster)?;

    if !cfg.relocate {
        return Ok(work);
    }
    let home = cfg.home_path(filename)?;
    if home == work {
        return Ok(work);
    }
    move_file(&work, &home)?;
    info!(
        "store: {} students saved, moved {} -> {}",
        roster.len(),
        work.display(),
        home.display()
    );
    Ok(home)
}

/// Найти и прочитать файл данных. Первый существующий кандидат выигрывает.
pub fn restore(cfg: &RosterConfig, filename: &Path) -> Result<Roster> {
    let candidates = cfg.candidate_paths(filename);
    for p in &candidates {
        match read_file(p) {
            Err(e) if e.is_not_found() => {
                debug!("store: {} not found", p.display());
                continue;
            }
            Ok(r) => {
                info!("store: loaded {} students from {}", r.len(), p.display());
                return Ok(r);
            }
            Err(e) => return Err(e),
        }
    }
    Err(RosterError::NotFound {
        path: candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| filename.to_path_buf()),
    })
}

/// restore, но отсутствие файла даёт пустой roster.
pub fn load_or_empty(cfg: &RosterConfig, filename: &Path) -> Result<Roster> {
    match restore(cfg, filename) {
        Err(RosterError::NotFound { path }) => {
            info!("store: {} not found, starting with empty roster", path.display());
            Ok(Roster::new())
        }
        other => other,
    }
}
