//! students: менеджер списка студентов в JSON-файле.
//!
//! Операции: add / display / select, сохранение с переносом файла в домашний каталог.

// Базовые модули
pub mod config;
pub mod error;
pub mod logging;

// Модель и хранение
pub mod student;
pub mod roster;
pub mod store;

// CLI (clap): команды и исполнители
pub mod cli;

// Удобные реэкспорты
pub use config::RosterConfig;
pub use error::{Result, RosterError};
pub use roster::Roster;
pub use store::{load_or_empty, persist, restore};
pub use student::Student;
