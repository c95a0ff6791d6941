//! Roster: упорядоченный список студентов одного файла данных.
//!
//! Порядок = порядок добавления; удаления и изменения записей нет.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::Result;
use crate::student::{Student, SELECT_THRESHOLD};

/// Текст для пустого списка.
pub const EMPTY_PLACEHOLDER: &str = "Список студентов пуст.";

// Ширины колонок таблицы: №, Ф.И.О., Группа, Успеваемость.
const W_IDX: usize = 4;
const W_NAME: usize = 30;
const W_GROUP: usize = 20;
const W_GRADE: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить запись в конец. Содержимое полей не проверяется.
    pub fn add(mut self, name: impl Into<String>, group: Option<i64>, grade: impl Into<String>) -> Self {
        self.students.push(Student::new(name, group, grade));
        self
    }

    /// Записи со средним баллом >= 4.0, в исходном порядке.
    /// Первый нечисловой балл прерывает отбор ошибкой Grade.
    pub fn select(&self) -> Result<Roster> {
        let mut out = Vec::new();
        for s in &self.students {
            if s.average_grade()? >= SELECT_THRESHOLD {
                out.push(s.clone());
            }
        }
        Ok(Roster { students: out })
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    /// Табличное представление (или заглушка для пустого списка), с завершающим '\n'.
    pub fn render_table(&self) -> String {
        if self.students.is_empty() {
            return format!("{EMPTY_PLACEHOLDER}\n");
        }

        let line = format!(
            "+-{}-+-{}-+-{}-+-{}-+",
            "-".repeat(W_IDX),
            "-".repeat(W_NAME),
            "-".repeat(W_GROUP),
            "-".repeat(W_GRADE)
        );

        let mut out = String::new();
        let _ = writeln!(out, "{line}");
        let _ = writeln!(
            out,
            "| {:^W_IDX$} | {:^W_NAME$} | {:^W_GROUP$} | {:^W_GRADE$} |",
            "№", "Ф.И.О.", "Группа", "Успеваемость"
        );
        let _ = writeln!(out, "{line}");
        for (idx, s) in self.students.iter().enumerate() {
            let group = s.group.map(|g| g.to_string()).unwrap_or_default();
            let _ = writeln!(
                out,
                "| {:>W_IDX$} | {:<W_NAME$} | {:<W_GROUP$} | {:>W_GRADE$} |",
                idx + 1,
                s.name,
                group,
                s.grade
            );
        }
        let _ = writeln!(out, "{line}");
        out
    }

    /// Напечатать таблицу в stdout.
    pub fn display(&self) {
        print!("{}", self.render_table());
    }
}
