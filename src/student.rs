//! Student record.
//!
//! Формат в файле (элемент массива):
//!   {"name": "Иванов И.И.", "group": 21, "grade": "5 4 5"}
//!
//! - group может отсутствовать или быть null;
//! - grade: строка с целыми баллами через пробел, без проверки при добавлении.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

use crate::error::{Result, RosterError};

/// Порог среднего балла для select.
pub const SELECT_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: Option<i64>,
    #[serde(default)]
    pub grade: String,
}

impl Student {
    pub fn new(name: impl Into<String>, group: Option<i64>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group,
            grade: grade.into(),
        }
    }

    /// Разобрать баллы из строки успеваемости.
    /// Целые вне диапазона i64 принимаются и переводятся в f64;
    /// ошибкой считается только нечисловой токен.
    pub fn scores(&self) -> Result<Vec<f64>> {
        self.grade
            .split_whitespace()
            .map(|tok| parse_score(tok).map_err(|e| RosterError::Grade {
                name: self.name.clone(),
                token: tok.to_string(),
                source: e,
            }))
            .collect()
    }

    /// Средний балл; делитель не меньше 1, поэтому пустая строка даёт 0.0.
    /// Сумма считается в f64 и не переполняется.
    pub fn average_grade(&self) -> Result<f64> {
        let scores = self.scores()?;
        let sum: f64 = scores.iter().sum();
        Ok(sum / scores.len().max(1) as f64)
    }
}

fn parse_score(tok: &str) -> std::result::Result<f64, std::num::ParseIntError> {
    match tok.parse::<i64>() {
        Ok(v) => Ok(v as f64),
        // Токен целый, но длинный: точное значение не нужно, хватает f64.
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(tok.parse::<f64>().unwrap_or(if tok.starts_with('-') {
                f64::MIN
            } else {
                f64::MAX
            }))
        }
        Err(e) => Err(e),
    }
}
