use std::{cmp::Ordering, fmt::Display};

/// The raw value of a field as seen by the table. Sorting compares these
/// directly, searching and default rendering go through [`Display`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Missing or a number that is not a number. Neither has a place in
    /// the natural order so both sort after every other value
    #[must_use]
    pub fn is_unordered(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Missing => 3,
        }
    }

    /// Natural ordering of the value's type. Missing is greater than any
    /// defined value, values of different types order by type
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (a, b) => a.type_rank().cmp(&b.type_rank()),
        }
    }

    /// Lower-cased string form used for searching
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for CellValue {
                fn from(value: $t) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

from_int!(u8, u16, u32, i32, i64);

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
