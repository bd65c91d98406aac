use serde::{Deserialize, Serialize};

use crate::error::{LogPlotError, LogPlotResult};

/// One raw cell as produced by the ingestor, before numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawCell {
    Text(String),
    Number(f64),
    Absent,
}

impl RawCell {
    /// Renders the cell the way the key column exposes it as an x-axis label.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.to_string(),
            Self::Absent => String::new(),
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<RawCell>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<RawCell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Ordered columns of one parsed input. The first column is the key column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    columns: Vec<Column>,
    row_count: usize,
}

impl Columns {
    /// Builds a column set, enforcing that every column carries `row_count` cells.
    pub fn new(columns: Vec<Column>) -> LogPlotResult<Self> {
        let Some(key) = columns.first() else {
            return Err(LogPlotError::EmptyOrInvalid(
                "no columns in input".to_owned(),
            ));
        };
        let row_count = key.cells.len();
        if let Some(column) = columns.iter().find(|c| c.cells.len() != row_count) {
            return Err(LogPlotError::InvalidData(format!(
                "column `{}` has {} cells, expected {row_count}",
                column.name,
                column.cells.len()
            )));
        }
        Ok(Self { columns, row_count })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn key_column(&self) -> &Column {
        &self.columns[0]
    }

    /// Columns after the key column, in input order.
    #[must_use]
    pub fn value_columns(&self) -> &[Column] {
        &self.columns[1..]
    }

    #[must_use]
    pub fn all(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Inclusive row-index range over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexWindow {
    pub start: usize,
    pub end: usize,
}

impl IndexWindow {
    /// Full window over `row_count` rows. `row_count` must be non-zero.
    #[must_use]
    pub fn full(row_count: usize) -> Self {
        Self {
            start: 0,
            end: row_count.saturating_sub(1),
        }
    }

    /// Number of rows covered; always at least one.
    #[must_use]
    pub fn point_count(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}
