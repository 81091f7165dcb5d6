use crate::error::{Result, WordCountError};
use datafusion::arrow::array::{Array, ArrayRef, AsArray};
use datafusion::arrow::compute::cast;
use datafusion::arrow::datatypes::{DataType, Int64Type};
use datafusion::arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How the application attaches to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMode {
    /// DataFusion runs inside this process.
    Embedded,
    /// Queries are shipped to a connect server over HTTP.
    Remote,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionMode::Embedded => write!(f, "embedded"),
            ConnectionMode::Remote => write!(f, "remote"),
        }
    }
}

/// Materialized result of a query, independent of where it ran.
///
/// Integer columns are carried as JSON numbers, everything else as strings.
/// This is also the wire shape returned by the connect server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    /// Materializes `batches`. `columns` comes from the plan's schema, since an
    /// empty result may arrive as zero batches.
    pub fn from_batches(columns: Vec<String>, batches: &[RecordBatch]) -> Result<Self> {
        let mut rows = Vec::new();
        for batch in batches {
            let converted: Vec<Vec<Value>> = batch
                .columns()
                .iter()
                .map(column_values)
                .collect::<Result<_>>()?;

            for row_idx in 0..batch.num_rows() {
                rows.push(
                    converted
                        .iter()
                        .map(|column| column[row_idx].clone())
                        .collect(),
                );
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| {
                WordCountError::UnexpectedResult(format!(
                    "column '{}' not in result (columns: {:?})",
                    name, self.columns
                ))
            })
    }

    pub fn strings(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| match row.get(idx) {
                Some(Value::String(s)) => Ok(s.clone()),
                other => Err(WordCountError::UnexpectedResult(format!(
                    "column '{}' expected a string, got {:?}",
                    name, other
                ))),
            })
            .collect()
    }

    pub fn counts(&self, name: &str) -> Result<Vec<u64>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| {
                row.get(idx).and_then(Value::as_u64).ok_or_else(|| {
                    WordCountError::UnexpectedResult(format!(
                        "column '{}' expected a non-negative integer, got {:?}",
                        name,
                        row.get(idx)
                    ))
                })
            })
            .collect()
    }

    /// Reads a one-row, aggregate-style result such as `SELECT COUNT(*) AS n`.
    pub fn single_count(&self, name: &str) -> Result<u64> {
        if self.rows.len() != 1 {
            return Err(WordCountError::UnexpectedResult(format!(
                "expected exactly one row for '{}', got {}",
                name,
                self.rows.len()
            )));
        }
        Ok(self.counts(name)?[0])
    }
}

fn column_values(array: &ArrayRef) -> Result<Vec<Value>> {
    let is_integer = matches!(
        array.data_type(),
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    );

    if is_integer {
        let casted = cast(array, &DataType::Int64)?;
        let values = casted.as_primitive::<Int64Type>();
        Ok((0..values.len())
            .map(|i| {
                if values.is_null(i) {
                    Value::Null
                } else {
                    Value::from(values.value(i))
                }
            })
            .collect())
    } else {
        let casted = cast(array, &DataType::Utf8)?;
        let values = casted.as_string::<i32>();
        Ok((0..values.len())
            .map(|i| {
                if values.is_null(i) {
                    Value::Null
                } else {
                    Value::from(values.value(i))
                }
            })
            .collect())
    }
}
