//! In-process engine session.
//!
//! Wraps a DataFusion `SessionContext`. Partitioning, parallel execution and
//! spilling are all DataFusion's business; this type only loads data and runs SQL.

use super::types::QueryResult;
use crate::error::Result;

use datafusion::arrow::array::{ArrayRef, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::prelude::{SessionConfig, SessionContext};
use std::sync::Arc;

#[derive(Clone)]
pub struct EmbeddedSession {
    app_name: String,
    ctx: SessionContext,
}

impl EmbeddedSession {
    pub fn new(app_name: &str, target_partitions: Option<usize>) -> Self {
        let mut config = SessionConfig::new();
        if let Some(partitions) = target_partitions {
            config = config.with_target_partitions(partitions);
        }

        Self {
            app_name: app_name.to_string(),
            ctx: SessionContext::new_with_config(config),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Registers `rows` as a single-column string table, replacing any table
    /// of the same name. Returns the row count as seen by the engine.
    pub async fn create_dataframe(
        &self,
        table: &str,
        column: &str,
        rows: &[String],
    ) -> Result<usize> {
        let schema = Arc::new(Schema::new(vec![Field::new(column, DataType::Utf8, false)]));
        let values: ArrayRef = Arc::new(StringArray::from_iter_values(rows.iter()));
        let batch = RecordBatch::try_new(schema, vec![values])?;

        self.ctx.deregister_table(table)?;
        self.ctx.register_batch(table, batch)?;

        let row_count = self.ctx.table(table).await?.count().await?;
        tracing::debug!(table, row_count, "Registered in-memory table");
        Ok(row_count)
    }

    pub async fn sql(&self, query: &str) -> Result<QueryResult> {
        tracing::trace!(query, "Executing SQL");
        let df = self.ctx.sql(query).await?;
        let columns: Vec<String> = df
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect();
        let batches = df.collect().await?;
        QueryResult::from_batches(columns, &batches)
    }
}
