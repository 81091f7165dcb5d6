//! Console report.
//!
//! Tables are rendered by Arrow's pretty printer so the output looks the same
//! whichever session mode produced the numbers.

use super::types::{FrequencyBucket, WordCountReport, WordFrequency};
use crate::error::Result;

use datafusion::arrow::array::{ArrayRef, StringArray, UInt64Array};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::arrow::util::pretty::pretty_format_batches;
use std::sync::Arc;

const RULE_WIDTH: usize = 60;

pub fn render(report: &WordCountReport, top_n: usize) -> Result<String> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        String::new(),
        heavy.clone(),
        "WORD COUNT RESULTS".to_string(),
        heavy,
        format!("Total unique words: {}", report.unique_words),
        format!("Total word occurrences: {}", report.total_words),
        String::new(),
        format!("Top {} most frequent words:", top_n),
        light.clone(),
        words_table(&report.top_words)?,
    ];
    if report.unique_words > report.top_words.len() as u64 {
        lines.push(format!("only showing top {} rows", report.top_words.len()));
    }

    lines.push(String::new());
    lines.push("Word frequency distribution:".to_string());
    lines.push(light);
    lines.push(distribution_table(&report.distribution)?);

    Ok(lines.join("\n"))
}

fn words_table(rows: &[WordFrequency]) -> Result<String> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("word", DataType::Utf8, false),
        Field::new("count", DataType::UInt64, false),
    ]));
    let words: ArrayRef = Arc::new(StringArray::from_iter_values(
        rows.iter().map(|row| row.word.as_str()),
    ));
    let counts: ArrayRef = Arc::new(UInt64Array::from_iter_values(
        rows.iter().map(|row| row.count),
    ));

    let batch = RecordBatch::try_new(schema, vec![words, counts])?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

fn distribution_table(rows: &[FrequencyBucket]) -> Result<String> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("count", DataType::UInt64, false),
        Field::new("words_with_this_frequency", DataType::UInt64, false),
    ]));
    let frequencies: ArrayRef = Arc::new(UInt64Array::from_iter_values(
        rows.iter().map(|row| row.frequency),
    ));
    let words: ArrayRef = Arc::new(UInt64Array::from_iter_values(
        rows.iter().map(|row| row.words),
    ));

    let batch = RecordBatch::try_new(schema, vec![frequencies, words])?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
