//! Word count pipeline.
//!
//! Each stage is a view over the previous one, so the engine plans the whole
//! chain and the driver only ever pulls aggregated results:
//!
//! ```text
//! corpus(line) -> words(word) -> clean_words(word) -> word_counts(word, frequency)
//! ```

use super::types::{FrequencyBucket, WordCountOptions, WordCountReport, WordFrequency};
use crate::error::Result;
use crate::ingestion::types::Corpus;
use crate::session::Session;

pub const CORPUS_TABLE: &str = "corpus";
pub const LINE_COLUMN: &str = "line";
pub const WORDS_VIEW: &str = "words";
pub const CLEAN_WORDS_VIEW: &str = "clean_words";
pub const WORD_COUNTS_VIEW: &str = "word_counts";

const WHITESPACE_RUN: &str = r"\s+";
const NON_WORD_CHAR: &str = r"[^\w]";

/// Renders a regex as a SQL string expression without any backslash inside a
/// quoted literal, so the SQL dialect's escape rules cannot alter the pattern.
pub fn regex_literal(pattern: &str) -> String {
    let parts: Vec<String> = pattern
        .split('\\')
        .map(|part| format!("'{}'", part.replace('\'', "''")))
        .collect();

    if parts.len() == 1 {
        parts[0].clone()
    } else {
        format!("concat({})", parts.join(", chr(92), "))
    }
}

fn tokenize_sql() -> String {
    format!(
        "CREATE OR REPLACE VIEW {words} AS \
         SELECT unnest(string_to_array(regexp_replace({line}, {ws}, ' ', 'g'), ' ')) AS word \
         FROM {corpus}",
        words = WORDS_VIEW,
        line = LINE_COLUMN,
        ws = regex_literal(WHITESPACE_RUN),
        corpus = CORPUS_TABLE,
    )
}

fn clean_sql() -> String {
    format!(
        "CREATE OR REPLACE VIEW {clean} AS \
         SELECT word FROM ( \
             SELECT lower(regexp_replace(word, {non_word}, '', 'g')) AS word FROM {words} \
         ) AS normalized \
         WHERE word IS NOT NULL AND word <> ''",
        clean = CLEAN_WORDS_VIEW,
        non_word = regex_literal(NON_WORD_CHAR),
        words = WORDS_VIEW,
    )
}

fn aggregate_sql() -> String {
    format!(
        "CREATE OR REPLACE VIEW {counts} AS \
         SELECT word, COUNT(*) AS frequency FROM {clean} GROUP BY word",
        counts = WORD_COUNTS_VIEW,
        clean = CLEAN_WORDS_VIEW,
    )
}

/// Loads the corpus and defines the derived views. Returns the row count of
/// the loaded table.
pub async fn prepare(session: &Session, corpus: &Corpus) -> Result<usize> {
    let row_count = session
        .create_dataframe(CORPUS_TABLE, LINE_COLUMN, &corpus.lines)
        .await?;
    tracing::info!(row_count, "Created DataFrame from input data");

    session.sql(&tokenize_sql()).await?;
    session.sql(&clean_sql()).await?;
    session.sql(&aggregate_sql()).await?;

    Ok(row_count)
}

pub async fn total_words(session: &Session) -> Result<u64> {
    session
        .sql(&format!(
            "SELECT COUNT(*) AS total_words FROM {}",
            CLEAN_WORDS_VIEW
        ))
        .await?
        .single_count("total_words")
}

pub async fn unique_words(session: &Session) -> Result<u64> {
    session
        .sql(&format!(
            "SELECT COUNT(*) AS unique_words FROM {}",
            WORD_COUNTS_VIEW
        ))
        .await?
        .single_count("unique_words")
}

/// Frequency table, count descending then word ascending. `None` returns every word.
pub async fn frequency_table(
    session: &Session,
    limit: Option<usize>,
) -> Result<Vec<WordFrequency>> {
    let mut query = format!(
        "SELECT word, frequency FROM {} ORDER BY frequency DESC, word ASC",
        WORD_COUNTS_VIEW
    );
    if let Some(limit) = limit {
        query.push_str(&format!(" LIMIT {}", limit));
    }

    let result = session.sql(&query).await?;
    let words = result.strings("word")?;
    let counts = result.counts("frequency")?;

    Ok(words
        .into_iter()
        .zip(counts)
        .map(|(word, count)| WordFrequency { word, count })
        .collect())
}

/// Number of distinct words per frequency, highest frequency first.
pub async fn frequency_distribution(
    session: &Session,
    limit: Option<usize>,
) -> Result<Vec<FrequencyBucket>> {
    let mut query = format!(
        "SELECT frequency, COUNT(*) AS words_with_this_frequency FROM {} \
         GROUP BY frequency ORDER BY frequency DESC",
        WORD_COUNTS_VIEW
    );
    if let Some(limit) = limit {
        query.push_str(&format!(" LIMIT {}", limit));
    }

    let result = session.sql(&query).await?;
    let frequencies = result.counts("frequency")?;
    let words = result.counts("words_with_this_frequency")?;

    Ok(frequencies
        .into_iter()
        .zip(words)
        .map(|(frequency, words)| FrequencyBucket { frequency, words })
        .collect())
}

/// Runs the whole pipeline over `corpus`.
pub async fn perform_word_count(
    session: &Session,
    corpus: &Corpus,
    options: &WordCountOptions,
) -> Result<WordCountReport> {
    tracing::info!(input_lines = corpus.len(), "Starting word count operation");

    let input_lines = prepare(session, corpus).await?;

    let total_words = total_words(session).await?;
    tracing::info!(word_count = total_words, "Tokenized and cleaned words");

    let unique_words = unique_words(session).await?;
    tracing::info!(unique_words, "Word count completed");

    let top_words = frequency_table(session, Some(options.top_n)).await?;
    let distribution = frequency_distribution(session, Some(options.distribution_rows)).await?;

    Ok(WordCountReport {
        input_lines,
        total_words,
        unique_words,
        top_words,
        distribution,
    })
}
