//! Word Count Module Tests
//!
//! Runs the pipeline against an embedded engine session.
//!
//! ## Test Scopes
//! - **Normalization**: punctuation stripping, case folding, empty-token removal.
//! - **Aggregation**: totals, unique counts, ordering and the frequency distribution.
//! - **Report**: console rendering of a finished run.

#[cfg(test)]
mod tests {
    use crate::ingestion::source::{clean_lines, sample_corpus};
    use crate::ingestion::types::{Corpus, InputSource};
    use crate::session::Session;
    use crate::wordcount::pipeline::{
        frequency_distribution, frequency_table, perform_word_count, prepare, regex_literal,
    };
    use crate::wordcount::report::render;
    use crate::wordcount::types::{
        FrequencyBucket, WordCountOptions, WordCountReport, WordFrequency,
    };

    fn corpus(text: &str) -> Corpus {
        Corpus {
            source: InputSource::Bundled,
            lines: clean_lines(text),
        }
    }

    async fn embedded() -> Session {
        Session::builder()
            .app_name("WordCountTest")
            .target_partitions(Some(4))
            .get_or_create()
            .await
            .unwrap()
    }

    async fn run(text: &str) -> WordCountReport {
        let session = embedded().await;
        perform_word_count(&session, &corpus(text), &WordCountOptions::default())
            .await
            .unwrap()
    }

    fn freq(word: &str, count: u64) -> WordFrequency {
        WordFrequency {
            word: word.to_string(),
            count,
        }
    }

    // ============================================================
    // REGEX LITERALS
    // ============================================================

    #[test]
    fn test_regex_literal_without_backslash_is_plain_string() {
        assert_eq!(regex_literal("[a-z]+"), "'[a-z]+'");
    }

    #[test]
    fn test_regex_literal_splices_backslashes() {
        assert_eq!(regex_literal(r"\s+"), "concat('', chr(92), 's+')");
        assert_eq!(regex_literal(r"[^\w]"), "concat('[^', chr(92), 'w]')");
    }

    #[test]
    fn test_regex_literal_escapes_quotes() {
        assert_eq!(regex_literal("it's"), "'it''s'");
    }

    // ============================================================
    // NORMALIZATION & COUNTING
    // ============================================================

    #[tokio::test]
    async fn test_cat_example() {
        let report = run("The cat sat. The cat ran!").await;

        assert_eq!(report.input_lines, 1);
        assert_eq!(report.total_words, 6);
        assert_eq!(report.unique_words, 4);
        assert_eq!(
            report.top_words,
            vec![freq("cat", 2), freq("the", 2), freq("ran", 1), freq("sat", 1)]
        );
    }

    #[tokio::test]
    async fn test_punctuation_only_tokens_are_discarded() {
        let report = run("hello -- world !!! ... hello").await;

        assert_eq!(report.total_words, 3);
        assert_eq!(report.unique_words, 2);
        assert_eq!(report.top_words[0], freq("hello", 2));
    }

    #[tokio::test]
    async fn test_inner_punctuation_is_removed_not_split() {
        let report = run("large-scale high-level don't S3").await;

        let words: Vec<&str> = report.top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["dont", "highlevel", "largescale", "s3"]);
    }

    #[tokio::test]
    async fn test_runs_of_whitespace_split_once() {
        let report = run("alpha \t  beta\t\tgamma     alpha").await;

        assert_eq!(report.total_words, 4);
        assert_eq!(report.unique_words, 3);
    }

    #[tokio::test]
    async fn test_unicode_words_are_folded() {
        let report = run("Café CAFÉ café naïve").await;

        assert_eq!(report.top_words[0], freq("café", 3));
        assert_eq!(report.top_words[1], freq("naïve", 1));
    }

    #[tokio::test]
    async fn test_multiple_lines() {
        let report = run("one two\n\n  two three  \nthree three").await;

        assert_eq!(report.input_lines, 3);
        assert_eq!(report.total_words, 6);
        assert_eq!(
            report.top_words,
            vec![freq("three", 3), freq("two", 2), freq("one", 1)]
        );
    }

    #[tokio::test]
    async fn test_empty_corpus() {
        let report = run("").await;

        assert_eq!(report.input_lines, 0);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.unique_words, 0);
        assert!(report.top_words.is_empty());
        assert!(report.distribution.is_empty());
    }

    #[tokio::test]
    async fn test_punctuation_only_corpus() {
        let report = run("!!! ...\n-- ?? ,,").await;

        assert_eq!(report.input_lines, 2);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.unique_words, 0);
        assert!(report.top_words.is_empty());
        assert!(report.distribution.is_empty());

        let text = render(&report, 20).unwrap();
        assert!(text.contains("Total unique words: 0"));
        assert!(text.contains("Total word occurrences: 0"));
    }

    // ============================================================
    // SAMPLE CORPUS
    // ============================================================

    #[tokio::test]
    async fn test_sample_corpus_counts() {
        let session = embedded().await;
        let report = perform_word_count(&session, &sample_corpus(), &WordCountOptions::default())
            .await
            .unwrap();

        assert_eq!(report.input_lines, 10);
        assert_eq!(report.total_words, 100);
        assert_eq!(report.unique_words, 69);
        assert_eq!(report.top_words.len(), 20);
        assert_eq!(report.top_words[0], freq("spark", 10));
        assert_eq!(report.top_words[1], freq("and", 4));
        assert_eq!(report.top_words[2], freq("processing", 4));
    }

    #[tokio::test]
    async fn test_sample_corpus_distribution() {
        let session = embedded().await;
        prepare(&session, &sample_corpus()).await.unwrap();

        let distribution = frequency_distribution(&session, None).await.unwrap();

        let expected: Vec<FrequencyBucket> = [(10, 1), (4, 2), (3, 3), (2, 10), (1, 53)]
            .iter()
            .map(|&(frequency, words)| FrequencyBucket { frequency, words })
            .collect();
        assert_eq!(distribution, expected);

        // Buckets account for every distinct word and every occurrence.
        let unique: u64 = distribution.iter().map(|b| b.words).sum();
        let total: u64 = distribution.iter().map(|b| b.words * b.frequency).sum();
        assert_eq!(unique, 69);
        assert_eq!(total, 100);
    }

    #[tokio::test]
    async fn test_full_table_is_non_increasing() {
        let session = embedded().await;
        prepare(&session, &sample_corpus()).await.unwrap();

        let table = frequency_table(&session, None).await.unwrap();

        assert_eq!(table.len(), 69);
        for pair in table.windows(2) {
            assert!(
                pair[0].count >= pair[1].count,
                "{:?} before {:?}",
                pair[0],
                pair[1]
            );
            if pair[0].count == pair[1].count {
                assert!(pair[0].word < pair[1].word);
            }
        }
    }

    #[tokio::test]
    async fn test_runs_are_deterministic() {
        let first = run(&sample_corpus().lines.join("\n")).await;
        let second = run(&sample_corpus().lines.join("\n")).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reloading_replaces_previous_corpus() {
        let session = embedded().await;
        let options = WordCountOptions::default();

        perform_word_count(&session, &corpus("a b c d e"), &options)
            .await
            .unwrap();
        let report = perform_word_count(&session, &corpus("x x"), &options)
            .await
            .unwrap();

        assert_eq!(report.total_words, 2);
        assert_eq!(report.top_words, vec![freq("x", 2)]);
    }

    #[tokio::test]
    async fn test_options_limit_rows() {
        let session = embedded().await;
        let options = WordCountOptions {
            top_n: 3,
            distribution_rows: 2,
        };

        let report = perform_word_count(&session, &sample_corpus(), &options)
            .await
            .unwrap();

        assert_eq!(report.top_words.len(), 3);
        assert_eq!(report.distribution.len(), 2);
        assert_eq!(report.unique_words, 69);
    }

    // ============================================================
    // REPORT
    // ============================================================

    #[tokio::test]
    async fn test_render_report() {
        let report = run("The cat sat. The cat ran!").await;

        let text = render(&report, 20).unwrap();

        assert!(text.contains("WORD COUNT RESULTS"));
        assert!(text.contains("Total unique words: 4"));
        assert!(text.contains("Total word occurrences: 6"));
        assert!(text.contains("Top 20 most frequent words:"));
        assert!(text.contains("| cat  | 2     |"));
        assert!(text.contains("words_with_this_frequency"));
        assert!(!text.contains("only showing"));
    }

    #[test]
    fn test_render_notes_truncation() {
        let report = WordCountReport {
            input_lines: 1,
            total_words: 3,
            unique_words: 3,
            top_words: vec![freq("a", 1)],
            distribution: vec![FrequencyBucket {
                frequency: 1,
                words: 3,
            }],
        };

        let text = render(&report, 1).unwrap();

        assert!(text.contains("only showing top 1 rows"));
    }
}
