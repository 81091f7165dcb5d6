/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// How many distinct words occur exactly `frequency` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyBucket {
    pub frequency: u64,
    pub words: u64,
}

/// Everything a run prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountReport {
    pub input_lines: usize,
    /// Number of normalized, non-empty tokens.
    pub total_words: u64,
    /// Number of distinct normalized tokens.
    pub unique_words: u64,
    /// Most frequent words, frequency descending, then word ascending.
    pub top_words: Vec<WordFrequency>,
    pub distribution: Vec<FrequencyBucket>,
}

#[derive(Debug, Clone, Copy)]
pub struct WordCountOptions {
    pub top_n: usize,
    pub distribution_rows: usize,
}

impl Default for WordCountOptions {
    fn default() -> Self {
        Self {
            top_n: 20,
            distribution_rows: 10,
        }
    }
}
