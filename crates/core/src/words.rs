use hashbrown::HashMap;
use serde::Serialize;

/// Reduces a token to its lowercase ASCII alphanumeric characters.
///
/// Returns `None` when nothing is left, e.g. for pure punctuation.
#[must_use]
pub fn normalize_word(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if word.is_empty() { None } else { Some(word) }
}

/// A normalized word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence count per normalized word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `line` on whitespace and counts every token that survives
    /// normalization.
    pub fn add_line(&mut self, line: &str) {
        for token in line.split_whitespace() {
            self.add_token(token);
        }
    }

    pub fn add_token(&mut self, token: &str) {
        if let Some(word) = normalize_word(token) {
            *self.counts.entry(word).or_insert(0) += 1;
        }
    }

    /// Count of an already normalized word; zero if it never occurred.
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tokens.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in ascending order of the word.
    #[must_use]
    pub fn sorted(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount {
                word: word.clone(),
                count,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        entries
    }
}

impl<'a> FromIterator<&'a str> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut freq = Self::new();
        for line in lines {
            freq.add_line(line);
        }
        freq
    }
}
