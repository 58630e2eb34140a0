//! General-purpose counting capabilities.

use counter::Counter;
use std::collections::HashMap;

/// Words shorter than this many characters are not counted.
pub const MIN_WORD_LENGTH: usize = 4;

/// Common English and German words that say nothing about what a blog is
/// about. Words shorter than [`MIN_WORD_LENGTH`] are already discarded, so
/// they are not listed.
pub const STOP_WORDS: &[&str] = &[
    // English
    "about", "above", "after", "also", "been", "before", "being", "below", "between", "both",
    "cannot", "could", "does", "doing", "down", "during", "each", "even", "every", "from",
    "further", "have", "having", "here", "itself", "just", "many", "more", "most", "much",
    "must", "myself", "only", "other", "ourselves", "over", "same", "should", "some", "such",
    "than", "that", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "under", "until", "very", "want", "were", "what", "when",
    "where", "which", "while", "will", "with", "would", "your", "yours", "yourself",
    // German
    "aber", "alle", "allem", "allen", "aller", "alles", "anderen", "auch", "beim", "bist",
    "dann", "dass", "dein", "deine", "denn", "diese", "diesem", "diesen",
    "dieser", "dieses", "doch", "durch", "eine", "einem", "einen", "einer", "eines", "etwas",
    "habe", "haben", "hatte", "hier", "ihre", "ihren", "immer", "jetzt", "kann", "kein",
    "keine", "mehr", "meine", "mich", "nach", "nicht", "noch", "oder", "schon", "sehr", "sein",
    "seine", "sich", "sind", "über", "unter", "viel", "wenn", "werden", "wieder", "wird",
    "wurde",
];

/// A word and the number of times it occurs.
pub type WordCount = (String, usize);

/// Splits text into countable terms.
///
/// Tokens are separated by whitespace, stripped of surrounding punctuation,
/// and lower-cased. Tokens shorter than [`MIN_WORD_LENGTH`] characters and
/// [`STOP_WORDS`] are dropped.
///
/// # Examples
///
/// ```
/// use wpstats::count::terms;
/// let terms: Vec<_> = terms("The Rust book, and the RUST reference!").collect();
/// assert_eq!(terms, ["rust", "book", "rust", "reference"]);
/// ```
pub fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .map(str::to_lowercase)
        .filter(|term| term.chars().count() >= MIN_WORD_LENGTH)
        .filter(|term| !STOP_WORDS.contains(&term.as_str()))
}

/// Counts how often each term occurs across a collection of texts.
#[derive(Debug, Default)]
pub struct WordFrequency {
    counts: Counter<String>,
    first_seen: HashMap<String, usize>,
}

impl WordFrequency {
    /// Counts the [`terms()`] of every text in `texts`, combined.
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut frequency = WordFrequency::default();
        for term in texts.into_iter().flat_map(terms) {
            let next = frequency.first_seen.len();
            frequency.first_seen.entry(term.clone()).or_insert(next);
            *frequency.counts.entry(term).or_insert(0) += 1;
        }
        frequency
    }

    /// The number of distinct terms.
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[cfg(test)]
    fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// The `n` most common terms, most common first.
    ///
    /// Terms with the same count are listed in the order they were first
    /// encountered.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut top = self.counts.most_common_tiebreaker(|lhs, rhs| {
            Ord::cmp(&self.first_seen[lhs], &self.first_seen[rhs])
        });
        top.truncate(n);
        top
    }
}
