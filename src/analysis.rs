//! Descriptive statistics for a blog's posts.

use crate::clock::NaiveDateTime;
use crate::count::{WordCount, WordFrequency};
use crate::post::Post;
use log::debug;

/// Reading speed used to estimate reading time.
pub const WORDS_PER_MINUTE: usize = 200;

/// Default size of the word-frequency table.
pub const DEFAULT_TOP_WORDS: usize = 15;

/// The number of whitespace-delimited words in `text`.
///
/// # Examples
///
/// ```
/// use wpstats::analysis::word_count;
/// assert_eq!(word_count("Fish and chips, with vinegar."), 5);
/// assert_eq!(word_count(""), 0);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes needed to read `words` words, rounded up, and never
/// less than a minute.
///
/// # Examples
///
/// ```
/// use wpstats::analysis::reading_time;
/// assert_eq!(reading_time(1), 1);
/// assert_eq!(reading_time(200), 1);
/// assert_eq!(reading_time(201), 2);
/// ```
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// A post along with the metrics derived from it.
#[derive(Debug)]
pub struct PostSummary {
    post: Post,
    word_count: usize,
    reading_time: usize,
}

impl PostSummary {
    /// Derives metrics for `post`.
    pub fn new(post: Post) -> Self {
        let word_count = word_count(post.content());
        let reading_time = reading_time(word_count);
        Self {
            post,
            word_count,
            reading_time,
        }
    }

    /// The summarized post.
    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Number of words in the post's content.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Estimated reading time, in minutes.
    pub fn reading_time(&self) -> usize {
        self.reading_time
    }
}

/// Statistics for every post on a blog.
///
/// An analysis of zero posts is valid: totals and averages are zero and the
/// date range is absent.
#[derive(Debug)]
pub struct Analysis {
    posts: Vec<PostSummary>,
    total_words: usize,
    average_words: f64,
    average_reading_time: f64,
    earliest: Option<NaiveDateTime>,
    latest: Option<NaiveDateTime>,
    top_words: Vec<WordCount>,
}

impl Analysis {
    /// Analyzes `posts`, keeping the `top` most frequent words.
    pub fn new(posts: Vec<Post>, top: usize) -> Self {
        let frequency = WordFrequency::from_texts(posts.iter().map(Post::content));
        let top_words = frequency.top(top);
        let earliest = posts.iter().map(Post::published).min();
        let latest = posts.iter().map(Post::published).max();

        let posts: Vec<_> = posts.into_iter().map(PostSummary::new).collect();
        let total_words = posts.iter().map(PostSummary::word_count).sum();
        let total_reading_time: usize = posts.iter().map(PostSummary::reading_time).sum();
        let average_words = Self::mean(total_words, posts.len());
        let average_reading_time = Self::mean(total_reading_time, posts.len());

        debug!(
            "analyzed {} posts: {total_words} words, {} distinct terms",
            posts.len(),
            frequency.len()
        );

        Self {
            posts,
            total_words,
            average_words,
            average_reading_time,
            earliest,
            latest,
            top_words,
        }
    }

    fn mean(total: usize, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Per-post metrics, in the order the posts were retrieved.
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Number of posts analyzed.
    pub fn total_posts(&self) -> usize {
        self.posts.len()
    }

    /// True if there were no posts to analyze.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Total number of words across all posts.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Mean number of words per post.
    pub fn average_words(&self) -> f64 {
        self.average_words
    }

    /// Mean reading time per post, in minutes.
    pub fn average_reading_time(&self) -> f64 {
        self.average_reading_time
    }

    /// Publication date of the oldest post.
    pub fn earliest(&self) -> Option<NaiveDateTime> {
        self.earliest
    }

    /// Publication date of the newest post.
    pub fn latest(&self) -> Option<NaiveDateTime> {
        self.latest
    }

    /// The most frequent words, most frequent first.
    pub fn top_words(&self) -> &[WordCount] {
        &self.top_words
    }
}
