// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! JSON reports for spreadsheets and other tools.

use crate::analysis::{Analysis, PostSummary};
use crate::clock::NaiveDateTime;
use crate::report::{Error, Renderer, ViewOptions};
use serde::{Deserialize, Serialize};

/// Structured form of an [`Analysis`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub total_posts: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub average_reading_time: f64,
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
    pub top_words: Vec<JsonWord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<JsonPost>>,
}

/// One entry in the word-frequency table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWord {
    pub word: String,
    pub count: usize,
}

/// Metrics for a single post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPost {
    pub id: u64,
    pub title: String,
    pub date: NaiveDateTime,
    pub link: String,
    pub word_count: usize,
    pub reading_time: usize,
}

impl JsonReport {
    /// Builds a report from `analysis`, listing posts only if `opts` asks
    /// for them.
    pub fn new(analysis: &Analysis, opts: &ViewOptions) -> Self {
        let top_words = analysis
            .top_words()
            .iter()
            .map(|(word, count)| JsonWord {
                word: word.clone(),
                count: *count,
            })
            .collect();
        let posts = opts
            .posts()
            .then(|| analysis.posts().iter().map(JsonPost::from).collect());

        Self {
            total_posts: analysis.total_posts(),
            total_words: analysis.total_words(),
            average_words: analysis.average_words(),
            average_reading_time: analysis.average_reading_time(),
            earliest: analysis.earliest(),
            latest: analysis.latest(),
            top_words,
            posts,
        }
    }
}

impl From<&PostSummary> for JsonPost {
    fn from(summary: &PostSummary) -> Self {
        let post = summary.post();
        Self {
            id: post.id(),
            title: post.title().to_string(),
            date: post.published(),
            link: post.link().to_string(),
            word_count: summary.word_count(),
            reading_time: summary.reading_time(),
        }
    }
}

/// Renders an analysis as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, analysis: &Analysis, opts: &ViewOptions) -> Result<String, Error> {
        let report = JsonReport::new(analysis, opts);
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DEFAULT_TOP_WORDS;
    use crate::report::TerminalRenderer;
    use crate::test_utils::date;
    use crate::wordpress::Blog;
    use pretty_assertions::assert_eq;

    async fn analysis() -> Analysis {
        Analysis::new(Blog::test().await.into_posts(), DEFAULT_TOP_WORDS)
    }

    fn parse(json: &str) -> JsonReport {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn it_round_trips_totals() {
        let analysis = analysis().await;
        let report = parse(
            &JsonRenderer
                .render(&analysis, &ViewOptions::default())
                .unwrap(),
        );
        assert_eq!(report.total_posts, 3);
        assert_eq!(report.total_words, 36);
        assert_eq!(report.average_words, 12.0);
        assert_eq!(report.average_reading_time, 1.0);
        assert_eq!(report.earliest, Some(date("2024-03-15T18:30:00")));
        assert_eq!(report.latest, Some(date("2024-10-28T09:15:00")));
    }

    #[tokio::test]
    async fn it_round_trips_top_words_in_order() {
        let analysis = analysis().await;
        let report = parse(
            &JsonRenderer
                .render(&analysis, &ViewOptions::default())
                .unwrap(),
        );
        let words: Vec<_> = report
            .top_words
            .into_iter()
            .map(|w| (w.word, w.count))
            .collect();
        assert_eq!(words.as_slice(), analysis.top_words());
    }

    #[tokio::test]
    async fn it_agrees_with_the_terminal_report() {
        let analysis = analysis().await;
        let opts = ViewOptions::default();
        let report = parse(&JsonRenderer.render(&analysis, &opts).unwrap());
        let text = TerminalRenderer.render(&analysis, &opts).unwrap();

        assert!(text.contains(&format!("Total words:          {}", report.total_words)));
        for word in &report.top_words {
            let line = format!("{:.<20} {:>4} ", word.word, word.count);
            assert!(text.contains(&line), "missing {line:?}");
        }
    }

    #[tokio::test]
    async fn it_lists_posts() {
        let report = JsonReport::new(&analysis().await, &ViewOptions::default());
        let posts = report.posts.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts[0],
            JsonPost {
                id: 101,
                title: String::from("Fish & Chips: A Review"),
                date: date("2024-10-28T09:15:00"),
                link: String::from("https://blog.example.com/2024/10/fish-and-chips/"),
                word_count: 14,
                reading_time: 1,
            }
        );
    }

    #[tokio::test]
    async fn it_omits_posts_on_request() {
        let analysis = analysis().await;
        let opts = ViewOptions::build().posts(false).build();
        let json = JsonRenderer.render(&analysis, &opts).unwrap();
        assert!(!json.contains("\"posts\""));
        assert_eq!(parse(&json).posts, None);
    }

    #[test]
    fn it_renders_an_empty_blog() {
        let analysis = Analysis::new(vec![], DEFAULT_TOP_WORDS);
        let report = parse(
            &JsonRenderer
                .render(&analysis, &ViewOptions::default())
                .unwrap(),
        );
        assert_eq!(report.total_posts, 0);
        assert_eq!(report.average_words, 0.0);
        assert_eq!(report.earliest, None);
        assert!(report.top_words.is_empty());
        assert_eq!(report.posts, Some(vec![]));
    }
}
