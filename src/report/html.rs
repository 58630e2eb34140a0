// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Standalone HTML reports.
//!
//! The generated page embeds its own stylesheet and references no external
//! assets, so it can be opened straight from disk or attached to an email.

use crate::analysis::{Analysis, PostSummary};
use crate::report::{Error, Renderer, ViewOptions, thousands};
use crate::text::escape_html;
use indoc::formatdoc;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Renders an analysis as an HTML document.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    const STYLESHEET: &'static str = include_str!("report.css");

    fn stat_card(label: &str, value: &str) -> String {
        formatdoc! {r#"
            <div class="stat-card">
                <div class="stat-label">{}</div>
                <div class="stat-value">{}</div>
            </div>"#,
            escape_html(label),
            escape_html(value),
        }
    }

    fn stats(&self, analysis: &Analysis) -> String {
        let date_range = match (analysis.earliest(), analysis.latest()) {
            (Some(earliest), Some(latest)) => format!(
                "{} – {}",
                earliest.format(DATE_FORMAT),
                latest.format(DATE_FORMAT)
            ),
            _ => String::from("n/a"),
        };
        [
            Self::stat_card("Posts", &thousands(analysis.total_posts())),
            Self::stat_card("Total words", &thousands(analysis.total_words())),
            Self::stat_card("Words per post", &format!("{:.0}", analysis.average_words())),
            Self::stat_card(
                "Reading time",
                &format!("{:.1} min", analysis.average_reading_time()),
            ),
            Self::stat_card("Published", &date_range),
        ]
        .join("\n")
    }

    fn post(&self, summary: &PostSummary) -> String {
        let post = summary.post();
        formatdoc! {r#"
            <div class="post">
                <div class="post-title">{}</div>
                <div class="post-meta">{}</div>
                <div class="post-meta">{} words | {} min read</div>
                <a href="{}" class="post-link" target="_blank">Read post</a>
            </div>"#,
            escape_html(post.title()),
            post.published().format(DATE_FORMAT),
            thousands(summary.word_count()),
            summary.reading_time(),
            escape_html(post.link()),
        }
    }

    fn posts(&self, analysis: &Analysis) -> String {
        let listing = if analysis.is_empty() {
            String::from(r#"<p class="empty">No posts.</p>"#)
        } else {
            analysis
                .posts()
                .iter()
                .map(|summary| self.post(summary))
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!("<h2>Posts</h2>\n{listing}")
    }

    fn top_words(&self, analysis: &Analysis) -> String {
        let words = analysis.top_words();
        if words.is_empty() {
            return String::from("<h2>Top Words</h2>\n<p class=\"empty\">No words.</p>");
        }

        let max = words.iter().map(|(_, count)| *count).max().unwrap_or(1);
        let bars = words
            .iter()
            .map(|(word, count)| {
                let width = *count as f64 / max as f64 * 100.0;
                format!(
                    r#"<div class="bar" style="width: {width:.1}%">{}: {count}</div>"#,
                    escape_html(word)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("<h2>Top Words</h2>\n<div class=\"chart\">\n{bars}\n</div>")
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, analysis: &Analysis, opts: &ViewOptions) -> Result<String, Error> {
        let posts = if opts.posts() {
            self.posts(analysis)
        } else {
            String::new()
        };
        Ok(formatdoc! {r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <meta name="generator" content="{} v{}">
            <title>WordPress Blog Statistics</title>
            <style>
            {}
            </style>
            </head>
            <body>
            <div class="container">
            <h1>WordPress Blog Statistics</h1>
            <div class="stats">
            {}
            </div>
            {}
            {}
            </div>
            </body>
            </html>
            "#,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            Self::STYLESHEET.trim_end(),
            self.stats(analysis),
            posts,
            self.top_words(analysis),
        })
    }
}
