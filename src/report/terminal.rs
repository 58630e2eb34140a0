// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Plain-text reports for display in a terminal.

use crate::analysis::{Analysis, PostSummary};
use crate::clock::NaiveDateTime;
use crate::count::WordCount;
use crate::report::{Error, Renderer, ViewOptions, thousands};
use colored::Colorize;
use indoc::formatdoc;
use textwrap::Options;

const WIDTH: usize = 70;
const BAR_WIDTH: usize = 50;
const BAR: &str = "█";
const DATE_FORMAT: &str = "%b %d, %Y";

/// Renders an analysis as fixed-width terminal text.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&self, analysis: &Analysis, opts: &ViewOptions) -> Result<String, Error> {
        let banner = heading("WORDPRESS BLOG STATISTICS", opts);
        let mut sections = vec![
            format!("{}\n{banner}\n{}", rule('='), rule('=')),
            self.overview(analysis, opts),
        ];
        if opts.posts() {
            sections.push(self.posts(analysis, opts));
        }
        sections.push(self.top_words(analysis, opts));
        sections.push(rule('='));
        Ok(sections.join("\n\n"))
    }
}

impl TerminalRenderer {
    fn overview(&self, analysis: &Analysis, opts: &ViewOptions) -> String {
        let date_range = match (analysis.earliest(), analysis.latest()) {
            (Some(earliest), Some(latest)) => format!("{} - {}", date(earliest), date(latest)),
            _ => String::from("n/a"),
        };
        formatdoc! {"
            {}
            {}
            Posts:                {}
            Total words:          {}
            Average words:        {:.0} per post
            Average reading time: {:.1} minutes
            Date range:           {}",
            heading("OVERVIEW", opts),
            rule('-'),
            thousands(analysis.total_posts()),
            thousands(analysis.total_words()),
            analysis.average_words(),
            analysis.average_reading_time(),
            date_range,
        }
    }

    fn posts(&self, analysis: &Analysis, opts: &ViewOptions) -> String {
        let listing = if analysis.is_empty() {
            String::from("No posts.")
        } else {
            analysis
                .posts()
                .iter()
                .enumerate()
                .map(|(i, summary)| self.post(i + 1, summary, opts))
                .collect::<Vec<_>>()
                .join("\n\n")
        };
        format!("{}\n{}\n\n{listing}", heading("POSTS", opts), rule('-'))
    }

    fn post(&self, n: usize, summary: &PostSummary, opts: &ViewOptions) -> String {
        let post = summary.post();
        let title = format!("{n}. {}", post.title());
        let title = textwrap::fill(&title, Options::new(WIDTH).subsequent_indent("   "));
        let title = if opts.color() {
            title.bold().to_string()
        } else {
            title
        };
        formatdoc! {"
            {title}
               {}
               {} words | {} min read
               {}",
            date(post.published()),
            thousands(summary.word_count()),
            summary.reading_time(),
            post.link(),
        }
    }

    fn top_words(&self, analysis: &Analysis, opts: &ViewOptions) -> String {
        let words = analysis.top_words();
        let chart = if words.is_empty() {
            String::from("No words.")
        } else {
            let max = words.iter().map(|(_, count)| *count).max().unwrap_or(1);
            words
                .iter()
                .map(|word| self.word_bar(word, max, opts))
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!("{}\n{}\n{chart}", heading("TOP WORDS", opts), rule('-'))
    }

    fn word_bar(&self, (word, count): &WordCount, max: usize, opts: &ViewOptions) -> String {
        let bar = BAR.repeat(bar_length(*count, max));
        let bar = if opts.color() {
            bar.cyan().to_string()
        } else {
            bar
        };
        format!("{word:.<20} {count:>4} {bar}")
    }
}

/// Length of the bar for `count` when the most frequent word occurs `max`
/// times.
///
/// Bars are one glyph per occurrence until the longest would overflow
/// [`BAR_WIDTH`]; after that they are scaled to fit, but never vanish.
fn bar_length(count: usize, max: usize) -> usize {
    if max <= BAR_WIDTH {
        count
    } else {
        ((count * BAR_WIDTH + max / 2) / max).max(1)
    }
}

fn heading(text: &str, opts: &ViewOptions) -> String {
    if opts.color() {
        text.bold().to_string()
    } else {
        String::from(text)
    }
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(WIDTH)
}

fn date(datetime: NaiveDateTime) -> String {
    datetime.format(DATE_FORMAT).to_string()
}
