// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Report renderers.
//!
//! An [`Analysis`] can be rendered as plain terminal text, as a single
//! self-contained HTML document, or as JSON. All three renderers take the
//! same [`ViewOptions`].

pub mod html;
pub mod json;
pub mod terminal;

pub use html::HtmlRenderer;
pub use json::{JsonRenderer, JsonReport};
pub use terminal::TerminalRenderer;

use crate::analysis::Analysis;
use clap::ValueEnum;
use std::str::FromStr;
use thiserror::Error;

/// The presentation of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text for a terminal.
    #[default]
    Terminal,

    /// A standalone HTML page.
    Html,

    /// A JSON document.
    Json,
}

impl Format {
    /// File extension for reports written to disk, if the format is
    /// written to a file by default.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Format::Terminal => None,
            Format::Html => Some("html"),
            Format::Json => Some("json"),
        }
    }

    /// The renderer for this format.
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Format::Terminal => Box::new(TerminalRenderer),
            Format::Html => Box::new(HtmlRenderer),
            Format::Json => Box::new(JsonRenderer),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Selects a format by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use wpstats::report::Format;
    /// assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
    /// assert!("xyz".parse::<Format>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Format as ValueEnum>::from_str(s, true).map_err(|_| Error::UnknownFormat(s.to_string()))
    }
}

/// View renderer options.
#[derive(Debug)]
pub struct ViewOptions {
    color: bool,
    posts: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            color: false,
            posts: true,
        }
    }
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use wpstats::report::ViewOptions;
    /// let opts = ViewOptions::build().color(true).posts(false).build();
    /// assert!(opts.color());
    /// assert!(!opts.posts());
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }

    /// True if terminal output should be styled with ANSI escape codes.
    pub fn color(&self) -> bool {
        self.color
    }

    /// True if the report should list each post.
    pub fn posts(&self) -> bool {
        self.posts
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug)]
#[must_use]
pub struct ViewOptionsBuilder {
    options: ViewOptions,
}

impl Default for ViewOptionsBuilder {
    fn default() -> Self {
        Self {
            options: ViewOptions::default(),
        }
    }
}

impl ViewOptionsBuilder {
    /// Sets the "color" option to true or false.
    pub fn color(mut self, color: bool) -> Self {
        self.options.color = color;
        self
    }

    /// Sets the "posts" option to true or false.
    pub fn posts(mut self, posts: bool) -> Self {
        self.options.posts = posts;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        self.options
    }
}

/// Turns an analysis into a finished document.
pub trait Renderer {
    /// Renders `analysis` according to `opts`.
    fn render(&self, analysis: &Analysis, opts: &ViewOptions) -> Result<String, Error>;
}

/// Renders `analysis` in the given `format`.
pub fn render(analysis: &Analysis, format: Format, opts: &ViewOptions) -> Result<String, Error> {
    format.renderer().render(analysis, opts)
}

/// A rendering error.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested format does not exist.
    #[error("Invalid format {0:?}: expected one of terminal, html, json")]
    UnknownFormat(String),

    /// The report could not be serialized as JSON.
    #[error("Could not serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Formats `n` with commas between groups of thousands.
///
/// # Examples
///
/// ```
/// use wpstats::report::thousands;
/// assert_eq!(thousands(2847), "2,847");
/// assert_eq!(thousands(1234567), "1,234,567");
/// assert_eq!(thousands(0), "0");
/// ```
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut s = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            s.push(',');
        }
        s.push(ch);
    }
    s
}

#[cfg(test)]
mod tests {
    mod format {
        use crate::report::{Error, Format};

        #[test]
        fn it_defaults_to_terminal() {
            assert_eq!(Format::default(), Format::Terminal);
        }

        #[test]
        fn it_parses_format_names() {
            assert_eq!("terminal".parse::<Format>().unwrap(), Format::Terminal);
            assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
            assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        }

        #[test]
        fn it_ignores_case() {
            assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        }

        #[test]
        fn it_rejects_unknown_formats() {
            let err = "xyz".parse::<Format>().unwrap_err();
            assert!(matches!(err, Error::UnknownFormat(ref name) if name == "xyz"));
        }

        #[test]
        fn it_returns_file_extensions() {
            assert_eq!(Format::Terminal.extension(), None);
            assert_eq!(Format::Html.extension(), Some("html"));
            assert_eq!(Format::Json.extension(), Some("json"));
        }
    }

    mod view_options {
        use crate::report::ViewOptions;

        #[test]
        fn it_returns_default_options() {
            let opts = ViewOptions::default();
            assert!(!opts.color());
            assert!(opts.posts());
        }

        #[test]
        fn it_returns_custom_options() {
            let opts = ViewOptions::build().color(true).posts(false).build();
            assert!(opts.color());
            assert!(!opts.posts());
        }

        #[test]
        fn it_returns_custom_options_with_only_color() {
            let opts = ViewOptions::build().color(true).build();
            assert!(opts.color());
            assert!(opts.posts());
        }
    }

    mod thousands {
        use crate::report::thousands;

        #[test]
        fn it_leaves_small_numbers_alone() {
            assert_eq!(thousands(7), "7");
            assert_eq!(thousands(999), "999");
        }

        #[test]
        fn it_groups_large_numbers() {
            assert_eq!(thousands(1000), "1,000");
            assert_eq!(thousands(100000), "100,000");
        }
    }
}
