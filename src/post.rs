//! WordPress posts.
//!
//! The WordPress REST API returns each page of posts as a JSON array of
//! objects with a great many fields. Only a handful are needed here, and
//! they are validated when a page is parsed: a post that is missing one of
//! them, or whose date cannot be read, fails the whole page rather than
//! producing a partial record.

use crate::clock::{DateTime, NaiveDateTime};
use crate::text;
use serde::Deserialize;
use thiserror::Error;

/// One published WordPress post, reduced to plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    id: u64,
    title: String,
    published: NaiveDateTime,
    content: String,
    link: String,
}

impl Post {
    /// Creates a post from already-normalized values.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        published: NaiveDateTime,
        content: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            published,
            content: content.into(),
            link: link.into(),
        }
    }

    /// Parses one page of the `/wp-json/wp/v2/posts` endpoint.
    ///
    /// Titles and content are normalized to plain text with
    /// [`text::normalize()`].
    pub fn parse_page(data: &str) -> Result<Vec<Self>, Error> {
        let raw: Vec<RawPost> = serde_json::from_str(data)?;
        raw.into_iter().map(Post::try_from).collect()
    }

    /// The post's numeric ID on its blog.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Plain-text title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Date the post was published, in the blog's time zone.
    pub fn published(&self) -> NaiveDateTime {
        self.published
    }

    /// Plain-text body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Permalink.
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl TryFrom<RawPost> for Post {
    type Error = Error;

    fn try_from(raw: RawPost) -> Result<Self, Self::Error> {
        let published = parse_date(&raw.date).map_err(|source| Error::Date {
            id: raw.id,
            date: raw.date.clone(),
            source,
        })?;
        Ok(Post::new(
            raw.id,
            text::normalize(&raw.title.rendered),
            published,
            text::normalize(&raw.content.rendered),
            raw.link,
        ))
    }
}

// WordPress sends `date` in the site's local time without an offset, but
// some proxies and plugins rewrite it as RFC 3339.
fn parse_date(date: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    date.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(date).map(|dt| dt.naive_local()))
}

#[derive(Debug, Deserialize)]
struct RawPost {
    id: u64,
    date: String,
    link: String,
    title: Rendered,
    content: Rendered,
}

#[derive(Debug, Deserialize)]
struct Rendered {
    rendered: String,
}

/// An error parsing post data.
#[derive(Debug, Error)]
pub enum Error {
    /// The page was not a JSON array of posts, or a post was missing a
    /// required field.
    #[error("Malformed post data: {0}")]
    Json(#[from] serde_json::Error),

    /// A post's publication date could not be read.
    #[error("Post {id} has an invalid date {date:?}: {source}")]
    Date {
        id: u64,
        date: String,
        source: chrono::ParseError,
    },
}
