use crate::clock::{Clock, DateTime, NaiveDateTime, Utc};
use crate::http::{HTTPError, HTTPResult};
use crate::post::Post;
use crate::wordpress::Blog;
use crate::wordpress::service::{Page, Service};
use reqwest::{StatusCode, Url};
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

pub fn date(s: &str) -> NaiveDateTime {
    s.parse().expect("invalid date supplied")
}

/// A post with `words` words of filler content.
pub fn post_with_words(id: u64, published: &str, words: usize) -> Post {
    let content = vec!["lorem"; words].join(" ");
    Post::new(
        id,
        format!("Post {id}"),
        date(published),
        content,
        format!("https://blog.example.com/?p={id}"),
    )
}

/// Serves pages of posts from `tests/data/posts_<suffix>_<page>.json`.
///
/// Pages without a fixture file are answered with a 404. The special
/// suffixes "404" (every page is missing) and "endless" (every page is
/// full) exercise the error paths.
pub struct TestService<'a> {
    suffix: &'a str,
    total_pages: Option<u32>,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self {
            suffix,
            total_pages: None,
        }
    }

    pub fn total_pages(mut self, total_pages: Option<u32>) -> Self {
        self.total_pages = total_pages;
        self
    }
}

impl<'a> Service for TestService<'a> {
    fn per_page(&self) -> u32 {
        2
    }

    async fn get_page(&self, page: u32) -> HTTPResult<Page> {
        let filename = match self.suffix {
            "404" => return Err(HTTPError::Http(StatusCode::NOT_FOUND)),
            "endless" => String::from("tests/data/posts_full_1.json"),
            suffix => format!("tests/data/posts_{suffix}_{page}.json"),
        };
        let body =
            fs::read_to_string(&filename).map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))?;
        Ok(Page {
            body,
            total_pages: self.total_pages,
        })
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2024-11-02T10:13:00-07:00")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}

fn site() -> Url {
    Url::parse("https://blog.example.com").expect("invalid test URL")
}

impl Blog {
    /// Returns a blog with three posts spread over two pages that can be
    /// used for testing purposes.
    pub async fn test() -> Blog {
        do_logging();
        Blog::fetch_with_service(site(), TestService::new("blog"))
            .await
            .unwrap()
    }

    /// Returns a blog with two full pages of posts whose server reports
    /// the page count.
    pub async fn test_full() -> Blog {
        do_logging();
        let service = TestService::new("full").total_pages(Some(2));
        Blog::fetch_with_service(site(), service).await.unwrap()
    }

    /// Returns a valid blog with no posts that can be used for testing
    /// purposes.
    pub async fn test_empty() -> Blog {
        Blog::fetch_with_service(site(), TestService::new("empty"))
            .await
            .unwrap()
    }

    /// Returns a blog whose REST API cannot be reached.
    pub async fn test_none() -> Option<Blog> {
        Blog::fetch_with_service(site(), TestService::new("404"))
            .await
            .ok()
    }
}
