// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTP connector for the WordPress REST API.
//!
//! Service structures in this module provide a low-level way to interact
//! with a blog's `/wp-json/wp/v2/posts` endpoint, essentially a specialized
//! HTTP client that knows how WordPress paginates its results.

use crate::conf;
use crate::http::{self, HTTPError, HTTPGet, HTTPResult, IntoUrl};
use log::debug;
use reqwest::{Client, Url, header};
use std::sync::atomic::{AtomicU32, Ordering};

/// Number of posts requested per page. This is the largest page size the
/// REST API allows.
pub const PER_PAGE: u32 = 100;

/// Response header (`X-WP-TotalPages`) carrying the total number of pages
/// for a query.
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// One raw page of posts as returned by the API.
#[derive(Debug, Default)]
pub struct Page {
    /// The response body, a JSON array of post objects.
    pub body: String,

    /// The number of pages WordPress reports for the whole query, if it
    /// sent the header.
    pub total_pages: Option<u32>,
}

/// A service for retrieving pages of posts from a blog.
///
/// Using this trait, clients can implement different ways of connecting
/// to the WordPress API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// The number of posts requested per page.
    fn per_page(&self) -> u32;

    /// Retrieves page number `page` (starting at 1) of the blog's
    /// published posts.
    fn get_page(&self, page: u32) -> impl Future<Output = HTTPResult<Page>> + Send;
}

/// A service that contacts a WordPress site directly.
#[derive(Debug)]
pub struct WordPressService {
    client: Client,
    site: Url,

    // X-WP-TotalPages from the most recent response; 0 if it was missing.
    total_pages: AtomicU32,
}

impl WordPressService {
    /// Creates a new service for the blog at `site`, using the timeout
    /// from [`conf::request_timeout()`].
    pub fn new(site: Url) -> HTTPResult<Self> {
        let client = http::client(conf::request_timeout())?;
        Ok(Self {
            client,
            site,
            total_pages: AtomicU32::new(0),
        })
    }

    fn query_string(&self, page: u32) -> String {
        format!("?per_page={}&page={page}&status=publish", self.per_page())
    }

    fn uri(&self, page: u32) -> String {
        let site = self.site.as_str().trim_end_matches('/');
        let qs = self.query_string(page);
        format!("{site}/wp-json/wp/v2/posts{qs}")
    }

    fn total_pages(headers: &header::HeaderMap) -> Option<u32> {
        headers
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
    }
}

impl HTTPGet for WordPressService {
    /// Sends a GET request to a WordPress API endpoint and returns the raw
    /// body.
    async fn get<U>(&self, uri: U) -> HTTPResult<String>
    where
        U: IntoUrl + Send,
    {
        let resp = self.client.get(uri).send().await?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                let total_pages = Self::total_pages(resp.headers()).unwrap_or(0);
                self.total_pages.store(total_pages, Ordering::Relaxed);
                Ok(resp.text().await?)
            }
        }
    }
}

impl Service for WordPressService {
    fn per_page(&self) -> u32 {
        PER_PAGE
    }

    async fn get_page(&self, page: u32) -> HTTPResult<Page> {
        let uri = self.uri(page);
        debug!("GET {uri}");
        let body = self.get(&uri).await?;
        let total_pages = match self.total_pages.load(Ordering::Relaxed) {
            0 => None,
            n => Some(n),
        };
        Ok(Page { body, total_pages })
    }
}
