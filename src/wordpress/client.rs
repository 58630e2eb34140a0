// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading posts from the WordPress REST API.

use crate::http;
use crate::post::{self, Post};
use crate::wordpress::service::Service;
use log::{debug, info};
use reqwest::Url;
use thiserror::Error;

/// Upper bound on the number of pages requested from a single blog.
pub const MAX_PAGES: u32 = 1000;

/// Represents a WordPress blog and its published posts.
#[derive(Debug)]
pub struct Blog {
    site: Url,
    posts: Vec<Post>,
}

impl Blog {
    /// Retrieves every published post from the blog at `site`.
    ///
    /// `service` is the actual service implementation that will be used to
    /// retrieve pages of posts, normally a
    /// [`WordPressService`](crate::wordpress::service::WordPressService).
    ///
    /// Returns an [`enum@Error`] if any page cannot be retrieved or parsed.
    /// Posts from pages that were already retrieved are discarded in that
    /// case; there is no partial result.
    ///
    /// Pages are requested one at a time, starting at page 1, until a page
    /// comes back short or empty, or the page count WordPress reported has
    /// been reached.
    pub async fn fetch_with_service<T: Service>(
        site: Url,
        service: T,
    ) -> Result<Self, Error> {
        let per_page = service.per_page() as usize;
        let mut posts = Vec::new();

        for number in 1..=MAX_PAGES {
            let page = service.get_page(number).await?;
            let batch = Post::parse_page(&page.body)?;
            let len = batch.len();
            debug!("page {number}: {len} posts");
            posts.extend(batch);

            let last_page = page.total_pages.is_some_and(|total| number >= total);
            if len < per_page || last_page {
                info!("retrieved {} posts from {site}", posts.len());
                return Ok(Self { site, posts });
            }
        }

        Err(Error::TooManyPages(MAX_PAGES))
    }

    /// The blog's base URL.
    pub fn site(&self) -> &Url {
        &self.site
    }

    /// The blog's published posts, in the order the API returned them.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// True if the blog has at least one published post.
    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }

    /// Consumes the blog, returning its posts.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] post::Error),

    /// The blog never signalled its last page.
    #[error("Gave up after {0} pages")]
    TooManyPages(u32),
}
