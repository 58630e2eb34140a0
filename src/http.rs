// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTP plumbing shared by the API services.
//!
//! Errors, results and the [`HTTPGet`] trait come from hypertyper. Its
//! client factory only takes a name and a version, so clients that need
//! connect and request timeouts are built here instead.

pub use hypertyper::prelude::{
    HttpError as HTTPError, HttpGet as HTTPGet, HttpResult as HTTPResult, IntoUrl,
};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates an HTTP client that gives up after `timeout`, both when
/// connecting and when waiting for a complete response.
///
/// According to the reqwest docs, building a client only fails if a TLS
/// backend or the DNS resolver cannot be initialized.
pub fn client(timeout: Duration) -> HTTPResult<Client> {
    Ok(ClientBuilder::new()
        .user_agent(user_agent())
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()?)
}

/// An appropriate user agent to use when making HTTP requests.
pub fn user_agent() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
