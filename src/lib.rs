// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! wpstats is a command-line tool for getting a quick statistical picture of
//! a WordPress blog. It reads every published post through the blog's public
//! REST API and reports how many posts and words there are, how long the
//! average post takes to read, when the blog was active, and which words
//! the author uses most.
//!
//! # Examples
//!
//! (In all examples, replace `https://blog.example.com` with the address of
//! an actual WordPress blog.)
//!
//! Print a report in the terminal:
//!
//! ```bash
//! wpstats https://blog.example.com
//! ```
//!
//! Save the report as a standalone HTML page named after the current time,
//! such as `wp_stats_20241028_153000.html`:
//!
//! ```bash
//! wpstats --format html https://blog.example.com
//! ```
//!
//! Write a JSON report to standard output, leaving out the per-post
//! listing:
//!
//! ```bash
//! wpstats --format json --summary --output - https://blog.example.com
//! ```
//!
//! Show the 30 most frequent words instead of the usual 15:
//!
//! ```bash
//! wpstats --top 30 https://blog.example.com
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! wpstats --help
//! ```
//!
//! # Configuration
//!
//! Requests time out after 10 seconds. Set `$WPSTATS_TIMEOUT` to a number of
//! seconds to change that. Pass `-v` (or `-vv`) to see what wpstats is doing
//! as it runs.
//!
//! The blog must expose the standard `/wp-json/wp/v2/posts` endpoint. If any
//! page of posts cannot be retrieved, wpstats reports the error and exits
//! without producing a report.
//!
//! # License
//!
//! wpstats is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod analysis;
pub mod cli;
pub mod clock;
pub mod conf;
pub mod count;
pub mod http;
pub mod post;
pub mod report;
pub mod text;
pub mod wordpress;

#[cfg(test)]
mod test_utils;
