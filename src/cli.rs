//! Drives the command-line program.

use crate::analysis::{Analysis, DEFAULT_TOP_WORDS};
use crate::clock::{Clock, SystemClock};
use crate::conf;
use crate::report::{self, Format, ViewOptions};
use crate::wordpress::service::{Service, WordPressService};
use crate::wordpress::{self, Blog};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use reqwest::Url;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::{fs, process};
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Collects word and reading-time statistics from a WordPress blog", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Base URL of the blog, e.g. https://blog.example.com
    url: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Terminal)]
    format: Format,

    /// Number of words in the frequency table
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    top: usize,

    /// Write the report to PATH ("-" for standard output)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Leave out the per-post listing
    #[arg(long, default_value_t = false)]
    summary: bool,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// The blog's base URL.
    ///
    /// Only absolute `http` and `https` URLs with a host are accepted.
    pub fn site(&self) -> Result<Url, Error> {
        let invalid = || Error::InvalidUrl(self.url.clone());
        let url = Url::parse(&self.url).map_err(|_| invalid())?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some_and(|host| !host.is_empty()) => Ok(url),
            _ => Err(invalid()),
        }
    }

    /// Where the report should be written.
    ///
    /// Terminal reports go to stdout unless `--output` names a file. HTML
    /// and JSON reports go to a timestamped file unless `--output` says
    /// otherwise.
    pub fn destination<C: Clock>(&self, clock: &C) -> Destination {
        match (self.output.as_deref(), self.format.extension()) {
            (Some("-"), _) | (None, None) => Destination::Stdout,
            (Some(path), _) => Destination::File(PathBuf::from(path)),
            (None, Some(extension)) => {
                Destination::File(PathBuf::from(conf::report_filename(extension, clock)))
            }
        }
    }

    fn view_options(&self, destination: &Destination, tty: bool) -> ViewOptions {
        let color = self.format == Format::Terminal && *destination == Destination::Stdout && tty;
        ViewOptions::build()
            .color(color)
            .posts(!self.summary)
            .build()
    }
}

/// Where a finished report ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Fetches the blog named by `config`, analyzes it, and writes the report.
///
/// Nothing is written unless every page of posts was retrieved.
pub async fn run(config: Config) -> Result<(), Error> {
    let service = WordPressService::new(config.site()?).map_err(wordpress::client::Error::from)?;
    let tty = io::stdout().is_terminal();
    run_with_service(&config, service, &SystemClock, &mut io::stdout(), tty).await
}

/// Runs the program against `service`.
///
/// Reports destined for standard output, along with the confirmation line
/// for reports saved to a file, are written to `out`. Terminal reports are
/// colored only if `tty` is true.
pub(crate) async fn run_with_service<T, C, W>(
    config: &Config,
    service: T,
    clock: &C,
    out: &mut W,
    tty: bool,
) -> Result<(), Error>
where
    T: Service,
    C: Clock,
    W: Write,
{
    let blog = Blog::fetch_with_service(config.site()?, service).await?;
    if !blog.has_posts() {
        info!("{} has no published posts", blog.site());
    }
    debug!("fetched {} posts from {}", blog.posts().len(), blog.site());

    let analysis = Analysis::new(blog.into_posts(), config.top());
    let destination = config.destination(clock);
    let opts = config.view_options(&destination, tty);
    let output = format!("{}\n", report::render(&analysis, config.format(), &opts)?);

    match destination {
        Destination::Stdout => out.write_all(output.as_bytes()).map_err(Error::Output)?,
        Destination::File(path) => {
            fs::write(&path, &output).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!("wrote {} bytes to {}", output.len(), path.display());
            writeln!(out, "Report written to {}", path.display()).map_err(Error::Output)?;
        }
    }

    Ok(())
}

/// Reasons the program can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The blog URL is not an absolute http(s) URL.
    #[error("Invalid blog URL: {0}")]
    InvalidUrl(String),

    /// The blog's posts could not be retrieved.
    #[error("Could not fetch posts: {0}")]
    Fetch(#[from] wordpress::client::Error),

    /// The report could not be rendered.
    #[error(transparent)]
    Render(#[from] report::Error),

    /// The report could not be saved.
    #[error("Could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The report could not be printed.
    #[error("Could not print report: {0}")]
    Output(#[source] io::Error),
}
