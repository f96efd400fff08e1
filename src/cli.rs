// CLI layer: argument definitions and the sequential upload driver. The
// driver is deliberately strict about ordering: files are uploaded one at a
// time, the first failure aborts the whole batch, and no URL is reported
// unless every file succeeded.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::api::ApiClient;

/// Upload files to an image host and print their public URLs.
#[derive(Parser, Debug)]
#[command(name = "picbed-cli", version, about)]
pub struct Cli {
    /// Base URL of the image host, e.g. https://img.example.com
    #[arg(short = 's', long = "server")]
    pub server: String,

    /// Upload token, sent as the `token` header
    #[arg(short = 't', long = "token")]
    pub token: String,

    /// Files to upload, in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Upload every file in `cli.files` and return their public URLs in the
/// same order. Stops at the first error; files after the failing one are
/// never attempted and nothing collected so far is returned.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let api = ApiClient::new(&cli.server, &cli.token).context("Failed to build HTTP client")?;

    let mut urls = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        // indicatif spinner on stderr keeps stdout clean for the URL list.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message(format!("Uploading {}", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = api.upload(path);
        spinner.finish_and_clear();

        let url = result?;
        info!("Uploaded {} -> {}", path.display(), url);
        urls.push(url);
    }
    Ok(urls)
}
