//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download an eml message from a backend mail repository and save it.
///
/// The message is fetched from the backend's mail subsystem by
/// (domain, repository, key) and written to the output directory as
/// `<MAIL_KEY>.eml`.
#[derive(Parser, Debug)]
#[command(name = "eml-export")]
#[command(author, version, about)]
pub struct Args {
    /// Domain identifier scoping the mail repository
    pub domain_id: String,

    /// Mail repository name within the domain
    pub mail_repository: String,

    /// Key of the message to download
    pub mail_key: String,

    /// Backend API base URL (falls back to the ESN_BASE_URL env var)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Basic-auth username for the backend
    #[arg(long)]
    pub username: Option<String>,

    /// Basic-auth password (falls back to the ESN_PASSWORD env var)
    #[arg(long)]
    pub password: Option<String>,

    /// Directory to save the eml file to
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Resolves the backend base URL: CLI flag first, then ESN_BASE_URL.
    #[must_use]
    pub fn resolve_base_url(&self) -> Option<String> {
        self.base_url.clone().or_else(|| non_empty_env("ESN_BASE_URL"))
    }

    /// Resolves the basic-auth password: CLI flag first, then ESN_PASSWORD.
    #[must_use]
    pub fn resolve_password(&self) -> Option<String> {
        self.password.clone().or_else(|| non_empty_env("ESN_PASSWORD"))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
