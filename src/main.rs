//! CLI entry point for the eml-export tool.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use eml_export_core::{DiskSaver, EmlExporter, EsnClient};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let Some(base_url) = args.resolve_base_url() else {
        bail!("no backend base URL: pass --base-url or set ESN_BASE_URL");
    };

    let mut client = EsnClient::new(&base_url)
        .with_context(|| format!("invalid backend base URL: {base_url}"))?;
    if let Some(username) = &args.username {
        let password = args.resolve_password().unwrap_or_default();
        client = client.with_basic_auth(username, password);
    }

    let exporter = EmlExporter::builder()
        .esn_api_client(client)
        .save_as(Arc::new(DiskSaver::new(&args.output_dir)))
        .build()?;

    info!(
        domain_id = %args.domain_id,
        mail_repository = %args.mail_repository,
        mail_key = %args.mail_key,
        "downloading eml"
    );

    let saved = exporter
        .download_eml_file_from_mail_repository(
            &args.domain_id,
            &args.mail_repository,
            &args.mail_key,
        )
        .await?;

    info!(path = %saved.display(), "eml saved");

    Ok(())
}
