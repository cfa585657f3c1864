//! relnotes: draft release notes from the commits since the last release
//!
//! Reads its configuration from flags or the GitHub Actions environment,
//! walks the commit range over the GitHub API and prints the notes to stdout.

use anyhow::Context as _;
use clap::Parser;
use relnotes::config::Config;
use relnotes::notes::Notes;
use relnotes_github::{ApiClient, HttpTransport};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout is the notes body
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;
    let ctx = config.context()?;
    info!(repository = %ctx.repository(), sha = %ctx.sha(), "Drafting release notes");

    let transport = HttpTransport::new(config.timeout()).context("building HTTP client")?;
    let api = ApiClient::new(ctx, transport).with_pagination(config.pagination());

    let notes = Notes::collect(&api, config.base.as_deref(), config.pulls)
        .context("collecting commits")?;
    println!("{}", notes.render(config.format));

    Ok(())
}
