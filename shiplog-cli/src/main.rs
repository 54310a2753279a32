//! Shiplog CLI - changelog fragment generator
//!
//! Walks the commits between two revisions of a local repository, collects
//! the `#123` issue references from their messages, fetches each issue from
//! GitHub, and prints a markdown list of what shipped.

mod prompt;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shiplog_core::{parse_remote_url, GitRepo};
use shiplog_github::{fetch_issues, format_issues, GitHubClient};

use prompt::Prompt;

/// Generate a markdown changelog fragment from the issues referenced
/// between two git refs
#[derive(Parser, Debug)]
#[command(name = "shiplog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository owner (inferred from the 'origin' remote if omitted)
    #[arg(short, long)]
    owner: Option<String>,

    /// Repository name (inferred from the 'origin' remote if omitted)
    #[arg(short, long)]
    repo: Option<String>,

    /// GitHub API token
    #[arg(short, long, env = "GITHUB_TOKEN")]
    token: String,

    /// Path to the local repository
    #[arg(short, long, default_value = ".")]
    path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // All logging goes to stderr; stdout is reserved for the final list.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&cli).await
}

/// The whole pipeline, one linear pass
///
/// Handled errors are logged and end the run early; the process still exits
/// with status 0. The error text on stderr is the only failure signal.
async fn run(cli: &Cli) -> anyhow::Result<()> {
    let repo = match GitRepo::open(&cli.path) {
        Ok(repo) => repo,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };

    let (owner, repo_name) = match repository_identity(cli, &repo) {
        Ok(identity) => identity,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };

    let Some(start_spec) = read_ref("Start ref: ") else {
        return Ok(());
    };
    let Some(end_spec) = read_ref("End ref: ") else {
        return Ok(());
    };

    let start = match repo.resolve(&start_spec) {
        Ok(oid) => oid,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };
    let end = match repo.resolve(&end_spec) {
        Ok(oid) => oid,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };

    let numbers = match repo.issue_numbers_in_range(start, end) {
        Ok(numbers) => numbers,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };

    info!("found {} issues...", numbers.len());

    let client = match GitHubClient::new(owner, repo_name, &cli.token) {
        Ok(client) => client,
        Err(err) => {
            error!(%err);
            return Ok(());
        }
    };

    match fetch_issues(&client, &numbers).await {
        Ok(issues) => println!("{}", format_issues(&issues)),
        Err(err) => error!(%err),
    }

    Ok(())
}

/// Determine owner/repo from flags, falling back to the 'origin' remote
fn repository_identity(cli: &Cli, repo: &GitRepo) -> shiplog_core::Result<(String, String)> {
    if let (Some(owner), Some(name)) = (&cli.owner, &cli.repo) {
        return Ok((owner.clone(), name.clone()));
    }

    let remote = repo.default_remote()?;
    parse_remote_url(&remote.url)
}

/// Prompt for a revision spec; `None` ends the run quietly
///
/// Covers both the user aborting the prompt and a terminal read failure;
/// the latter is logged first.
fn read_ref(text: &str) -> Option<String> {
    match prompt::read_line(text) {
        Ok(Prompt::Line(line)) => Some(line),
        Ok(Prompt::Aborted) => None,
        Err(err) => {
            error!(%err);
            None
        }
    }
}
