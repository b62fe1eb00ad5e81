//! Command-line interface for octoql.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the two most recent closed issues of a repository
//! octoql repo-issues pydantic FastUI
//!
//! # Same query over the asynchronous transport
//! octoql --transport async repo-issues rust-lang rust --last 5 --state open
//!
//! # List marketplace categories, skipping empty ones
//! octoql marketplace --exclude-empty
//! ```
//!
//! The token is read from `GITHUB_TOKEN` unless `--token` is given; the
//! endpoint falls back to `GITHUB_GRAPHQL_ENDPOINT` and then to the public
//! GitHub GraphQL API.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use octoql::queries::{IssueState, marketplace_categories, repository_issues};
use octoql::{
    AsyncHttpTransport, CheckedTransport, Client, ClientError, Credentials, DEFAULT_ENDPOINT,
    ENDPOINT_ENV_VAR, HttpTransport, Runner, TOKEN_ENV_VAR,
};

#[derive(Parser, Debug)]
#[command(name = "octoql")]
#[command(author, version, about = "Run GitHub GraphQL queries from the command line", long_about = None)]
struct Cli {
    /// GraphQL endpoint URL (defaults to GITHUB_GRAPHQL_ENDPOINT, then the public API)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// API token (defaults to GITHUB_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value_t = 1000)]
    timeout_ms: u64,

    /// Transport used to reach the endpoint
    #[arg(long, global = true, value_enum, default_value = "blocking")]
    transport: TransportFlavor,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TransportFlavor {
    /// One blocking HTTP session per call
    Blocking,
    /// Asynchronous HTTP driven on a per-call runtime
    Async,
    /// Blocking HTTP that validates each document before sending it
    Checked,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IssueStateArg {
    Open,
    Closed,
}

impl From<IssueStateArg> for IssueState {
    fn from(state: IssueStateArg) -> Self {
        match state {
            IssueStateArg::Open => IssueState::Open,
            IssueStateArg::Closed => IssueState::Closed,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the most recent issues of a repository
    RepoIssues {
        /// Repository owner login
        owner: String,

        /// Repository name
        name: String,

        /// How many issues to fetch, counted from the most recent
        #[arg(long, default_value_t = 2)]
        last: u32,

        /// Issue states to include (repeatable)
        #[arg(long, value_enum, default_value = "closed")]
        state: Vec<IssueStateArg>,
    },

    /// List marketplace categories
    Marketplace {
        /// Drop categories that have no listings
        #[arg(long)]
        exclude_empty: bool,

        /// Drop subcategories from the listing
        #[arg(long)]
        exclude_subcategories: bool,

        /// Restrict the listing to the named categories (repeatable)
        #[arg(long = "include")]
        include: Vec<String>,
    },
}

fn credentials(cli: &Cli) -> Result<Credentials, ClientError> {
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let token = match cli
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV_VAR).ok())
    {
        Some(token) => token,
        None => return Err(ClientError::MissingToken),
    };

    Ok(Credentials::new(endpoint, token)?.timeout(Duration::from_millis(cli.timeout_ms)))
}

fn build_client(flavor: TransportFlavor, credentials: Credentials) -> Client {
    match flavor {
        TransportFlavor::Blocking => Client::blocking(HttpTransport::new(credentials)),
        TransportFlavor::Async => Client::nonblocking(AsyncHttpTransport::new(credentials)),
        TransportFlavor::Checked => {
            Client::blocking(CheckedTransport::new(HttpTransport::new(credentials)))
        }
    }
}

fn run(cli: Cli) -> Result<(), ClientError> {
    let credentials = credentials(&cli)?;
    let mut runner = Runner::new(build_client(cli.transport, credentials));

    let (query, variables) = match cli.command {
        Command::RepoIssues {
            owner,
            name,
            last,
            state,
        } => {
            let states: Vec<IssueState> = state.into_iter().map(IssueState::from).collect();
            repository_issues(&owner, &name, last, &states)
        }
        Command::Marketplace {
            exclude_empty,
            exclude_subcategories,
            include,
        } => marketplace_categories(exclude_empty, exclude_subcategories, &include),
    };

    let data = runner.execute(query, variables)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("octoql=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repo_issues_defaults() {
        let cli = Cli::parse_from(["octoql", "repo-issues", "pydantic", "FastUI"]);
        match cli.command {
            Command::RepoIssues { last, state, .. } => {
                assert_eq!(last, 2);
                assert!(matches!(state.as_slice(), [IssueStateArg::Closed]));
            }
            _ => panic!("expected repo-issues"),
        }
    }

    #[test]
    fn test_transport_flag_is_global() {
        let cli = Cli::parse_from(["octoql", "marketplace", "--transport", "async"]);
        assert!(matches!(cli.transport, TransportFlavor::Async));
    }
}
