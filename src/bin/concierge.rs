//! Command-line client for the SecureInfo Concierge API.
//!
//! Runs the same login, dashboard, query and logout flows as the web
//! frontend, keeping the session token in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! # Log in (prompts for missing values)
//! cargo run --bin concierge -- login --username jdoe
//!
//! # Show who the stored session belongs to
//! cargo run --bin concierge -- whoami
//!
//! # Ask a question
//! cargo run --bin concierge -- query "What is my checking balance?"
//!
//! # End the session
//! cargo run --bin concierge -- logout
//! ```
//!
//! # Environment Variables
//!
//! - `BACKEND_URL`: backend base URL (default: `http://127.0.0.1:8000`)
//! - `CONCIERGE_SESSION_FILE`: session file location
//!   (default: `<config dir>/secureinfo-concierge/session.json`)
//! - `BACKEND_TIMEOUT_SECS`: per-request timeout (default: none)

use secureinfo_concierge::application::flows::{
    GUEST_NAME, Navigation, PROCESSING_MESSAGE, SessionControl, load_dashboard, logout,
    submit_login, submit_query,
};
use secureinfo_concierge::domain::entities::{Credentials, QueryRequest};
use secureinfo_concierge::domain::ports::SessionStore;
use secureinfo_concierge::infrastructure::http::HttpBackend;
use secureinfo_concierge::infrastructure::session::FileSessionStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// CLI client for SecureInfo Concierge.
#[derive(Parser)]
#[command(name = "concierge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "BACKEND_URL", default_value = "http://127.0.0.1:8000")]
    backend_url: String,

    /// Session file holding the bearer token
    #[arg(long, env = "CONCIERGE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Per-request timeout in seconds (at least 1)
    #[arg(long, env = "BACKEND_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Session and query commands.
#[derive(Subcommand)]
enum Commands {
    /// Exchange credentials for a session token
    Login {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted without echo when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the user behind the stored session
    Whoami,

    /// Submit a query and print the answer
    Query {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Remove the stored session token
    Logout,

    /// Show where the session is stored and whether a token is present
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session_path = match cli.session_file {
        Some(path) => path,
        None => FileSessionStore::default_path()
            .context("No config directory found; pass --session-file")?,
    };
    let session = FileSessionStore::new(session_path);

    let base_url = Url::parse(&cli.backend_url)
        .with_context(|| format!("Invalid backend URL '{}'", cli.backend_url))?;
    let backend = HttpBackend::new(base_url, cli.timeout.map(Duration::from_secs))
        .context("Failed to create backend client")?;

    match cli.command {
        Commands::Login { username, password } => {
            handle_login(&backend, &session, username, password).await?
        }
        Commands::Whoami => handle_whoami(&backend, &session).await,
        Commands::Query { text } => handle_query(&backend, &session, text.join(" ")).await?,
        Commands::Logout => handle_logout(&session)?,
        Commands::Status => handle_status(&session),
    }

    Ok(())
}

/// Prompts for missing credentials and runs the login flow.
async fn handle_login(
    backend: &HttpBackend,
    session: &FileSessionStore,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    println!("{}", "🔐 Login".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    submit_login(backend, session, &Credentials::new(username, password))
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {}", e.user_message()))?;

    println!("{}", "✅ Logged in".green().bold());
    println!(
        "  Session saved to {}",
        session.path().display().to_string().bright_black()
    );

    Ok(())
}

/// Loads the dashboard header and prints the greeting.
async fn handle_whoami(backend: &HttpBackend, session: &FileSessionStore) {
    let view = load_dashboard(backend, session).await;

    match (&view.user, view.control) {
        (Some(user), _) => {
            println!("👤 {}", view.greeting.cyan().bold());
            println!("  Username: {}", user.username.bright_white());
        }
        (None, SessionControl::Logout) => {
            println!("👤 {}", GUEST_NAME.yellow());
            println!(
                "  {}",
                "Session present but the profile could not be loaded".bright_black()
            );
        }
        (None, SessionControl::Login) => {
            println!("👤 {}", GUEST_NAME.yellow());
            println!(
                "  Log in with: {} concierge login",
                "cargo run --bin".bright_cyan()
            );
        }
    }
}

/// Submits a query and prints the plain-text answer.
async fn handle_query(
    backend: &HttpBackend,
    session: &FileSessionStore,
    query: String,
) -> Result<()> {
    println!("{}", PROCESSING_MESSAGE.bright_black());

    match submit_query(backend, session, &QueryRequest::new(query)).await {
        Ok(answer) => {
            println!();
            println!("{}", answer.response);
            Ok(())
        }
        Err(e) => {
            if e.session_expired() {
                println!(
                    "{}",
                    "⚠️  Session expired. Log in again to continue.".yellow()
                );
            }
            anyhow::bail!("Query failed: {}", e.user_message())
        }
    }
}

/// Removes the stored token.
fn handle_logout(session: &FileSessionStore) -> Result<()> {
    match logout(session).context("Failed to remove session")? {
        Navigation::Home => println!("{}", "✅ Logged out".green().bold()),
        Navigation::Login => println!("{}", "⚠️  No active session".yellow()),
    }
    Ok(())
}

/// Prints the session file location and token state without contacting the backend.
fn handle_status(session: &FileSessionStore) {
    println!("{}", "📋 Session".bright_blue().bold());
    println!();
    println!(
        "  File:    {}",
        session.path().display().to_string().bright_black()
    );

    match (session.get_token(), session.saved_at()) {
        (Some(_), Some(saved_at)) => {
            println!("  Status:  {}", "ACTIVE".green());
            println!(
                "  Saved:   {}",
                saved_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
            );
        }
        _ => println!("  Status:  {}", "NONE".red()),
    }
    println!();
}
