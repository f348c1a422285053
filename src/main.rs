//! Task Tracker MCP Server - Main Entry Point
//!
//! This is the main entry point for the task tracker MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_mcp::TodoServerHandler;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Task Tracker MCP Server - personal tasks, categories and daily routines via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding tasks.toml and completions.toml
    data_dir: PathBuf,

    /// Reference date (YYYY-MM-DD) used instead of the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP transport, so logs go to stderr
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_dir = %args.data_dir.display(), today = ?args.today, "starting server");
    let handler = TodoServerHandler::new(&args.data_dir, args.today);

    let mut changes = handler.subscribe();
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(change) => debug!(?change, counts = change.affects_counts(), "state changed"),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "dropped change notifications"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    serve_stdio(handler).await?;
    Ok(())
}
