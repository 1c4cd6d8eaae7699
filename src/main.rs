//! Daily Jot MCP Server - Main Entry Point
//!
//! This is the main entry point for the daily jot MCP server application.
//! The actual implementation is in the `daily_jot` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use daily_jot::{Config, JotServerHandler, logging};
use mcp_attr::server::serve_stdio;

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Config::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let config = Config::parse();
    logging::init_tracing(config.verbose)?;

    tracing::info!(file = %config.file.display(), "starting daily jot server");
    let handler = JotServerHandler::new(config)?;
    serve_stdio(handler).await?;
    Ok(())
}
