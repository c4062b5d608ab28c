//! # Helpdesk Chat
//!
//! Entry point for the helpdesk chat widget server. A visitor's question is
//! combined with a static knowledge base into a prompt for Gemini, and the
//! markdown-like reply is converted to HTML for the chat bubble.
//!
//! ## Modes
//! - Server (default, or `serve`)
//! - Single question with `-p`
//! - Offline formatting with `format`

mod cli;
mod core;
mod run;
mod server;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use crate::cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let mut args = Args::parse();
    run::init_logger(&args);

    let (bind, knowledge) = match args.command.take() {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Format { file }) => return run::run_format(file.as_deref()),
        Some(Commands::Config) => {
            run::show_config();
            return Ok(());
        }
        Some(Commands::Serve { bind, knowledge }) => (bind, knowledge),
        None => (None, None),
    };

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(question) = args.prompt.as_deref() {
        return run::run_single_prompt(&args, &config, question).await;
    }

    run::run_server(config, bind, knowledge).await
}
