//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  helpdesk-chat                          Serve the chat widget on 127.0.0.1:5000
  helpdesk-chat serve --bind 0.0.0.0:8080 --knowledge data.json
  helpdesk-chat -p \"Which courses?\"      Ask once, print the HTML reply
  helpdesk-chat -p -                     Read the question from stdin
  helpdesk-chat format reply.md          Convert a reply to HTML without calling the API
  helpdesk-chat config                   Show configuration and API key status
  helpdesk-chat completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Helpdesk chat widget server backed by Gemini",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ask a single question then exit (without starting the server)
    #[arg(
        short = 'p',
        long,
        help = "Ask one question and print the formatted reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Print the model's reply as-is instead of HTML
    #[arg(long, help = "In prompt mode, print the unformatted reply")]
    pub raw: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the helpdesk HTTP server (default)
    Serve {
        /// Listen address (overrides HELPDESK_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Knowledge base JSON file (overrides HELPDESK_KNOWLEDGE_BASE)
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
    /// Convert markdown-like text to chat HTML (reads stdin when no file is given)
    Format {
        file: Option<PathBuf>,
    },
    /// Show resolved configuration and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, info, debug, or trace.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "trace"
        } else if self.verbose >= 1 {
            "debug"
        } else {
            "info"
        }
    }
}
