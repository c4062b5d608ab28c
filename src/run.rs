//! Application run modes: logger init, single prompt, format, config report, server.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::llm::{GeminiGenerator, Generator};
use crate::server::{self, AppState};

/// Signing secret used when HELPDESK_SECRET_KEY is unset. Development only.
const DEV_SECRET: &str = "helpdesk-development-secret-change-me";

/// Initialize env_logger. RUST_LOG takes precedence over the -v/-q flags.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Read `arg` as text, or stdin when it is `-`.
fn read_arg_or_stdin(arg: &str) -> io::Result<String> {
    if arg == "-" {
        io::read_to_string(io::stdin())
    } else {
        Ok(arg.to_string())
    }
}

/// Run single prompt mode: ask the model once, print the reply to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
    question: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let question = read_arg_or_stdin(question)?;
    let question = question.trim();
    if question.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let knowledge = core::knowledge::load(&config.knowledge_path);
    let prompt = core::prompt::build_prompt(&config.institute, &knowledge, question);
    let reply = GeminiGenerator::new(config).generate(&prompt).await?;

    let out = if args.raw {
        reply
    } else {
        core::format::format_reply(&reply)
    };
    writeln!(io::stdout(), "{}", out)?;
    Ok(())
}

/// Format a file (or stdin) and print the HTML.
pub fn run_format(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => io::read_to_string(io::stdin())?,
    };
    writeln!(io::stdout(), "{}", core::format::format_reply(text.trim()))?;
    Ok(())
}

/// Print resolved configuration without requiring an API key.
pub fn show_config() {
    let bind = core::config::bind_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|e| format!("invalid ({})", e));
    let knowledge = core::config::knowledge_path();
    let config_dir = core::paths::config_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(unavailable)".to_string());

    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("Model:          {}", core::config::model_id());
    println!("Bind address:   {}", bind);
    println!(
        "Knowledge base: {}{}",
        knowledge.display(),
        if knowledge.exists() { "" } else { " (not found)" }
    );
    println!("Config dir:     {}", config_dir);
    println!(
        "API key:        {}",
        if core::config::has_api_key() {
            "set"
        } else {
            "not set (GEMINI_API_KEY)"
        }
    );
}

/// Load the knowledge base and serve until Ctrl-C. CLI flags override the config.
pub async fn run_server(
    mut config: Config,
    bind: Option<String>,
    knowledge: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(addr) = bind {
        config.bind = core::config::parse_bind(&addr)?;
    }
    if let Some(path) = knowledge {
        config.knowledge_path = path;
    }

    let secret = config.secret_key.clone().unwrap_or_else(|| {
        log::warn!("HELPDESK_SECRET_KEY is not set; using the development secret");
        DEV_SECRET.to_string()
    });
    let knowledge = core::knowledge::load(&config.knowledge_path);
    if knowledge.is_empty() {
        log::warn!("Knowledge base is empty; the helpdesk will not have institute information");
    }

    log::info!(
        "{} {} using model {}",
        core::app::NAME,
        core::app::VERSION,
        config.model_id
    );
    let state = AppState::new(
        Arc::new(GeminiGenerator::new(&config)),
        knowledge,
        &config.institute,
        &secret,
    );
    server::serve(config.bind, state).await?;
    Ok(())
}
