mod command;
mod helper;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_subscriber::EnvFilter;

use emotive_application::{SessionFactory, SessionManager};
use emotive_core::InferenceCapability;
use emotive_core::secret::SecretService;
use emotive_infrastructure::{ConfigService, SecretServiceImpl};
use emotive_interaction::{AgentInference, GeminiApiAgent};

use command::Command;
use helper::CliHelper;

const LOG_ENV: &str = "EMOTIVE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn build_session_manager() -> Result<SessionManager> {
    let config = ConfigService::new().get_config();

    let secrets = SecretServiceImpl::new()
        .load_secrets()
        .await
        .context("Failed to load secrets")?;
    let gemini = secrets.gemini.ok_or_else(|| {
        anyhow!("No Gemini API key configured. Set GEMINI_API_KEY or add it to secret.json.")
    })?;

    let agent = GeminiApiAgent::from_config(&gemini, Some(config.model.name.as_str()))
        .map_err(|e| anyhow!("Failed to create Gemini agent: {}", e))?
        .with_json_output()
        .with_temperature(0.2);
    tracing::info!("[Bootstrap] Using model {}", agent.model());

    let inference: Arc<dyn InferenceCapability> = Arc::new(AgentInference::new(agent));
    Ok(SessionManager::new(SessionFactory::from_config(&config, inference)))
}

/// Entry point for the Emotive REPL.
///
/// Free text is analyzed for emotional tone; `/history` and `/trend` inspect
/// the bounded analysis history of the current session.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let manager = build_session_manager().await?;
    let session = manager.create_session().await;
    tracing::debug!("[Bootstrap] Session {} ready", session.id());

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Emotive ===".bright_magenta().bold());
    println!(
        "{}",
        "Type text to analyze, '/help' for commands, or '/quit' to exit.".bright_black()
    );
    println!();

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        match Command::parse(&line) {
            Command::Analyze(text) => match session.submit(&text).await {
                Ok(profile) => render::print_profile(&profile),
                Err(e) => eprintln!("{}", e.message().red()),
            },
            Command::History => {
                render::print_history(&session.snapshot().await, chrono::Utc::now());
            }
            Command::Trend => match session.summarize_trend().await {
                Ok(summary) => render::print_trend(&summary),
                Err(e) => eprintln!("{}", e.message().red()),
            },
            Command::Help => render::print_help(),
            Command::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
        }
    }

    manager.close(session.id()).await;
    Ok(())
}
