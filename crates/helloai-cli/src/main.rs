use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod app;

#[derive(Parser)]
#[command(name = "helloai")]
#[command(about = "Hello-World-AI - code snippets, Git help, docs search and AI answers")]
#[command(version)]
struct Cli {
    /// Route a single message and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Snippet file to use instead of the default data directory
    #[arg(long)]
    snippets: Option<PathBuf>,

    /// Completion model to use
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = helloai_core::Settings::load();

    if let Some(model) = cli.model {
        settings.completion.model = model;
    }
    if let Some(path) = cli.snippets {
        settings.storage.snippets_path = Some(path);
    }

    if settings.api_key().is_none() {
        tracing::warn!(
            "{} is not set; AI answers and code review will be unavailable",
            settings.completion.api_key_env
        );
    }

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt).await?;
    } else {
        app::run_repl(&settings).await?;
    }

    Ok(())
}
