use std::process::ExitCode;

use clap::{Parser, Subcommand};

use moodlog_api::client::{render::render, ApiClient, JournalPage, ListState, MOOD_OPTIONS};

/// Log moods and browse your mood history.
#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the mood journal API
    #[arg(long, env = "MOODLOG_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show recent moods, newest first
    List,

    /// Record how you're feeling
    Log {
        /// One of the suggested moods (see `moodlog options`), or anything else
        mood: String,

        /// Anything you want to remember about today
        #[arg(long)]
        note: Option<String>,
    },

    /// Print the suggested moods
    Options,

    /// Check that the API is up
    Health,
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let api = ApiClient::new(cli.api_url);

    match cli.command {
        Command::List => {
            let mut page = JournalPage::new();
            page.load(&api).await;
            println!("{}", render(&page));
            Ok(page.list_state() == ListState::Loaded)
        }
        Command::Log { mood, note } => {
            let mut page = JournalPage::new();
            page.load(&api).await;
            page.mood = mood;
            page.note = note.unwrap_or_default();
            let saved = page.submit(&api).await;
            println!("{}", render(&page));
            Ok(saved)
        }
        Command::Options => {
            for option in MOOD_OPTIONS {
                println!("{option}");
            }
            Ok(true)
        }
        Command::Health => {
            let health = api.health().await?;
            println!("{}", health.status);
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
