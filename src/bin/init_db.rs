use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use moodlog_api::config::Config;
use moodlog_api::db::schema;

/// Create the mood journal database and `moods` table.
#[derive(Parser, Debug)]
#[command(name = "init-db")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run this SQL file instead of the built-in schema
    #[arg(long)]
    schema: Option<PathBuf>,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let sql = schema::load_schema(cli.schema.as_deref())?;

    tracing::info!(database = %config.database.name, "Running schema");
    let report = schema::initialize(&config.database, &sql).await?;
    tracing::info!(
        database_created = report.database_created,
        "Database and table created successfully"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=info,init_db=info".into()),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Error initializing database");
            ExitCode::FAILURE
        }
    }
}
