//! One-shot schema setup used by the `init-db` binary.
//!
//! The server never calls into this module; it expects the table to exist.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use sqlx::{Connection, Executor, PgConnection};

use crate::config::DatabaseConfig;

/// The built-in schema. Every statement is create-if-absent.
pub const SCHEMA_SQL: &str = include_str!("../../migrations/0001_create_moods.sql");

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid database name {0:?}: only ASCII letters, digits and underscores are allowed")]
    InvalidDatabaseName(String),

    #[error("failed to read schema file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub database_created: bool,
}

/// Returns the schema file contents, or [`SCHEMA_SQL`] when no path is given.
pub fn load_schema(path: Option<&Path>) -> Result<Cow<'static, str>, SchemaError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|source| SchemaError::Read {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(Cow::Borrowed(SCHEMA_SQL)),
    }
}

/// `CREATE DATABASE` cannot take a bind parameter, so the name is restricted
/// to characters that are safe to quote verbatim.
pub fn validate_database_name(name: &str) -> Result<(), SchemaError> {
    let valid = !name.is_empty()
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidDatabaseName(name.to_string()))
    }
}

/// Creates the configured database if it is missing. Returns whether it was created.
pub async fn ensure_database(config: &DatabaseConfig) -> Result<bool, SchemaError> {
    validate_database_name(&config.name)?;

    let mut conn = PgConnection::connect_with(&config.admin_connect_options()?).await?;

    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)",
    )
    .bind(&config.name)
    .fetch_one(&mut conn)
    .await?;

    if !exists {
        let statement = format!(r#"CREATE DATABASE "{}""#, config.name);
        conn.execute(statement.as_str()).await?;
        tracing::info!(database = %config.name, "Database created");
    } else {
        tracing::debug!(database = %config.name, "Database already exists");
    }

    conn.close().await?;
    Ok(!exists)
}

/// Runs the schema text as a single simple-protocol batch, so it may hold
/// several statements.
pub async fn apply_schema(conn: &mut PgConnection, sql: &str) -> Result<(), SchemaError> {
    conn.execute(sql).await?;
    Ok(())
}

pub async fn initialize(config: &DatabaseConfig, sql: &str) -> Result<InitReport, SchemaError> {
    let database_created = ensure_database(config).await?;

    let mut conn = PgConnection::connect_with(&config.connect_options()?).await?;
    tracing::info!(database = %config.name, "Applying schema");
    apply_schema(&mut conn, sql).await?;
    conn.close().await?;

    Ok(InitReport { database_created })
}
