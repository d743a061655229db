//! Runtime configuration
//!
//! Everything is CLI-flag first with an environment-variable fallback
//! and a compiled default. The generation endpoint and model identifier
//! are configuration, not data: they are read once at startup and
//! frozen into the classification client.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for pmdash
#[derive(Parser, Debug)]
#[command(name = "pmdash")]
#[command(about = "Project management dashboard backend")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "PMDASH_PORT")]
    pub port: u16,

    /// Path to the SQLite database file (created if missing)
    #[arg(short, long, default_value = "pmdash.db", env = "PMDASH_DATABASE")]
    pub database: PathBuf,

    /// Generation endpoint used for KPI classification
    #[arg(
        long,
        default_value = "http://localhost:11434/api/generate",
        env = "PMDASH_GENERATE_URL"
    )]
    pub generate_url: String,

    /// Model identifier sent to the generation endpoint
    #[arg(long, default_value = "llama3", env = "PMDASH_MODEL")]
    pub model: String,
}
