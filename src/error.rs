use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SetupError {
    #[error("NEON_DATABASE_URL not found in environment variables")]
    MissingDatabaseUrl,

    #[error("failed to read SQL script {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}
