use thiserror::Error;

/// Failures while taking in the hook payload. Both are absorbed by the
/// runner, which allows the command anyway.
#[derive(Debug, Error)]
pub enum GatekeeperError {
    #[error("Failed to read hook input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GatekeeperError>;
