use thiserror::Error;

use super::{CatalogError, RecommendError};

/// Top-level failure of a command; every variant maps to a process exit code.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("catalog load failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl CliError {
    // 0: success
    // 11: config error
    // 12: catalog load failure (startup-fatal)
    // 13: invalid requirement
    // 14: every candidate excluded by budget
    // 20: io / command error
    // 50: internal/uncategorized
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 11,
            CliError::Catalog(_) => 12,
            CliError::Recommend(RecommendError::InvalidRequirement(_)) => 13,
            CliError::Recommend(RecommendError::EmptyCatalog { .. }) => 14,
            CliError::Io(_) => 20,
            CliError::Command(_) => 20,
            CliError::Anyhow(_) => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 11);
        assert_eq!(CliError::Catalog(CatalogError::Empty).exit_code(), 12);
        assert_eq!(
            CliError::from(RecommendError::InvalidRequirement("bad".into())).exit_code(),
            13
        );
        assert_eq!(
            CliError::from(RecommendError::EmptyCatalog { budget: 1.0 }).exit_code(),
            14
        );
        let closed = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::from(closed).exit_code(), 20);
        assert_eq!(CliError::Command("x".into()).exit_code(), 20);
        assert_eq!(CliError::Anyhow(anyhow::anyhow!("boom")).exit_code(), 50);
    }
}
