//! Error types for depviz.

use thiserror::Error;

/// Errors that can surface from the scanning and configuration layers.
///
/// Graph construction and layout never fail on any graph content; faults
/// there are defects, not expected outcomes.
#[derive(Debug, Error)]
pub enum DepvizError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, DepvizError>;
