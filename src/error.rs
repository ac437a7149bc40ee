use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("invalid game slug: {0}")]
    InvalidSlug(String),

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("Flashpoint request failed: {0}")]
    CatalogHttp(String),

    #[error("Flashpoint returned status {status}: {message}")]
    CatalogStatus { status: u16, message: String },

    #[error("Wayback request failed: {0}")]
    WaybackHttp(String),

    #[error("Wayback returned status {status}: {message}")]
    WaybackStatus { status: u16, message: String },

    #[error("direct download failed: {0}")]
    DirectHttp(String),

    #[error("direct download returned status {status}")]
    DirectStatus { status: u16 },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
