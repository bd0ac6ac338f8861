// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("unsupported pattern `{0}`: at most one `*` is allowed")]
    Pattern(String),

    #[error("failed to read module {}: {source}", path.display())]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid module metadata document: {source}", path.display())]
    ModuleFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("type `{name}` in module {module} could not be resolved: {reason}")]
    Unresolved {
        module: String,
        name: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
