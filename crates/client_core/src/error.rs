use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumOperation {
    Load,
    Create,
    Update,
    Delete,
}

impl AlbumOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load_albums",
            Self::Create => "create_album",
            Self::Update => "update_album",
            Self::Delete => "delete_album",
        }
    }
}

impl fmt::Display for AlbumOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse failure buckets used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Transport,
    Status,
    Decode,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Decode => "decode",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid api base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("{operation} transport failure: {source}")]
    Transport {
        operation: AlbumOperation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation} rejected by server with HTTP {status}")]
    Status {
        operation: AlbumOperation,
        status: StatusCode,
    },
    #[error("{operation} request body could not be encoded: {source}")]
    Encode {
        operation: AlbumOperation,
        #[source]
        source: serde_json::Error,
    },
    #[error("{operation} response was not valid JSON: {source}")]
    Decode {
        operation: AlbumOperation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBaseUrl { .. } | Self::ClientBuild(_) | Self::Encode { .. } => {
                ErrorCategory::Config
            }
            Self::Transport { .. } => ErrorCategory::Transport,
            Self::Status { .. } => ErrorCategory::Status,
            Self::Decode { .. } => ErrorCategory::Decode,
        }
    }

    pub fn operation(&self) -> Option<AlbumOperation> {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            Self::InvalidBaseUrl { .. } | Self::ClientBuild(_) => None,
        }
    }
}
