use std::fmt;

use crate::{Genre, Movie};

pub type RequestId = u64;

/// Normalized outcome of one `fetch_catalog` call.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    /// List query. Missing `results` or `total_pages` fields surface as `None`.
    List {
        items: Option<Vec<Movie>>,
        categories: Vec<Genre>,
        total_pages: Option<u32>,
    },
    /// Single-item lookup.
    Single { item: Movie, categories: Vec<Genre> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    CatalogFetched {
        request_id: RequestId,
        result: Result<CatalogResponse, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
