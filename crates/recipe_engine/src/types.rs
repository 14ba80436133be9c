use std::fmt;

use recipe_core::{LoadError, Recipe, RecipeStub, RequestId, SearchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatalogLoaded(Result<Vec<RecipeStub>, FetchError>),
    RecipeFetched {
        request_id: RequestId,
        result: Result<Recipe, FetchError>,
    },
    SearchInspected {
        search_id: SearchId,
        url: String,
        result: Result<Recipe, FetchError>,
    },
    SearchFinished {
        search_id: SearchId,
        cancelled: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    /// Raw `Content-Type` header, used to pick the text encoding.
    pub content_type: Option<String>,
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

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        let message = err.to_string();
        match err.category() {
            ErrorCategory::Network => LoadError::network(message),
            ErrorCategory::Parse => LoadError::parse(message),
        }
    }
}

/// The two failure families callers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Cancelled,
    Network,
    Decode,
    Parse,
}

impl FailureKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FailureKind::Decode | FailureKind::Parse => ErrorCategory::Parse,
            _ => ErrorCategory::Network,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
            FailureKind::Parse => write!(f, "parse error"),
        }
    }
}
