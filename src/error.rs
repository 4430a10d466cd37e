//! Error types for the Fantasy Premier League client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

/// Failure raised by a [`Transport`](crate::fpl::http::Transport) implementation.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("transport has been closed")]
    Closed,
}

impl TransportError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Closed => None,
        }
    }

    /// 401 and 403 both mean the session is missing or was rejected.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// One failed request inside a batch.
#[derive(Debug)]
pub struct BatchFailure {
    pub id: u32,
    pub error: FplError,
}

#[derive(Error, Debug)]
pub enum FplError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: u32 },

    #[error("Response does not match {shape}: {message}")]
    Schema { shape: &'static str, message: String },

    #[error("Failed to fetch {url}: {source}")]
    DataFetch {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Authentication required to access {url} (HTTP {status})")]
    AuthenticationRequired { url: String, status: u16 },

    #[error("Batch request failed for id(s) {}", failed_ids(.failures))]
    BatchPartialFailure { failures: Vec<BatchFailure> },
}

fn failed_ids(failures: &[BatchFailure]) -> String {
    failures
        .iter()
        .map(|f| f.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FplError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        FplError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn schema(shape: &'static str, message: impl Into<String>) -> Self {
        FplError::Schema {
            shape,
            message: message.into(),
        }
    }

    /// Wrap a transport failure, promoting auth rejections to `AuthenticationRequired`.
    pub fn from_transport(url: impl Into<String>, source: TransportError) -> Self {
        let url = url.into();
        match source.status() {
            Some(status @ (401 | 403)) => FplError::AuthenticationRequired { url, status },
            _ => FplError::DataFetch { url, source },
        }
    }

    /// True for transport failures, including the authentication case.
    pub fn is_data_fetch(&self) -> bool {
        matches!(
            self,
            FplError::DataFetch { .. } | FplError::AuthenticationRequired { .. }
        )
    }

    /// Ids of the requests that failed, when this is a batch failure.
    pub fn failed_ids(&self) -> Vec<u32> {
        match self {
            FplError::BatchPartialFailure { failures } => failures.iter().map(|f| f.id).collect(),
            _ => Vec::new(),
        }
    }
}
