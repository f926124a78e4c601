//! Caller-facing error taxonomy and the classifier that produces it.
//!
//! Every failure from validation, the backend client or the normalizer ends up
//! as exactly one [`LookingGlassError`] whose message names the caller's input.

use thiserror::Error;
use tracing::{error, warn};

use super::client::FetchError;
use super::normalize::NormalizeError;
use super::query::Query;

/// The closed set of errors a Looking Glass tool can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookingGlassError {
    /// Input rejected before any backend call.
    #[error("{0}")]
    InvalidInput(String),

    /// The backend has no data for the given identifiers.
    #[error("{0}")]
    NotFound(String),

    /// The backend rejected the parameters (HTTP 400).
    #[error("{0}")]
    BadRequest(String),

    /// Any other non-success HTTP status.
    #[error("{message}")]
    ServiceError { status: u16, message: String },

    /// The HTTP exchange could not be completed.
    #[error("{0}")]
    Transport(String),

    /// The backend answered successfully with an unusable payload.
    #[error("{0}")]
    Shape(String),

    #[error("{0}")]
    Unexpected(String),
}

impl LookingGlassError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::ServiceError { .. } => "service_error",
            Self::Transport(_) => "transport_error",
            Self::Shape(_) => "shape_error",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

/// A raw failure raised somewhere between the client and the normalizer.
#[derive(Debug)]
pub(crate) enum Failure {
    Fetch(FetchError),
    Normalize(NormalizeError),
}

/// Turn a raw failure into the caller-facing error for `query`.
pub(crate) fn classify(failure: Failure, query: &Query) -> LookingGlassError {
    let classified = match &failure {
        Failure::Fetch(FetchError::Status(404)) => LookingGlassError::NotFound(query.not_found_message()),
        Failure::Fetch(FetchError::Status(400)) => {
            LookingGlassError::BadRequest(query.bad_request_message())
        }
        Failure::Fetch(FetchError::Status(status)) => LookingGlassError::ServiceError {
            status: *status,
            message: format!(
                "API error ({}): Unable to retrieve {}.",
                status,
                query.describe()
            ),
        },
        Failure::Fetch(FetchError::Transport(_)) => LookingGlassError::Transport(format!(
            "Network error: Unable to connect to the looking glass service to retrieve {}. \
             Please check if the service is running.",
            query.describe()
        )),
        Failure::Fetch(FetchError::Decode(detail)) | Failure::Normalize(NormalizeError::Shape(detail)) => {
            LookingGlassError::Shape(format!(
                "Data format error: The response for {} is invalid. Details: {}",
                query.describe(),
                detail
            ))
        }
        Failure::Normalize(NormalizeError::Empty) => {
            LookingGlassError::NotFound(query.empty_message())
        }
        Failure::Fetch(FetchError::Request(_)) => LookingGlassError::Unexpected(format!(
            "Unexpected error while retrieving {}.",
            query.describe()
        )),
    };

    match &classified {
        LookingGlassError::Unexpected(_) => {
            error!(kind = classified.kind(), cause = ?failure, "Looking glass query failed")
        }
        _ => warn!(kind = classified.kind(), cause = ?failure, "Looking glass query failed"),
    }

    classified
}
