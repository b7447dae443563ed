//! Calculator API trait and error type

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{CalculationRequest, ErrorKind};

/// Calculator API trait
///
/// Evaluates one binary operation. Implemented over HTTP by
/// [`CalculatorHttpClient`](crate::CalculatorHttpClient) and in-process by the
/// calculator module's local client.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Evaluate `request` and return the numeric result.
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, CalculatorError>;
}

/// Error type for Calculator operations
///
/// `Rejected` is a well-formed refusal by the service. Every other variant is
/// a transport failure: the service could not be reached or did not answer
/// with a usable body.
#[derive(thiserror::Error, Debug)]
pub enum CalculatorError {
    /// The service refused the calculation
    #[error("{message}")]
    Rejected { kind: ErrorKind, message: String },

    /// Network or connection failure
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No complete reply within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Reply with a status other than 200 or 400
    #[error("unexpected HTTP status {status}: {body_preview}")]
    UnexpectedStatus {
        status: http::StatusCode,
        body_preview: String,
    },

    /// Reply body could not be interpreted
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be encoded
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Service URL is unusable
    #[error("invalid service URL '{url}': {reason}")]
    InvalidUri { url: String, reason: String },
}

impl CalculatorError {
    /// The service-reported kind, if this is a rejection.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Rejected { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Build a rejection carrying the canonical message for `kind`.
    #[must_use]
    pub fn rejected(kind: ErrorKind) -> Self {
        Self::Rejected {
            kind,
            message: kind.message().to_owned(),
        }
    }
}
