use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{json, Value};
use strum_macros::AsRefStr;

use super::routes::{ExploreError, SubscribeError};
use crate::database;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe error: {0}")]
    Subscribe(#[from] SubscribeError),
    #[error("explore error: {0}")]
    Explore(#[from] ExploreError),

    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Subscribe(SubscribeError::DataParsing(_)) => {
                (StatusCode::BAD_REQUEST, InvalidInput)
            }
            Error::Subscribe(SubscribeError::Database(database::Error::DuplicateSubscriber)) => {
                (StatusCode::BAD_REQUEST, DuplicateSubscriber)
            }
            Error::Subscribe(er) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                InternalError {
                    details: er.details(),
                },
            ),
            Error::Explore(_) => (StatusCode::INTERNAL_SERVER_ERROR, ProcessingFailure),
            Error::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                InternalError {
                    details: self.to_string(),
                },
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error kinds a client gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, AsRefStr)]
pub enum ClientError {
    InvalidInput,
    DuplicateSubscriber,
    ProcessingFailure,
    InternalError { details: String },
}

impl ClientError {
    /// The JSON body sent to the client for this error.
    pub fn body(&self) -> Value {
        match self {
            ClientError::InvalidInput => json!({ "error": "Invalid email address" }),
            ClientError::DuplicateSubscriber => json!({ "error": "Email already subscribed" }),
            ClientError::ProcessingFailure => json!({
                "success": false,
                "error": "Failed to process algorithm",
            }),
            ClientError::InternalError { details } => json!({
                "error": "Internal server error",
                "details": details,
            }),
        }
    }
}
