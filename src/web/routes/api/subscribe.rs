use axum::{body::Bytes, extract::State, Json};
use serde_json::{error::Category, Value};

use crate::{
    database,
    web::{
        types::{DataParsingError, DeserSubscriber, SubscribeResponse, SubscriberEmail},
        WebResult,
    },
    AppState,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] database::Error),
}

impl SubscribeError {
    /// The message of the underlying failure, forwarded to the client on a `500`.
    pub fn details(&self) -> String {
        match self {
            SubscribeError::MalformedBody(er) => er.to_string(),
            SubscribeError::Database(database::Error::Sqlx(er)) => er.to_string(),
            other => other.to_string(),
        }
    }
}

// ###################################
// ->   API
// ###################################
/// Registers a new newsletter subscriber.
///
/// The body is read raw so that a JSON value of the wrong shape is rejected as invalid input
/// (`400`) while a body that isn't JSON at all ends up as an internal error (`500`).
#[tracing::instrument(name = "Adding a new subscriber", skip_all)]
pub async fn subscribe(
    State(app_state): State<AppState>,
    body: Bytes,
) -> WebResult<Json<SubscribeResponse>> {
    let deser_sub = parse_body(&body)?;
    let email = SubscriberEmail::try_from(deser_sub).map_err(SubscribeError::from)?;

    let subscriber = app_state
        .database_mgr
        .insert_subscriber(&email)
        .await
        .map_err(SubscribeError::from)?;

    Ok(Json(SubscribeResponse::new(subscriber)))
}

/// Only a JSON object can carry an `email` field. Any other JSON value (`null`, arrays, strings)
/// is treated as a body without an email.
fn parse_body(body: &[u8]) -> Result<DeserSubscriber, SubscribeError> {
    let value: Value = serde_json::from_slice(body).map_err(SubscribeError::MalformedBody)?;

    if !value.is_object() {
        return Err(DataParsingError::EmailMissing.into());
    }

    serde_json::from_value(value).map_err(|er| match er.classify() {
        // e.g. `{"email": 42}`
        Category::Data => DataParsingError::EmailInvalid.into(),
        Category::Syntax | Category::Eof | Category::Io => SubscribeError::MalformedBody(er),
    })
}
