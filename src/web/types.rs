//! Request and response bodies of the `web` module, the structs that need to be validated
//! and their parsing implementations.

use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

use crate::database::Subscriber;

// ###################################
// ->   SUBSCRIBE
// ###################################
/// Deserializable Subscriber
/// The body of a subscribe request, `email` can be missing or invalid.
#[derive(Debug, Deserialize)]
pub struct DeserSubscriber {
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<DeserSubscriber> for SubscriberEmail {
    type Error = DataParsingError;

    fn try_from(deser_sub: DeserSubscriber) -> Result<Self, Self::Error> {
        let email = deser_sub.email.ok_or(DataParsingError::EmailMissing)?;
        SubscriberEmail::parse(email)
    }
}

/// Validated Subscriber Email
///
/// The check is intentionally weak: any non-empty string containing an `@` is accepted.
#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SubscriberEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.is_empty() {
            return Err(DataParsingError::EmailMissing);
        }

        if !value.contains('@') {
            return Err(DataParsingError::EmailInvalid);
        }

        Ok(SubscriberEmail(value.to_owned()))
    }
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: &'static str,
    pub subscriber: Subscriber,
}

impl SubscribeResponse {
    pub fn new(subscriber: Subscriber) -> Self {
        Self {
            success: true,
            message: "Successfully subscribed",
            subscriber,
        }
    }
}

// ###################################
// ->   EXPLORE
// ###################################
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// A canned headline with its precomputed sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSample {
    pub news_text: &'static str,
    pub sentiment: Sentiment,
}

#[derive(Debug, Serialize)]
pub struct ExploreData {
    pub news_text: &'static str,
    pub sentiment: Sentiment,
    #[serde(rename = "executionTime")]
    pub execution_time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExploreResponse {
    pub success: bool,
    pub data: ExploreData,
}

// ###################################
// ->   LANDING PAGE
// ###################################
/// A card on the landing page, rendered by the `home.html` template.
#[derive(Debug, Serialize)]
pub struct FeatureCard {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("missing email")]
    EmailMissing,
    #[error("email invalid: missing '@'")]
    EmailInvalid,
}
