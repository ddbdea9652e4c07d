use axum::{body::Bytes, Json};
use rand::Rng;
use tracing::info;

use crate::web::{
    types::{ExploreData, ExploreResponse, NewsSample, Sentiment},
    WebResult,
};

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

// ###################################
// ->   DATA
// ###################################
/// Canned results of the "analysis". Nothing is computed, one of these is picked at random.
pub const NEWS_SAMPLES: [NewsSample; 3] = [
    NewsSample {
        news_text: "New crypto ETF launched by Grayscale",
        sentiment: Sentiment::Positive,
    },
    NewsSample {
        news_text: "Markets under pressure again with new home sales expectations data",
        sentiment: Sentiment::Negative,
    },
    NewsSample {
        news_text: "Meme coins daily update",
        sentiment: Sentiment::Neutral,
    },
];

pub const EXECUTION_TIME: &str = "0.5s";

// ###################################
// ->   API
// ###################################
/// Mock sentiment analysis.
///
/// The body must be well-formed JSON of any shape, it is parsed and then discarded.
#[tracing::instrument(name = "Exploring the algorithm", skip_all)]
pub async fn explore(body: Bytes) -> WebResult<Json<ExploreResponse>> {
    serde_json::from_slice::<serde_json::Value>(&body).map_err(ExploreError::MalformedBody)?;

    let sample = pick_sample(&mut rand::rng());
    info!(sentiment = sample.sentiment.as_ref(), "picked a canned result");

    Ok(Json(ExploreResponse {
        success: true,
        data: ExploreData {
            news_text: sample.news_text,
            sentiment: sample.sentiment,
            execution_time: EXECUTION_TIME,
        },
    }))
}

/// Picks one of `NEWS_SAMPLES` with a uniformly distributed index.
pub fn pick_sample<R: Rng + ?Sized>(rng: &mut R) -> &'static NewsSample {
    &NEWS_SAMPLES[rng.random_range(0..NEWS_SAMPLES.len())]
}
