use anyhow::Context as _;
use axum::{extract::State, response::Html};
use tera::Context;

use crate::{
    web::{types::FeatureCard, WebResult},
    AppState,
};

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        emoji: "🤖",
        title: "AI-Powered Analysis",
        description: "Advanced machine learning algorithms analyze news sentiment in real-time, \
                      providing accurate market mood indicators",
    },
    FeatureCard {
        emoji: "📊",
        title: "Data Aggregation",
        description: "Continuous scraping and processing of crypto news from thousands of \
                      trusted sources worldwide",
    },
    FeatureCard {
        emoji: "📈",
        title: "Trading Insights",
        description: "Transform sentiment data into actionable trading signals with our \
                      proprietary scoring system",
    },
];

#[tracing::instrument(name = "Rendering the landing page", skip_all)]
pub async fn home(State(app_state): State<AppState>) -> WebResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("features", &FEATURES);

    let body = app_state
        .templ_mgr
        .render_html_to_string(&ctx, "home.html")
        .context("tera failed to render 'html/home.html' template")?;

    Ok(Html(body))
}
