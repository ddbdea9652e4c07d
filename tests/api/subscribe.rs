use anyhow::Result;
use fake::{faker::internet::en::SafeEmail, Fake};
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::TestApp;

#[tokio::test]
async fn api_subscribe_ok() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email: String = SafeEmail().fake();

    let res = app.post_subscribe(&json!({ "email": email })).await?;

    assert_eq!(
        res.status(),
        StatusCode::OK,
        "Wrong response StatusCode: {}",
        res.status()
    );

    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully subscribed");
    assert_eq!(body["subscriber"]["email"], email.as_str());
    assert!(body["subscriber"]["id"].is_string(), "Missing subscriber id");
    assert!(
        body["subscriber"]["createdAt"].is_string(),
        "Missing subscriber createdAt"
    );

    assert_eq!(app.subscriber_emails().await?, vec![email]);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_stores_email_verbatim() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_subscribe(&json!({ "email": " Ursula@Domain.com " }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(app.subscriber_emails().await?, vec![" Ursula@Domain.com "]);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_duplicate_400() -> Result<()> {
    let app = TestApp::spawn().await?;
    let request = json!({ "email": "john.doe@example.com" });

    let first = app.post_subscribe(&request).await?;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.post_subscribe(&request).await?;
    assert_eq!(
        second.status(),
        StatusCode::BAD_REQUEST,
        "Wrong response StatusCode: {}",
        second.status()
    );
    let body: Value = second.json().await?;
    assert_eq!(body, json!({ "error": "Email already subscribed" }));

    assert_eq!(app.subscriber_emails().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_invalid_email_400() -> Result<()> {
    let app = TestApp::spawn().await?;

    let tests = [
        (json!({ "email": "not-an-email" }), "Missing @"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "name": "John Doe" }), "Missing email"),
        (json!({ "email": null }), "Null email"),
        (json!({ "email": 42 }), "Number email"),
        (json!({}), "Empty json"),
        (json!(null), "Null body"),
        (json!(["a@b.c"]), "Array body"),
        (json!("a@b.c"), "String body"),
    ];

    for (json_request, params) in tests {
        let res = app.post_subscribe(&json_request).await?;
        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "Wrong response: ({}), Expected: ({}); for request with: {params}",
            res.status(),
            StatusCode::BAD_REQUEST
        );

        let body: Value = res.json().await?;
        assert_eq!(body, json!({ "error": "Invalid email address" }));
    }

    assert!(app.subscriber_emails().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn api_subscribe_concurrent_duplicates_store_one_row() -> Result<()> {
    const REQUESTS: usize = 5;
    let app = TestApp::spawn().await?;
    let url = app.url("/api/subscribe");

    let mut handles = Vec::with_capacity(REQUESTS);
    for _ in 0..REQUESTS {
        let client = app.http_client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let res = client
                .post(url)
                .json(&json!({ "email": "race@example.com" }))
                .send()
                .await?;
            let status = res.status();
            let body: Value = res.json().await?;
            Ok::<_, anyhow::Error>((status, body))
        }));
    }

    let mut ok = 0;
    for handle in handles {
        let (status, body) = handle.await??;
        if status == StatusCode::OK {
            ok += 1;
        } else {
            assert_eq!(
                status,
                StatusCode::BAD_REQUEST,
                "Wrong response StatusCode: {status}"
            );
            assert_eq!(body, json!({ "error": "Email already subscribed" }));
        }
    }

    assert_eq!(ok, 1, "Exactly one request should win");
    assert_eq!(app.subscriber_emails().await?, vec!["race@example.com"]);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_malformed_body_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_raw("/api/subscribe", "{\"email\": ").await?;

    assert_eq!(
        res.status(),
        StatusCode::INTERNAL_SERVER_ERROR,
        "Wrong response StatusCode: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Internal server error");
    assert!(
        body["details"].as_str().is_some_and(|d| !d.is_empty()),
        "Missing error details: {body}"
    );

    assert!(app.subscriber_emails().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn api_subscribe_response_carries_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_subscribe(&json!({ "email": "nope" })).await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(
        res.headers().contains_key("x-request-id"),
        "Error response lost the request id header"
    );

    Ok(())
}
