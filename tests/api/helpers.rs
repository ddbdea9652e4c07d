use std::{net::SocketAddr, sync::OnceLock};

use anyhow::Result;
use reqwest::{Client, Response};
use sentinel::{config::get_or_init_config, database::DbManager, init_dbg_tracing, App};
use uuid::Uuid;

pub struct TestApp {
    pub addr: SocketAddr,
    pub database_mgr: DbManager,
    pub http_client: Client,
}

/// Logs are only printed when `TEST_LOG` is set, e.g. `TEST_LOG=1 cargo test`.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var_os("TEST_LOG").is_some() {
            init_dbg_tracing();
        }
    });
}

impl TestApp {
    /// Spawns the app on a separate task and returns the *socket address* it is listening on.
    ///
    /// Each call creates a new randomly named database and runs the migrations on it.
    /// Port `0` triggers an OS scan for an available port.
    pub async fn spawn() -> Result<Self> {
        init_test_subscriber();

        let mut config = get_or_init_config().clone();
        config.db_config.db_name = Uuid::new_v4().to_string();
        config.net_config.app_port = 0;

        DbManager::configure_for_test(&config).await?;

        let app = App::build_from_config(&config).await?;
        let addr = app.addr()?;
        let database_mgr = app.app_state.database_mgr.clone();

        tokio::spawn(sentinel::serve(app));

        Ok(TestApp {
            addr,
            database_mgr,
            http_client: Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let res = self.http_client.get(self.url(path)).send().await?;
        Ok(res)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        let res = self.http_client.post(self.url(path)).json(body).send().await?;
        Ok(res)
    }

    /// Posts the body as is, without any `Content-Type` header.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let res = self.http_client.post(self.url(path)).body(body).send().await?;
        Ok(res)
    }

    pub async fn post_subscribe(&self, body: &serde_json::Value) -> Result<Response> {
        self.post_json("/api/subscribe", body).await
    }

    pub async fn post_explore(&self, body: &serde_json::Value) -> Result<Response> {
        self.post_json("/api/explore", body).await
    }

    pub async fn subscriber_emails(&self) -> Result<Vec<String>> {
        let emails: Vec<(String,)> = sqlx::query_as("SELECT email FROM subscribers")
            .fetch_all(self.database_mgr.db())
            .await?;

        Ok(emails.into_iter().map(|(email,)| email).collect())
    }
}
