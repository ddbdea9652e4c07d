use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use tracing::info;
use uuid::Uuid;

use super::{DbManager, Error, Result};
use crate::web::types::SubscriberEmail;

/// A stored newsletter subscriber.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl DbManager {
    /// Inserts a new subscriber and returns the stored row.
    ///
    /// There is a single attempt and no surrounding transaction. Uniqueness is enforced by the
    /// `subscribers_email_key` constraint, a violation is returned as `Error::DuplicateSubscriber`.
    #[tracing::instrument(name = "Saving new subscriber to the database", skip_all)]
    pub async fn insert_subscriber(&self, email: &SubscriberEmail) -> Result<Subscriber> {
        let subscriber = sqlx::query_as::<_, Subscriber>(
            r#"
            INSERT INTO subscribers (id, email, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, email, created_at
        "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_ref())
        .bind(Utc::now())
        .fetch_one(self.db())
        .await
        .map_err(map_unique_violation)?;

        info!(subscriber_id = %subscriber.id, "new subscriber added to the list");

        Ok(subscriber)
    }
}

/// Turns the store's unique-violation signal (SQLSTATE 23505) into `Error::DuplicateSubscriber`,
/// every other error is propagated untouched.
fn map_unique_violation(error: sqlx::Error) -> Error {
    match error {
        sqlx::Error::Database(ref db_er) if db_er.is_unique_violation() => {
            Error::DuplicateSubscriber
        }
        _ => Error::Sqlx(error),
    }
}
