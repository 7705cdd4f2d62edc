use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::SubscriptionRow;

/// Authors the given user is subscribed to.
pub async fn list_by_subscriber<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
) -> SqlxResult<Vec<SubscriptionRow>> {
    sqlx::query_as::<_, SubscriptionRow>(
        r#"
        SELECT subscriber_id, author_id
        FROM subscribers_on_authors
        WHERE subscriber_id = $1
        "#,
    )
    .bind(subscriber_id)
    .fetch_all(executor)
    .await
}

/// Subscribers of the given author.
pub async fn list_by_author<'e>(
    executor: impl PgExecutor<'e>,
    author_id: Uuid,
) -> SqlxResult<Vec<SubscriptionRow>> {
    sqlx::query_as::<_, SubscriptionRow>(
        r#"
        SELECT subscriber_id, author_id
        FROM subscribers_on_authors
        WHERE author_id = $1
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<SubscriptionRow> {
    sqlx::query_as::<_, SubscriptionRow>(
        r#"
        INSERT INTO subscribers_on_authors (subscriber_id, author_id)
        VALUES ($1, $2)
        RETURNING subscriber_id, author_id
        "#,
    )
    .bind(subscriber_id)
    .bind(author_id)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<u64> {
    let result = sqlx::query(
        "DELETE FROM subscribers_on_authors WHERE subscriber_id = $1 AND author_id = $2",
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
