use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::UserRow;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT id, name, balance FROM users")
        .fetch_all(executor)
        .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, balance
        FROM users
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids.to_vec())
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT id, name, balance FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateUserData) -> SqlxResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, name, balance)
        VALUES ($1, $2, $3)
        RETURNING id, name, balance
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.name)
    .bind(data.balance)
    .fetch_one(executor)
    .await
}

/// Apply only the supplied fields; `None` when the user does not exist.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateUserData,
) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            balance = COALESCE($3, balance)
        WHERE id = $1
        RETURNING id, name, balance
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.balance)
    .fetch_optional(executor)
    .await
}

/// Returns the number of deleted rows.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
