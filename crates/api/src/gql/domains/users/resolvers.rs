use async_graphql::{Context, Object, Result};

use crate::gql::error::IntoGqlResult;
use crate::gql::scalars::UuidScalar;
use crate::gql::types::{User, SUCCESS_MARKER};
use crate::state::AppState;
use infra::DataStore;

use super::types::{ChangeUserInput, CreateUserInput};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_users().await.into_gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Null when no user has this id.
    async fn user(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_user(id.into()).await.into_gql()?;
        Ok(row.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.create_user(dto.into()).await.into_gql()?;
        tracing::info!(user_id = %row.id, "User created");
        Ok(row.into())
    }

    /// Only the fields present in `dto` are changed.
    async fn change_user(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangeUserInput,
    ) -> Result<User> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.update_user(id.into(), dto.into()).await.into_gql()?;
        Ok(row.into())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state.store.delete_user(id.into()).await.into_gql()?;
        tracing::info!(user_id = %id.0, "User deleted");
        Ok(SUCCESS_MARKER.to_string())
    }
}
