use async_graphql::{Context, Object, Result};

use crate::gql::error::IntoGqlResult;
use crate::gql::scalars::UuidScalar;
use crate::gql::types::SUCCESS_MARKER;
use crate::state::AppState;
use infra::DataStore;

#[derive(Default)]
pub struct SubscriberMutation;

#[Object]
impl SubscriberMutation {
    /// Subscribe `userId` to `authorId`. Fails if the pair already exists.
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        user_id: UuidScalar,
        author_id: UuidScalar,
    ) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state
            .store
            .create_subscription(user_id.into(), author_id.into())
            .await
            .into_gql()?;
        tracing::info!(subscriber_id = %user_id.0, author_id = %author_id.0, "Subscribed");
        Ok(SUCCESS_MARKER.to_string())
    }

    /// Fails if `userId` is not subscribed to `authorId`.
    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        user_id: UuidScalar,
        author_id: UuidScalar,
    ) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state
            .store
            .delete_subscription(user_id.into(), author_id.into())
            .await
            .into_gql()?;
        tracing::info!(subscriber_id = %user_id.0, author_id = %author_id.0, "Unsubscribed");
        Ok(SUCCESS_MARKER.to_string())
    }
}
