use async_graphql::{Context, Object, Result};

use crate::gql::error::IntoGqlResult;
use crate::gql::scalars::UuidScalar;
use crate::gql::types::{Post, SUCCESS_MARKER};
use crate::state::AppState;
use infra::DataStore;

use super::types::{ChangePostInput, CreatePostInput};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_posts().await.into_gql()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<Post>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_post(id.into()).await.into_gql()?;
        Ok(row.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.create_post(dto.into()).await.into_gql()?;
        tracing::info!(post_id = %row.id, author_id = %row.author_id, "Post created");
        Ok(row.into())
    }

    async fn change_post(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangePostInput,
    ) -> Result<Post> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.update_post(id.into(), dto.into()).await.into_gql()?;
        Ok(row.into())
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state.store.delete_post(id.into()).await.into_gql()?;
        tracing::info!(post_id = %id.0, "Post deleted");
        Ok(SUCCESS_MARKER.to_string())
    }
}
