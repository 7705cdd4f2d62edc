use async_graphql::{Context, Object, Result};

use crate::gql::error::IntoGqlResult;
use crate::gql::types::{MemberType, MemberTypeId};
use crate::state::AppState;
use infra::DataStore;

#[derive(Default)]
pub struct MemberTypeQuery;

#[Object]
impl MemberTypeQuery {
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_member_types().await.into_gql()?;
        Ok(rows.into_iter().map(MemberType::from).collect())
    }

    async fn member_type(&self, ctx: &Context<'_>, id: MemberTypeId) -> Result<Option<MemberType>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_member_type(id.into()).await.into_gql()?;
        Ok(row.map(MemberType::from))
    }
}
