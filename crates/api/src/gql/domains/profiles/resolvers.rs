use std::ops::RangeInclusive;

use async_graphql::{Context, Object, Result};

use crate::gql::error::{GqlError, IntoGqlResult};
use crate::gql::scalars::UuidScalar;
use crate::gql::types::{Profile, SUCCESS_MARKER};
use crate::state::AppState;
use infra::DataStore;

use super::types::{ChangeProfileInput, CreateProfileInput};

/// Accepted on creation only; `changeProfile` does not re-check it.
pub const YEAR_OF_BIRTH_RANGE: RangeInclusive<i32> = 1900..=2023;

pub fn validate_year_of_birth(year: i32) -> Result<(), GqlError> {
    if !YEAR_OF_BIRTH_RANGE.contains(&year) {
        return Err(GqlError::validation(format!(
            "Invalid yearOfBirth {year}: must be between {} and {}",
            YEAR_OF_BIRTH_RANGE.start(),
            YEAR_OF_BIRTH_RANGE.end()
        )));
    }
    Ok(())
}

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_profiles().await.into_gql()?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn profile(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_profile(id.into()).await.into_gql()?;
        Ok(row.map(Profile::from))
    }
}

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    async fn create_profile(&self, ctx: &Context<'_>, dto: CreateProfileInput) -> Result<Profile> {
        validate_year_of_birth(dto.year_of_birth).into_gql()?;

        let state = ctx.data::<AppState>()?;
        let row = state.store.create_profile(dto.into()).await.into_gql()?;
        tracing::info!(profile_id = %row.id, user_id = %row.user_id, "Profile created");
        Ok(row.into())
    }

    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;
        let row = state
            .store
            .update_profile(id.into(), dto.into())
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn delete_profile(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        state.store.delete_profile(id.into()).await.into_gql()?;
        tracing::info!(profile_id = %id.0, "Profile deleted");
        Ok(SUCCESS_MARKER.to_string())
    }
}
