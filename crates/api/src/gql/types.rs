use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject};
use uuid::Uuid;

use crate::gql::error::{GqlError, IntoGqlResult};
use crate::gql::scalars::UuidScalar;
use crate::state::AppState;
use infra::models::{MemberTypeRow, PostRow, ProfileRow, UserRow};
use infra::DataStore;

/// Returned by delete and (un)subscribe mutations.
pub const SUCCESS_MARKER: &str = "OK";

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberTypeId {
    #[graphql(name = "BASIC")]
    Basic,
    #[graphql(name = "BUSINESS")]
    Business,
}

impl From<MemberTypeId> for infra::models::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => infra::models::MemberTypeId::Basic,
            MemberTypeId::Business => infra::models::MemberTypeId::Business,
        }
    }
}

impl From<infra::models::MemberTypeId> for MemberTypeId {
    fn from(id: infra::models::MemberTypeId) -> Self {
        match id {
            infra::models::MemberTypeId::Basic => MemberTypeId::Basic,
            infra::models::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: f64,
}

impl From<MemberTypeRow> for MemberType {
    fn from(row: MemberTypeRow) -> Self {
        Self {
            id: row.id.into(),
            discount: row.discount,
            posts_limit_per_month: row.posts_limit_per_month,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: UuidScalar,
    pub title: String,
    pub content: String,
    pub author_id: UuidScalar,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            content: row.content,
            author_id: row.author_id.into(),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: UuidScalar,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: UuidScalar,
    pub member_type_id: MemberTypeId,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id.into(),
            is_male: row.is_male,
            year_of_birth: row.year_of_birth,
            user_id: row.user_id.into(),
            member_type_id: row.member_type_id.into(),
        }
    }
}

#[ComplexObject]
impl Profile {
    async fn member_type(&self, ctx: &Context<'_>) -> Result<MemberType> {
        let state = ctx.data::<AppState>()?;
        let row = state
            .store
            .get_member_type(self.member_type_id.into())
            .await
            .into_gql()?;

        row.map(MemberType::from)
            .ok_or_else(|| GqlError::new("Member type not found"))
            .into_gql()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: UuidScalar,
    pub name: String,
    pub balance: f64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            balance: row.balance,
        }
    }
}

// Relational fields each hit the store on their own; nothing is batched
// across sibling users.
#[ComplexObject]
impl User {
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.get_profile_by_user(self.id.into()).await.into_gql()?;
        Ok(row.map(Profile::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_posts_by_author(self.id.into()).await.into_gql()?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Authors this user is subscribed to.
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let subscriptions = state
            .store
            .list_subscriptions_by_subscriber(self.id.into())
            .await
            .into_gql()?;

        let author_ids: Vec<Uuid> = subscriptions.iter().map(|s| s.author_id).collect();
        let rows = state.store.list_users_by_ids(&author_ids).await.into_gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Users subscribed to this user.
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let subscriptions = state
            .store
            .list_subscriptions_by_author(self.id.into())
            .await
            .into_gql()?;

        let subscriber_ids: Vec<Uuid> = subscriptions.iter().map(|s| s.subscriber_id).collect();
        let rows = state.store.list_users_by_ids(&subscriber_ids).await.into_gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
