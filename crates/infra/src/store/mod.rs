//! The data-access boundary the GraphQL layer depends on.
//!
//! Every resolver talks to a `dyn DataStore`; `PgStore` backs it with the
//! SQL repositories, `MemoryStore` keeps rows in process for tests and local
//! runs.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{MemberTypeId, MemberTypeRow, PostRow, ProfileRow, SubscriptionRow, UserRow};
use crate::repos::{
    CreatePostData, CreateProfileData, CreateUserData, UpdatePostData, UpdateProfileData,
    UpdateUserData,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadReference(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str) -> Self {
        StoreError::NotFound { entity }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait DataStore: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>>;
    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>>;

    async fn list_users(&self) -> StoreResult<Vec<UserRow>>;
    async fn list_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>>;
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>>;
    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow>;
    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow>;
    async fn delete_user(&self, id: Uuid) -> StoreResult<()>;

    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>>;
    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>>;
    async fn get_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileRow>>;
    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow>;
    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow>;
    async fn delete_profile(&self, id: Uuid) -> StoreResult<()>;

    async fn list_posts(&self) -> StoreResult<Vec<PostRow>>;
    async fn list_posts_by_author(&self, author_id: Uuid) -> StoreResult<Vec<PostRow>>;
    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>>;
    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow>;
    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow>;
    async fn delete_post(&self, id: Uuid) -> StoreResult<()>;

    async fn list_subscriptions_by_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>>;
    async fn list_subscriptions_by_author(
        &self,
        author_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>>;
    async fn create_subscription(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> StoreResult<SubscriptionRow>;
    async fn delete_subscription(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()>;
}
