use async_trait::async_trait;
use uuid::Uuid;

use super::{DataStore, StoreError, StoreResult};
use crate::db::Db;
use crate::models::{MemberTypeId, MemberTypeRow, PostRow, ProfileRow, SubscriptionRow, UserRow};
use crate::repos::{
    member_types, posts, profiles, subscriptions, users, CreatePostData, CreateProfileData,
    CreateUserData, UpdatePostData, UpdateProfileData, UpdateUserData,
};

#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &Db {
        &self.db
    }
}

/// Map constraint violations onto the store taxonomy; anything else stays a
/// raw database error.
fn classify(err: sqlx::Error, conflict: &str, bad_reference: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(conflict.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::BadReference(bad_reference.to_string());
        }
    }
    StoreError::Database(err)
}

fn expect_deleted(rows_affected: u64, entity: &'static str) -> StoreResult<()> {
    if rows_affected == 0 {
        return Err(StoreError::not_found(entity));
    }
    Ok(())
}

#[async_trait]
impl DataStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }

    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>> {
        Ok(member_types::list(&self.db).await?)
    }

    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>> {
        Ok(member_types::get_by_id(&self.db, id).await?)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(users::list(&self.db).await?)
    }

    async fn list_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(users::list_by_ids(&self.db, ids).await?)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(users::get_by_id(&self.db, id).await?)
    }

    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow> {
        Ok(users::create(&self.db, data).await?)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow> {
        users::update(&self.db, id, data)
            .await?
            .ok_or_else(|| StoreError::not_found("User"))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        expect_deleted(users::delete(&self.db, id).await?, "User")
    }

    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>> {
        Ok(profiles::list(&self.db).await?)
    }

    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>> {
        Ok(profiles::get_by_id(&self.db, id).await?)
    }

    async fn get_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileRow>> {
        Ok(profiles::get_by_user(&self.db, user_id).await?)
    }

    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow> {
        profiles::create(&self.db, data).await.map_err(|e| {
            classify(
                e,
                "User already has a profile",
                "Referenced user or member type does not exist",
            )
        })
    }

    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow> {
        profiles::update(&self.db, id, data)
            .await
            .map_err(|e| classify(e, "Profile conflict", "Referenced member type does not exist"))?
            .ok_or_else(|| StoreError::not_found("Profile"))
    }

    async fn delete_profile(&self, id: Uuid) -> StoreResult<()> {
        expect_deleted(profiles::delete(&self.db, id).await?, "Profile")
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostRow>> {
        Ok(posts::list(&self.db).await?)
    }

    async fn list_posts_by_author(&self, author_id: Uuid) -> StoreResult<Vec<PostRow>> {
        Ok(posts::list_by_author(&self.db, author_id).await?)
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>> {
        Ok(posts::get_by_id(&self.db, id).await?)
    }

    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow> {
        posts::create(&self.db, data)
            .await
            .map_err(|e| classify(e, "Post conflict", "Referenced author does not exist"))
    }

    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow> {
        posts::update(&self.db, id, data)
            .await?
            .ok_or_else(|| StoreError::not_found("Post"))
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        expect_deleted(posts::delete(&self.db, id).await?, "Post")
    }

    async fn list_subscriptions_by_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>> {
        Ok(subscriptions::list_by_subscriber(&self.db, subscriber_id).await?)
    }

    async fn list_subscriptions_by_author(
        &self,
        author_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>> {
        Ok(subscriptions::list_by_author(&self.db, author_id).await?)
    }

    async fn create_subscription(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> StoreResult<SubscriptionRow> {
        subscriptions::create(&self.db, subscriber_id, author_id)
            .await
            .map_err(|e| {
                classify(
                    e,
                    "Subscription already exists",
                    "Referenced subscriber or author does not exist",
                )
            })
    }

    async fn delete_subscription(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        expect_deleted(
            subscriptions::delete(&self.db, subscriber_id, author_id).await?,
            "Subscription",
        )
    }
}
