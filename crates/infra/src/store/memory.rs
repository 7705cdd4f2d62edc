use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{DataStore, StoreError, StoreResult};
use crate::models::{MemberTypeId, MemberTypeRow, PostRow, ProfileRow, SubscriptionRow, UserRow};
use crate::repos::{
    CreatePostData, CreateProfileData, CreateUserData, UpdatePostData, UpdateProfileData,
    UpdateUserData,
};

#[derive(Default)]
struct Tables {
    member_types: Vec<MemberTypeRow>,
    users: Vec<UserRow>,
    profiles: Vec<ProfileRow>,
    posts: Vec<PostRow>,
    subscriptions: Vec<SubscriptionRow>,
}

impl Tables {
    fn user_exists(&self, id: Uuid) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn member_type_exists(&self, id: MemberTypeId) -> bool {
        self.member_types.iter().any(|m| m.id == id)
    }
}

/// In-process store with the same constraints as the Postgres schema:
/// one profile per user, unique subscription pairs, foreign keys checked on
/// write and cascading user deletes. Rows are kept in insertion order.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// A store seeded with the two member types, mirroring the migration.
    pub fn new() -> Self {
        let tables = Tables {
            member_types: vec![
                MemberTypeRow {
                    id: MemberTypeId::Basic,
                    discount: 2.3,
                    posts_limit_per_month: 20.0,
                },
                MemberTypeRow {
                    id: MemberTypeId::Business,
                    discount: 7.7,
                    posts_limit_per_month: 100.0,
                },
            ],
            ..Tables::default()
        };

        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_member_types(&self) -> StoreResult<Vec<MemberTypeRow>> {
        Ok(self.tables.read().member_types.clone())
    }

    async fn get_member_type(&self, id: MemberTypeId) -> StoreResult<Option<MemberTypeRow>> {
        let tables = self.tables.read();
        Ok(tables.member_types.iter().find(|m| m.id == id).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(self.tables.read().users.clone())
    }

    async fn list_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<UserRow>> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<UserRow>> {
        let tables = self.tables.read();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, data: CreateUserData) -> StoreResult<UserRow> {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: data.name,
            balance: data.balance,
        };
        self.tables.write().users.push(row.clone());
        Ok(row)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUserData) -> StoreResult<UserRow> {
        let mut tables = self.tables.write();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("User"))?;

        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(balance) = data.balance {
            user.balance = balance;
        }

        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if !tables.user_exists(id) {
            return Err(StoreError::not_found("User"));
        }

        tables.users.retain(|u| u.id != id);
        tables.profiles.retain(|p| p.user_id != id);
        tables.posts.retain(|p| p.author_id != id);
        tables
            .subscriptions
            .retain(|s| s.subscriber_id != id && s.author_id != id);
        Ok(())
    }

    async fn list_profiles(&self) -> StoreResult<Vec<ProfileRow>> {
        Ok(self.tables.read().profiles.clone())
    }

    async fn get_profile(&self, id: Uuid) -> StoreResult<Option<ProfileRow>> {
        let tables = self.tables.read();
        Ok(tables.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn get_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileRow>> {
        let tables = self.tables.read();
        Ok(tables.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn create_profile(&self, data: CreateProfileData) -> StoreResult<ProfileRow> {
        let mut tables = self.tables.write();
        if !tables.user_exists(data.user_id) || !tables.member_type_exists(data.member_type_id) {
            return Err(StoreError::BadReference(
                "Referenced user or member type does not exist".to_string(),
            ));
        }
        if tables.profiles.iter().any(|p| p.user_id == data.user_id) {
            return Err(StoreError::Conflict("User already has a profile".to_string()));
        }

        let row = ProfileRow {
            id: Uuid::new_v4(),
            is_male: data.is_male,
            year_of_birth: data.year_of_birth,
            user_id: data.user_id,
            member_type_id: data.member_type_id,
        };
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn update_profile(&self, id: Uuid, data: UpdateProfileData) -> StoreResult<ProfileRow> {
        let mut tables = self.tables.write();
        if let Some(member_type_id) = data.member_type_id {
            if !tables.member_type_exists(member_type_id) {
                return Err(StoreError::BadReference(
                    "Referenced member type does not exist".to_string(),
                ));
            }
        }

        let profile = tables
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Profile"))?;

        if let Some(is_male) = data.is_male {
            profile.is_male = is_male;
        }
        if let Some(year_of_birth) = data.year_of_birth {
            profile.year_of_birth = year_of_birth;
        }
        if let Some(member_type_id) = data.member_type_id {
            profile.member_type_id = member_type_id;
        }

        Ok(profile.clone())
    }

    async fn delete_profile(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.profiles.len();
        tables.profiles.retain(|p| p.id != id);
        if tables.profiles.len() == before {
            return Err(StoreError::not_found("Profile"));
        }
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostRow>> {
        Ok(self.tables.read().posts.clone())
    }

    async fn list_posts_by_author(&self, author_id: Uuid) -> StoreResult<Vec<PostRow>> {
        let tables = self.tables.read();
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn get_post(&self, id: Uuid) -> StoreResult<Option<PostRow>> {
        let tables = self.tables.read();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create_post(&self, data: CreatePostData) -> StoreResult<PostRow> {
        let mut tables = self.tables.write();
        if !tables.user_exists(data.author_id) {
            return Err(StoreError::BadReference(
                "Referenced author does not exist".to_string(),
            ));
        }

        let row = PostRow {
            id: Uuid::new_v4(),
            title: data.title,
            content: data.content,
            author_id: data.author_id,
        };
        tables.posts.push(row.clone());
        Ok(row)
    }

    async fn update_post(&self, id: Uuid, data: UpdatePostData) -> StoreResult<PostRow> {
        let mut tables = self.tables.write();
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Post"))?;

        if let Some(title) = data.title {
            post.title = title;
        }
        if let Some(content) = data.content {
            post.content = content;
        }

        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(StoreError::not_found("Post"));
        }
        Ok(())
    }

    async fn list_subscriptions_by_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>> {
        let tables = self.tables.read();
        Ok(tables
            .subscriptions
            .iter()
            .filter(|s| s.subscriber_id == subscriber_id)
            .copied()
            .collect())
    }

    async fn list_subscriptions_by_author(
        &self,
        author_id: Uuid,
    ) -> StoreResult<Vec<SubscriptionRow>> {
        let tables = self.tables.read();
        Ok(tables
            .subscriptions
            .iter()
            .filter(|s| s.author_id == author_id)
            .copied()
            .collect())
    }

    async fn create_subscription(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> StoreResult<SubscriptionRow> {
        let mut tables = self.tables.write();
        if !tables.user_exists(subscriber_id) || !tables.user_exists(author_id) {
            return Err(StoreError::BadReference(
                "Referenced subscriber or author does not exist".to_string(),
            ));
        }

        let row = SubscriptionRow {
            subscriber_id,
            author_id,
        };
        if tables.subscriptions.contains(&row) {
            return Err(StoreError::Conflict(
                "Subscription already exists".to_string(),
            ));
        }

        tables.subscriptions.push(row);
        Ok(row)
    }

    async fn delete_subscription(&self, subscriber_id: Uuid, author_id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let before = tables.subscriptions.len();
        tables
            .subscriptions
            .retain(|s| !(s.subscriber_id == subscriber_id && s.author_id == author_id));
        if tables.subscriptions.len() == before {
            return Err(StoreError::not_found("Subscription"));
        }
        Ok(())
    }
}
