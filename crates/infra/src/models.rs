use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "member_type_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "BASIC",
            MemberTypeId::Business => "BUSINESS",
        }
    }
}

impl std::fmt::Display for MemberTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MemberTypeRow {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: f64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// Row of the `subscribers_on_authors` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SubscriptionRow {
    pub subscriber_id: Uuid,
    pub author_id: Uuid,
}
