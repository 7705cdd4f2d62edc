use async_graphql::InputObject;
use infra::repos::{CreateProfileData, UpdateProfileData};

use crate::gql::scalars::UuidScalar;
use crate::gql::types::MemberTypeId;

#[derive(InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: UuidScalar,
    pub member_type_id: MemberTypeId,
}

impl From<CreateProfileInput> for CreateProfileData {
    fn from(input: CreateProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            user_id: input.user_id.into(),
            member_type_id: input.member_type_id.into(),
        }
    }
}

#[derive(InputObject)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

impl From<ChangeProfileInput> for UpdateProfileData {
    fn from(input: ChangeProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            member_type_id: input.member_type_id.map(Into::into),
        }
    }
}
