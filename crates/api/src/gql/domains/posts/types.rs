use async_graphql::InputObject;
use infra::repos::{CreatePostData, UpdatePostData};

use crate::gql::scalars::UuidScalar;

#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: UuidScalar,
}

impl From<CreatePostInput> for CreatePostData {
    fn from(input: CreatePostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            author_id: input.author_id.into(),
        }
    }
}

#[derive(InputObject)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ChangePostInput> for UpdatePostData {
    fn from(input: ChangePostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
        }
    }
}
