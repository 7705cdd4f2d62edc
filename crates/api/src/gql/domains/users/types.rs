use async_graphql::InputObject;
use infra::repos::{CreateUserData, UpdateUserData};

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

impl From<CreateUserInput> for CreateUserData {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}

#[derive(InputObject)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

impl From<ChangeUserInput> for UpdateUserData {
    fn from(input: ChangeUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}
