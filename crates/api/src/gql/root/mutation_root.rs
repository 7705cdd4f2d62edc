use async_graphql::MergedObject;

use crate::gql::domains::posts::PostMutation;
use crate::gql::domains::profiles::ProfileMutation;
use crate::gql::domains::subscribers::SubscriberMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
#[graphql(name = "Mutations")]
pub struct MutationRoot(UserMutation, ProfileMutation, PostMutation, SubscriberMutation);
