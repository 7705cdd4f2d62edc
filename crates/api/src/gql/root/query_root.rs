use async_graphql::MergedObject;

use crate::gql::domains::member_types::MemberTypeQuery;
use crate::gql::domains::posts::PostQuery;
use crate::gql::domains::profiles::ProfileQuery;
use crate::gql::domains::users::UserQuery;

#[derive(MergedObject, Default)]
#[graphql(name = "RootQueryType")]
pub struct QueryRoot(MemberTypeQuery, UserQuery, PostQuery, ProfileQuery);
