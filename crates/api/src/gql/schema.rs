use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::config::GraphqlConfig;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema.
///
/// The schema carries no data of its own: the handler attaches `AppState` to
/// each request, and resolvers read it via `ctx.data::<AppState>()`.
pub fn build_schema(config: &GraphqlConfig) -> AppSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .limit_depth(config.depth_limit)
    .limit_complexity(config.complexity_limit);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
