// Each domain contains: mod.rs, resolvers.rs and, when it takes input
// objects, types.rs

pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod subscribers;
pub mod users;
