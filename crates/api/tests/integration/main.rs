#[path = "../common/mod.rs"]
mod common;

mod http;
mod member_types;
mod subscriptions;
mod users;
