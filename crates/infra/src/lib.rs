pub mod db;
pub mod models;
pub mod repos;
pub mod store;

pub use store::{DataStore, MemoryStore, PgStore, StoreError, StoreResult};

pub use sqlx;
