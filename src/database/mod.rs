pub mod manager;
pub mod query_builder;
pub mod repository;
pub mod models;

pub use manager::{DatabaseManager, DatabaseError, DbPool};
pub use repository::JobRepository;
