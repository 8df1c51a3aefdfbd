// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_user::SqliteUserRepository;
