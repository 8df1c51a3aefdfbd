// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash of `password`. Two calls with the same input
    /// return different strings.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(())` when `password` matches `expected_hash`, `Unauthorized` when it
    /// does not.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}
