use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::Email,
};
use async_trait::async_trait;

/// Storage port for user records.
///
/// Implementations own identifier assignment and must report a duplicate
/// email as [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict),
/// even when the duplicate slipped past a prior `find_by_email` check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
