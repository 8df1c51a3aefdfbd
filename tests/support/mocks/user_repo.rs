// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use signup_core::domain::errors::{DomainError, DomainResult};
use signup_core::domain::user::{Email, NewUser, User, UserId, UserRepository};
use std::collections::HashMap;
use std::sync::Mutex;

/// インメモリのユーザーリポジトリ（メールアドレスで一意）
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepo {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.inner.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let key = new_user.email.as_str().to_string();
        if map.contains_key(&key) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = new_user.into_user(UserId::generate());
        map.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(email.as_str()).cloned())
    }
}

/// Store whose writes always fail, as a lost connection would.
#[derive(Default)]
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Persistence("database is locked".into()))
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<User>> {
        Ok(None)
    }
}

/// Simulates losing a concurrent signup race: the lookup sees no user but
/// the unique index rejects the insert.
#[derive(Default)]
pub struct RacingUserRepo;

#[async_trait]
impl UserRepository for RacingUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Conflict("unique constraint violated".into()))
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<User>> {
        Ok(None)
    }
}
