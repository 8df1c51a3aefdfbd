// tests/support/mocks/security.rs
use async_trait::async_trait;
use signup_core::application::{ApplicationResult, error::ApplicationError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 寛容なパスワードハッシャー（大半のテストで使用）
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl signup_core::application::ports::security::PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Ok("$dummy$hash".into())
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

/// Records how many times `hash` was reached.
#[derive(Debug, Default)]
pub struct CountingPasswordHasher {
    calls: AtomicUsize,
}

impl CountingPasswordHasher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl signup_core::application::ports::security::PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("$counted${n}"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl signup_core::application::ports::security::PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }
}
