use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;
use std::{fmt, str::FromStr};

pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

impl PasswordAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordAlgorithm::Bcrypt => "bcrypt",
            PasswordAlgorithm::Argon2 => "argon2",
        }
    }

    /// Identify the algorithm that produced a stored hash from its prefix.
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with("$argon2") {
            Some(PasswordAlgorithm::Argon2)
        } else if ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| hash.starts_with(prefix))
        {
            Some(PasswordAlgorithm::Bcrypt)
        } else {
            None
        }
    }
}

impl fmt::Display for PasswordAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(PasswordAlgorithm::Bcrypt),
            "argon2" | "argon2id" => Ok(PasswordAlgorithm::Argon2),
            other => Err(format!("unknown password algorithm '{other}'")),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> Result<(), ApplicationError> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid credentials"))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;
        Ok(())
    }
}

/// bcrypt with a fixed work factor. Inputs past 72 bytes are truncated by the
/// algorithm itself.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> ApplicationResult<Self> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(ApplicationError::infrastructure(format!(
                "bcrypt cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || {
            bcrypt::hash(password, cost)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let matched = tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;

        if matched {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Hashes with the configured algorithm and verifies with whichever
/// algorithm produced the stored hash.
#[derive(Debug, Clone)]
pub struct CompositePasswordHasher {
    primary: PasswordAlgorithm,
    bcrypt: BcryptPasswordHasher,
    argon2: Argon2PasswordHasher,
}

impl CompositePasswordHasher {
    pub fn new(primary: PasswordAlgorithm, bcrypt_cost: u32) -> ApplicationResult<Self> {
        Ok(Self {
            primary,
            bcrypt: BcryptPasswordHasher::new(bcrypt_cost)?,
            argon2: Argon2PasswordHasher,
        })
    }

    fn for_algorithm(&self, algorithm: PasswordAlgorithm) -> &dyn PasswordHasher {
        match algorithm {
            PasswordAlgorithm::Bcrypt => &self.bcrypt,
            PasswordAlgorithm::Argon2 => &self.argon2,
        }
    }
}

#[async_trait]
impl PasswordHasher for CompositePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        self.for_algorithm(self.primary).hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let algorithm = PasswordAlgorithm::detect(expected_hash).ok_or_else(|| {
            ApplicationError::infrastructure("unrecognised password hash format")
        })?;
        self.for_algorithm(algorithm)
            .verify(password, expected_hash)
            .await
    }
}
