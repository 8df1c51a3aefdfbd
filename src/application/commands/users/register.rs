use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash, User},
    },
};
use std::fmt;

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl UserCommandService {
    /// Validate the credentials, hash the password and persist a new user.
    ///
    /// Nothing is hashed or written unless both fields are present and the
    /// email is not yet registered.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(email, &command.password)
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &Email) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        Ok(())
    }

    async fn create_and_insert_user(&self, email: Email, password: &str) -> ApplicationResult<User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(email, password_hash, created_at);

        // a concurrent signup can pass the availability check; the store's
        // unique index settles it
        match self.user_repo.insert(new_user).await {
            Ok(user) => Ok(user),
            Err(DomainError::Conflict(_)) => {
                Err(ApplicationError::conflict("email already registered"))
            }
            Err(err) => Err(err.into()),
        }
    }
}
