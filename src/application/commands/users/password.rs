use crate::application::error::{ApplicationError, ApplicationResult};

/// Presence is the only rule; strength policy is left to callers.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password cannot be empty"));
    }

    Ok(())
}
