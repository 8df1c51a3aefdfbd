// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{ClockPort, PasswordHasherPort},
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(user_repo, password_hasher, clock));

        Self { user_commands }
    }
}
