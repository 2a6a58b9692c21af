use crate::server::{
    error::{auth::AuthError, AppError},
    i18n::Locale,
    middleware::{
        auth::{bot_access, AuthGuard, BotAccess, Permission},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod current;
mod require;
