//! HTTP request handlers.
//!
//! Every handler runs its checks explicitly and in the same order: login, form token,
//! ownership or admin guard, then input validation. Client-facing failures are returned
//! as `AppError` variants carrying a message already localized for the caller.

pub mod auth;
pub mod bot;
pub mod index;

use tower_sessions::Session;

use crate::server::{
    error::AppError, i18n::Locale, middleware::session::CsrfSession,
    service::validation::parse_snowflake,
};

/// Rejects a POST whose `_csrf` field does not match the session's form token.
///
/// # Returns
/// - `Ok(())` - Token matches
/// - `Err(AppError::BadRequest)` - Missing or wrong token, localized `error_csrf_invalid`
pub async fn verify_form_token(
    session: &Session,
    locale: Locale,
    submitted: &str,
) -> Result<(), AppError> {
    if CsrfSession::new(session).verify_form_token(submitted).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest(locale.text("error_csrf_invalid")))
    }
}

/// Parses the `{id}` path segment; an id that cannot exist is reported as a missing bot.
pub fn bot_id(locale: Locale, raw: &str) -> Result<u64, AppError> {
    parse_snowflake(raw).ok_or_else(|| AppError::NotFound(locale.text("error_bot_not_found")))
}
