//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods relevant
//! to its concern:
//! - `AuthSession` - Logged in user id
//! - `CsrfSession` - Form token and OAuth state token
//! - `OAuthFlowSession` - Page to return to after login

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    util::{
        parse::parse_u64_from_string,
        token::{generate_token, tokens_match, FORM_TOKEN_BYTES},
    },
};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_OAUTH_STATE: &str = "auth:oauth_state";
const SESSION_AUTH_RETURN_TO: &str = "auth:return_to";
const SESSION_FORM_TOKEN: &str = "form:token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID in the session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: u64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError)` - Failed to access session or the stored id is malformed
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_u64_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Holds two independent tokens: the per-session form token embedded into every form and
/// checked on every POST, and the single-use OAuth state token checked by the login
/// callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session's form token, creating it on first use.
    pub async fn form_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.session.get::<String>(SESSION_FORM_TOKEN).await? {
            return Ok(token);
        }

        let token = generate_token(FORM_TOKEN_BYTES);
        self.session
            .insert(SESSION_FORM_TOKEN, token.clone())
            .await?;

        Ok(token)
    }

    /// Checks a submitted form token against the session's.
    ///
    /// A session without a form token never validates. The token stays valid for the rest
    /// of the session so several open forms keep working.
    pub async fn verify_form_token(&self, submitted: &str) -> Result<bool, AppError> {
        let stored = self.session.get::<String>(SESSION_FORM_TOKEN).await?;

        Ok(stored.is_some_and(|token| !submitted.is_empty() && tokens_match(&token, submitted)))
    }

    /// Stores the OAuth state token for the pending login.
    pub async fn set_oauth_state(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_OAUTH_STATE, token).await?;
        Ok(())
    }

    /// Retrieves and removes the OAuth state token so it cannot be replayed.
    pub async fn take_oauth_state(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_OAUTH_STATE).await?;
        Ok(token)
    }
}

/// OAuth flow state that must survive the redirect to Discord and back.
pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Remembers the local path to send the user back to after login.
    pub async fn set_return_to(&self, path: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_RETURN_TO, path).await?;
        Ok(())
    }

    /// Retrieves and removes the return path.
    pub async fn take_return_to(&self) -> Result<Option<String>, AppError> {
        let path = self.session.remove(SESSION_AUTH_RETURN_TO).await?;
        Ok(path)
    }
}
