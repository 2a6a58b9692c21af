use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::view;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the caller is not logged in.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists in the database.
    #[error("User {0} from the session was not found in the database")]
    UserNotInDatabase(u64),

    /// The user is logged in but lacks a required permission.
    ///
    /// Carries the user id and a description of the denied action for the logs.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth authorization code for an access token failed.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → redirect to the login page
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `TokenExchange` → 500 Internal Server Error
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                Redirect::to("/auth/login").into_response()
            }
            Self::AccessDenied(_, _) => view::error_response(StatusCode::FORBIDDEN, "Access denied"),
            Self::CsrfValidationFailed => view::error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(err) => {
                tracing::error!("OAuth token exchange failed: {}", err);
                view::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "There was an issue logging you in, please try again.",
                )
            }
        }
    }
}
