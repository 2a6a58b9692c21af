use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
    service::auth::AuthService,
    state::AppState,
    util::redirect::local_redirect_target,
};

/// Query parameters for the login endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// Local page to return to after login, defaults to the referring page.
    pub return_to: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

/// Starts the Discord login.
///
/// Stores the OAuth state token and the page to come back to, then redirects to
/// Discord's consent screen.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.admin_ids,
    );

    let (url, csrf_token) = auth_service.login_url();

    let return_to = params.return_to.as_deref().or_else(|| {
        headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
    });

    CsrfSession::new(&session)
        .set_oauth_state(csrf_token.secret().to_string())
        .await?;
    OAuthFlowSession::new(&session)
        .set_return_to(local_redirect_target(return_to))
        .await?;

    Ok(Redirect::to(url.as_str()))
}

/// Completes the Discord login.
///
/// Validates the state token, records the user and starts an authenticated session
/// under a fresh session id.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.admin_ids,
    );

    let stored_state = CsrfSession::new(&session).take_oauth_state().await?;
    if stored_state.as_deref() != Some(params.state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let user = auth_service.callback(params.code).await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.discord_id).await?;

    tracing::info!("User {} logged in", user.discord_id);

    let return_to = OAuthFlowSession::new(&session).take_return_to().await?;

    Ok(Redirect::to(&local_redirect_target(return_to.as_deref())))
}

/// Ends the session.
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}
