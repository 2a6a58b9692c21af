//! Listing pages.

use axum::{extract::State, response::Html};
use serde::Serialize;
use tower_sessions::Session;

use crate::{
    model::bot::BotDto,
    server::{
        error::AppError,
        i18n::Locale,
        middleware::{
            auth::{AuthGuard, Permission},
            session::CsrfSession,
        },
        model::bot::BotProfile,
        service::bot::BotService,
        state::AppState,
        view::Page,
    },
};

#[derive(Serialize)]
struct ListPage {
    bots: Vec<BotDto>,
}

fn list_page(bots: Vec<BotProfile>) -> ListPage {
    ListPage {
        bots: bots.into_iter().map(BotProfile::into_dto).collect(),
    }
}

/// Approved bots, newest first.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session).current().await?;

    let bots = BotService::new(&state.db, &state.notifications)
        .list_approved()
        .await?;

    Page::new(locale, user.as_ref()).render("index.html", list_page(bots))
}

/// Moderation queue of bots waiting for approval.
///
/// # Access Control
/// - `Admin`
pub async fn queue(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
) -> Result<Html<String>, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bots = BotService::new(&state.db, &state.notifications)
        .list_pending()
        .await?;

    let token = CsrfSession::new(&session).form_token().await?;
    Page::new(locale, Some(&user))
        .with_csrf(token)
        .render("queue.html", list_page(bots))
}
