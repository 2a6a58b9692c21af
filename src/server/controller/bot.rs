//! Handlers for the `/bot` routes.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Serialize;
use tower_sessions::Session;

use crate::{
    model::{
        bot::{BotDto, BotFormDto, CsrfDto, RemovalReasonDto, RemoveBotDto},
        user::UserDto,
    },
    server::{
        controller::{bot_id, verify_form_token},
        data::bot::BotRepository,
        error::AppError,
        i18n::Locale,
        middleware::{
            auth::{bot_access, AuthGuard, Permission},
            session::CsrfSession,
        },
        model::{
            bot::{
                ApproveOutcome, DescriptionFormat, EditOutcome, RemovalReason, RemoveOutcome,
                SubmitOutcome,
            },
            user::User,
        },
        service::{
            bot::BotService,
            render::RenderedDescription,
            validation::{parse_snowflake, BotValidator},
        },
        state::AppState,
        util::redirect::local_redirect_target,
        view::Page,
    },
};

#[derive(Serialize)]
struct FormPage<'a> {
    form: &'a BotFormDto,
    formats: Vec<&'static str>,
    error: Option<String>,
    editing: bool,
    id: Option<String>,
}

#[derive(Serialize)]
struct BotPageView {
    bot: BotDto,
    owner: Option<UserDto>,
    editable: bool,
    frame_src: Option<String>,
    description: Option<String>,
}

#[derive(Serialize)]
struct BotOnlyPage {
    bot: BotDto,
}

#[derive(Serialize)]
struct TokenPage {
    bot: BotDto,
    token: String,
}

#[derive(Serialize)]
struct RemovePage {
    bot: BotDto,
    reasons: Vec<RemovalReasonDto>,
}

/// Renders the add or edit form, optionally with an error message and status.
fn render_form(
    page: &Page<'_>,
    form: &BotFormDto,
    editing: Option<u64>,
    error: Option<&str>,
    status: StatusCode,
) -> Result<Response, AppError> {
    let template = if editing.is_some() {
        "edit.html"
    } else {
        "add.html"
    };

    let html = page.render(
        template,
        FormPage {
            form,
            formats: DescriptionFormat::ALL.iter().map(|f| f.as_str()).collect(),
            error: error.map(|key| page.locale.text(key)),
            editing: editing.is_some(),
            id: editing.map(|id| id.to_string()),
        },
    )?;

    Ok((status, html).into_response())
}

/// Builds a page carrying the session's form token.
async fn form_page<'a>(
    session: &Session,
    locale: Locale,
    user: Option<&'a User>,
) -> Result<Page<'a>, AppError> {
    let token = CsrfSession::new(session).form_token().await?;
    Ok(Page::new(locale, user).with_csrf(token))
}

/// Shows the submission form.
///
/// # Access Control
/// - Logged in users
pub async fn add_form(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let page = form_page(&session, locale, Some(&user)).await?;

    let form = BotFormDto {
        kind: DescriptionFormat::Markdown.as_str().to_string(),
        ..Default::default()
    };

    render_form(&page, &form, None, None, StatusCode::OK)
}

/// Submits a new bot for review.
///
/// # Access Control
/// - Logged in users
///
/// # Returns
/// - `200 OK` - Bot stored, confirmation page
/// - `400 Bad Request` - Wrong form token, or the form is shown again with the problem
/// - `409 Conflict` - A bot with this id is already listed
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Form(form): Form<BotFormDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let page = form_page(&session, locale, Some(&user)).await?;

    let validator = BotValidator::new(state.directory.as_ref());
    let (id, content) = match validator.validate_submission(&form).await {
        Ok(valid) => valid,
        Err(err) => {
            let key = err.into_message_key()?;
            return render_form(&page, &form, None, Some(key), StatusCode::BAD_REQUEST);
        }
    };

    match BotService::new(&state.db, &state.notifications)
        .submit(&user, id, content)
        .await?
    {
        SubmitOutcome::Created(_) => Ok(page.message("message_bot_inserted")?.into_response()),
        SubmitOutcome::Duplicate => Err(AppError::Conflict(locale.text("error_duplicate_bot"))),
    }
}

/// Public page of a bot.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = bot_id(locale, &id)?;
    let user = AuthGuard::new(&state.db, &session).current().await?;

    let Some(bot_page) = BotService::new(&state.db, &state.notifications)
        .page(user.as_ref(), id)
        .await?
    else {
        return Err(AppError::NotFound(locale.text("error_bot_not_found")));
    };

    let page = match user.as_ref() {
        Some(user) => form_page(&session, locale, Some(user)).await?,
        None => Page::new(locale, None),
    };

    let (frame_src, description) = match bot_page.description {
        RenderedDescription::Html(html) => (None, Some(html)),
        RenderedDescription::Frame { src } => (Some(src), None),
    };

    let html = page.render(
        "bot.html",
        BotPageView {
            bot: bot_page.profile.into_dto(),
            owner: bot_page.owner.map(User::into_dto),
            editable: bot_page.editable,
            frame_src,
            description,
        },
    )?;

    Ok(html.into_response())
}

/// Edit form prefilled with the stored values.
///
/// # Access Control
/// - Owner of the bot or admins
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;
    let page = form_page(&session, locale, Some(&user)).await?;

    render_form(&page, &bot.to_form(), Some(bot.id), None, StatusCode::OK)
}

/// Applies an edit. The bot id is taken from the path, never from the form.
///
/// # Access Control
/// - Owner of the bot or admins
///
/// # Returns
/// - `200 OK` - Changed or unchanged confirmation page
/// - `400 Bad Request` - Wrong form token, or the form is shown again with the problem
/// - `403 Forbidden` - Caller does not own the bot
/// - `404 Not Found` - Bot missing, including when deleted during the edit
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
    Form(mut form): Form<BotFormDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;
    let page = form_page(&session, locale, Some(&user)).await?;

    form.id = bot.id.to_string();
    let content = match BotValidator::new(state.directory.as_ref()).validate_edit(&form) {
        Ok(content) => content,
        Err(err) => {
            let key = err.into_message_key()?;
            return render_form(&page, &form, Some(bot.id), Some(key), StatusCode::BAD_REQUEST);
        }
    };

    let key = match BotService::new(&state.db, &state.notifications)
        .edit(&user, &bot, content)
        .await?
    {
        EditOutcome::Changed => "message_bot_changed",
        EditOutcome::Unchanged => "message_bot_unchanged",
        EditOutcome::Missing => {
            return Err(AppError::NotFound(locale.text("error_bot_not_found")));
        }
    };

    Ok(page.message(key)?.into_response())
}

/// Delete confirmation page.
///
/// # Access Control
/// - Owner of the bot or admins
pub async fn delete_form(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;
    let page = form_page(&session, locale, Some(&user)).await?;

    let html = page.render(
        "delete.html",
        BotOnlyPage {
            bot: bot.into_profile().into_dto(),
        },
    )?;

    Ok(html.into_response())
}

/// Deletes a bot.
///
/// # Access Control
/// - Owner of the bot or admins
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
    Form(form): Form<CsrfDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;

    BotService::new(&state.db, &state.notifications)
        .delete(&user, &bot)
        .await?;

    let page = Page::new(locale, Some(&user));
    Ok(page.message("message_bot_deleted")?.into_response())
}

/// Shows the current secret token.
///
/// # Access Control
/// - Owner of the bot or admins
pub async fn token(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;
    let page = form_page(&session, locale, Some(&user)).await?;

    let token = bot.token.clone();
    let html = page.render(
        "token.html",
        TokenPage {
            bot: bot.into_profile().into_dto(),
            token,
        },
    )?;

    Ok(html.into_response())
}

/// Rotates the secret token and sends the caller back to the token page.
///
/// The update runs in the background; the redirect never carries the token.
///
/// # Access Control
/// - Owner of the bot or admins
pub async fn rotate_token(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
    Form(form): Form<CsrfDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let id = bot_id(locale, &id)?;
    let bot = bot_access(&state.db, &user, id).await?.allowed(locale)?;

    let db = state.db.clone();
    let notifications = state.notifications.clone();
    tokio::spawn(async move {
        if let Err(e) = BotService::new(&db, &notifications)
            .rotate_token(bot.id)
            .await
        {
            tracing::error!("Failed to rotate token of bot {}: {}", bot.id, e);
        }
    });

    Ok(Redirect::to(&format!("/bot/{}/token", id)).into_response())
}

/// Approves a pending bot and returns to the page the request came from.
///
/// # Access Control
/// - `Admin`
pub async fn approve(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(form): Form<CsrfDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let id = bot_id(locale, &id)?;

    let outcome = BotService::new(&state.db, &state.notifications)
        .approve(&user, id)
        .await?;
    if outcome == ApproveOutcome::NotFound {
        return Err(AppError::NotFound(locale.text("error_bot_not_found")));
    }

    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    Ok(Redirect::to(&local_redirect_target(referer)).into_response())
}

/// Removal form listing the localized reasons.
///
/// # Access Control
/// - `Admin`
pub async fn remove_form(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let id = bot_id(locale, &id)?;

    let Some(profile) = BotRepository::new(&state.db).find_profile_by_id(id).await? else {
        return Err(AppError::NotFound(locale.text("error_bot_not_found")));
    };

    let reasons = RemovalReason::ALL
        .iter()
        .map(|reason| RemovalReasonDto {
            key: reason.key().to_string(),
            label: locale.text(&reason.message_key()),
        })
        .collect();

    let page = form_page(&session, locale, Some(&user)).await?;
    let html = page.render(
        "remove.html",
        RemovePage {
            bot: profile.into_dto(),
            reasons,
        },
    )?;

    Ok(html.into_response())
}

/// Removes a bot for a moderation reason and returns to the index.
///
/// Blank fields count as missing.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `303 See Other` - Bot removed
/// - `400 Bad Request` - Wrong form token, missing or oversized fields, unknown reason
/// - `404 Not Found` - No bot with that id
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    locale: Locale,
    Path(id): Path<String>,
    Form(form): Form<RemoveBotDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    verify_form_token(&session, locale, &form.csrf).await?;
    let id = bot_id(locale, &id)?;

    let reason = form.reason.as_deref().filter(|s| !s.trim().is_empty());
    let description = form.description.as_deref().filter(|s| !s.trim().is_empty());

    let outcome = BotService::new(&state.db, &state.notifications)
        .remove(&user, id, reason, description, locale)
        .await?;

    match outcome {
        RemoveOutcome::Removed => Ok(Redirect::to("/").into_response()),
        RemoveOutcome::NotFound => Err(AppError::NotFound(locale.text("error_bot_not_found"))),
        RemoveOutcome::InvalidReasonOrDescription => Err(AppError::BadRequest(
            locale.text("error_invalid_reason_or_description"),
        )),
        RemoveOutcome::InvalidReason => {
            Err(AppError::BadRequest(locale.text("error_invalid_reason")))
        }
    }
}

/// Raw HTML description, served for the sandboxed frame on the bot page.
///
/// The response carries a sandbox policy of its own so the document cannot reach the
/// site's origin even when opened directly.
pub async fn iframe(
    State(state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let not_found = || AppError::NotFound(locale.text("error_bot_html_not_found"));

    let id = parse_snowflake(&id).ok_or_else(not_found)?;
    let html = BotService::new(&state.db, &state.notifications)
        .html_embed(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_SECURITY_POLICY, "sandbox allow-scripts"),
        ],
        html,
    )
        .into_response())
}
