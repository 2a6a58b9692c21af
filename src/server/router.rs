use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{auth, bot, index},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/queue", get(index::queue))
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .nest("/bot", bot_router())
}

fn bot_router() -> Router<AppState> {
    Router::new()
        .route("/add", get(bot::add_form).post(bot::add))
        .route("/{id}", get(bot::show))
        .route("/{id}/edit", get(bot::edit_form).post(bot::edit))
        .route("/{id}/delete", get(bot::delete_form).post(bot::delete))
        .route("/{id}/token", get(bot::token).post(bot::rotate_token))
        .route("/{id}/approve", post(bot::approve))
        .route("/{id}/remove", get(bot::remove_form).post(bot::remove))
        .route("/{id}/iframe", get(bot::iframe))
}
