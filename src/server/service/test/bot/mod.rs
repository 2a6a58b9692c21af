use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    data::bot::BotRepository,
    error::AppError,
    i18n::Locale,
    model::{
        bot::{
            ApproveOutcome, Bot, BotContent, DescriptionFormat, EditOutcome, RemoveOutcome,
            SubmitOutcome,
        },
        event::BotEvent,
        user::User,
    },
    service::{
        bot::BotService, notification::NotificationDispatcher, render::RenderedDescription,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod edit;
mod html_embed;
mod page;
mod submit;

async fn user(db: &DatabaseConnection) -> Result<User, AppError> {
    User::from_entity(factory::create_user(db).await?)
}

async fn admin(db: &DatabaseConnection) -> Result<User, AppError> {
    User::from_entity(factory::user::create_admin(db).await?)
}

fn content(name: &str) -> BotContent {
    BotContent {
        name: name.to_string(),
        avatar: "https://cdn.example/avatar.png".to_string(),
        invite: "https://discord.com/oauth2/authorize?client_id=1".to_string(),
        count: 42,
        short_desc: "Short".to_string(),
        long_desc: "Long **markdown**".to_string(),
        format: DescriptionFormat::Markdown,
    }
}

fn stored(model: entity::bot::Model) -> Result<Bot, AppError> {
    Bot::from_entity(model)
}

/// Events queued so far, without waiting for more.
fn drain(receiver: &mut UnboundedReceiver<BotEvent>) -> Vec<BotEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
