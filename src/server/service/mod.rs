//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are responsible for:
//!
//! - **Business Logic**: Listing rules, moderation checks and outcomes
//! - **Orchestration**: Coordinating repository calls with the notification queue
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **External Services**: Discord login, bot lookups and the moderation log

pub mod auth;
pub mod bot;
pub mod discord;
pub mod notification;
pub mod render;
pub mod validation;

#[cfg(test)]
mod test;
