//! User domain models and parameters.
//!
//! Users are written by the Discord login flow and read by the bot pages to resolve
//! owners and permissions.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// User with Discord identity and permission flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username.
    pub name: String,
    /// Discord CDN avatar URL, if the user has one.
    pub avatar: Option<String>,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// Time of the most recent login.
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for templates.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id.to_string(),
            name: self.name,
            avatar: self.avatar,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            avatar: entity.avatar,
            admin: entity.admin,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Parameters for upserting a user after a Discord login.
///
/// The optional `is_admin` field preserves the stored admin flag when `None`.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username.
    pub name: String,
    /// Discord CDN avatar URL.
    pub avatar: Option<String>,
    /// Admin flag to write, `None` keeps the stored value.
    pub is_admin: Option<bool>,
}
