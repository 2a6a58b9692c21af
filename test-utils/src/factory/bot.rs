//! Bot factory for creating test bot entities.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bot::BotFactory;
///
/// let bot = BotFactory::new(&db, "123456789")
///     .name("Helper")
///     .long_desc("<p>hi</p>")
///     .kind("html")
///     .build()
///     .await?;
/// ```
pub struct BotFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    avatar: String,
    invite: String,
    count: i64,
    short_desc: String,
    long_desc: String,
    kind: String,
    owner: String,
    approved: bool,
    token: String,
}

impl<'a> BotFactory<'a> {
    /// Creates a new BotFactory with default values.
    ///
    /// Defaults:
    /// - id: unique 18 digit snowflake
    /// - name: `"Bot {n}"`
    /// - kind: `"markdown"` with a short markdown long description
    /// - approved: `false`
    /// - token: 128 hex characters unique to this bot
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner` - Discord ID of the owning user
    pub fn new(db: &'a DatabaseConnection, owner: impl Into<String>) -> Self {
        let n = next_id();
        let id = next_snowflake();
        Self {
            db,
            avatar: format!("https://cdn.discordapp.com/avatars/{}/avatar.png", id),
            invite: format!(
                "https://discord.com/oauth2/authorize?client_id={}&scope=bot",
                id
            ),
            id,
            name: format!("Bot {}", n),
            count: 0,
            short_desc: "A test bot".to_string(),
            long_desc: "# Test bot\n\nDoes **things**.".to_string(),
            kind: "markdown".to_string(),
            owner: owner.into(),
            approved: false,
            token: format!("{:0128x}", n),
        }
    }

    /// Sets the Discord application id of the bot.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name of the bot.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server count of the bot.
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Sets the long description.
    pub fn long_desc(mut self, long_desc: impl Into<String>) -> Self {
        self.long_desc = long_desc.into();
        self
    }

    /// Sets the description type tag (`markdown`, `asciidoc` or `html`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the approval flag.
    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    /// Sets the secret token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builds and inserts the bot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bot::Model)` - Created bot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bot::Model, DbErr> {
        entity::bot::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            avatar: ActiveValue::Set(self.avatar),
            invite: ActiveValue::Set(self.invite),
            count: ActiveValue::Set(self.count),
            short_desc: ActiveValue::Set(self.short_desc),
            long_desc: ActiveValue::Set(self.long_desc),
            kind: ActiveValue::Set(self.kind),
            owner: ActiveValue::Set(self.owner),
            approved: ActiveValue::Set(self.approved),
            token: ActiveValue::Set(self.token),
            timestamp: ActiveValue::Set(Utc::now().timestamp_millis()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bot with default values owned by `owner`.
pub async fn create_bot(
    db: &DatabaseConnection,
    owner: impl Into<String>,
) -> Result<entity::bot::Model, DbErr> {
    BotFactory::new(db, owner).build().await
}
