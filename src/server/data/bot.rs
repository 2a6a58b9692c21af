//! Bot data repository for database operations.
//!
//! This module provides the `BotRepository` for managing listed bots. Every method is a
//! single statement against the `bot` table, so each call is atomic on its own but no
//! two calls are. Domain models are returned at the repository boundary.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::server::{
    error::AppError,
    model::bot::{Bot, BotContent, BotProfile, CreateBotParam},
};

/// Repository providing database operations for listed bots.
pub struct BotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotRepository<'a> {
    /// Creates a new BotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new bot unless one with the same id already exists.
    ///
    /// The unique key on `id` is the duplicate check, so two concurrent submissions of
    /// the same bot cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Bot inserted
    /// - `Ok(false)` - A bot with this id is already listed
    /// - `Err(DbErr)` - Any other database error
    pub async fn try_insert(&self, param: CreateBotParam) -> Result<bool, DbErr> {
        let result = entity::prelude::Bot::insert(entity::bot::ActiveModel {
            id: ActiveValue::Set(param.id.to_string()),
            name: ActiveValue::Set(param.content.name),
            avatar: ActiveValue::Set(param.content.avatar),
            invite: ActiveValue::Set(param.content.invite),
            count: ActiveValue::Set(param.content.count),
            short_desc: ActiveValue::Set(param.content.short_desc),
            long_desc: ActiveValue::Set(param.content.long_desc),
            kind: ActiveValue::Set(param.content.format.as_str().to_string()),
            owner: ActiveValue::Set(param.owner.to_string()),
            approved: ActiveValue::Set(false),
            token: ActiveValue::Set(param.token),
            timestamp: ActiveValue::Set(param.timestamp),
        })
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Finds a bot including its token.
    ///
    /// # Returns
    /// - `Ok(Some(Bot))` - Bot found
    /// - `Ok(None)` - No bot with that id
    /// - `Err(AppError)` - Database error or a malformed stored row
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Bot>, AppError> {
        let entity = entity::prelude::Bot::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        entity.map(Bot::from_entity).transpose()
    }

    /// Finds a bot for public display, without its token.
    pub async fn find_profile_by_id(&self, id: u64) -> Result<Option<BotProfile>, AppError> {
        Ok(self.find_by_id(id).await?.map(Bot::into_profile))
    }

    /// Replaces the editable fields of a bot.
    ///
    /// Owner, approval, token and timestamp are never touched.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated, 0 if the bot no longer exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_content(&self, id: u64, content: BotContent) -> Result<u64, DbErr> {
        let result = entity::prelude::Bot::update_many()
            .filter(entity::bot::Column::Id.eq(id.to_string()))
            .col_expr(entity::bot::Column::Name, Expr::value(content.name))
            .col_expr(entity::bot::Column::Avatar, Expr::value(content.avatar))
            .col_expr(entity::bot::Column::Invite, Expr::value(content.invite))
            .col_expr(entity::bot::Column::Count, Expr::value(content.count))
            .col_expr(entity::bot::Column::ShortDesc, Expr::value(content.short_desc))
            .col_expr(entity::bot::Column::LongDesc, Expr::value(content.long_desc))
            .col_expr(
                entity::bot::Column::Kind,
                Expr::value(content.format.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a bot as approved if it is not already.
    ///
    /// The condition on `approved = false` makes concurrent approvals report a change
    /// exactly once.
    ///
    /// # Returns
    /// - `Ok(true)` - The flag went from false to true
    /// - `Ok(false)` - Bot missing or already approved
    /// - `Err(DbErr)` - Database error during update
    pub async fn approve(&self, id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Bot::update_many()
            .filter(entity::bot::Column::Id.eq(id.to_string()))
            .filter(entity::bot::Column::Approved.eq(false))
            .col_expr(entity::bot::Column::Approved, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the secret token of a bot.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_token(&self, id: u64, token: String) -> Result<u64, DbErr> {
        let result = entity::prelude::Bot::update_many()
            .filter(entity::bot::Column::Id.eq(id.to_string()))
            .col_expr(entity::bot::Column::Token, Expr::value(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a bot. Deleting a missing bot is not an error.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Bot::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists bots by approval state, newest submission first.
    pub async fn get_by_approval(&self, approved: bool) -> Result<Vec<BotProfile>, AppError> {
        let entities = entity::prelude::Bot::find()
            .filter(entity::bot::Column::Approved.eq(approved))
            .order_by_desc(entity::bot::Column::Timestamp)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Bot::from_entity(entity).map(Bot::into_profile))
            .collect()
    }
}
