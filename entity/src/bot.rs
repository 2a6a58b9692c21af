use sea_orm::entity::prelude::*;

/// A listed Discord bot.
///
/// Keyed by the Discord application id. `long_desc` is interpreted according to
/// `kind` (stored in the `type` column).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub invite: String,
    pub count: i64,
    pub short_desc: String,
    #[sea_orm(column_type = "Text")]
    pub long_desc: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub owner: String,
    pub approved: bool,
    #[sea_orm(unique)]
    pub token: String,
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
