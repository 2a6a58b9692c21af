use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bot::Table)
                    .if_not_exists()
                    .col(string(Bot::Id).primary_key())
                    .col(string(Bot::Name))
                    .col(string(Bot::Avatar))
                    .col(string(Bot::Invite))
                    .col(big_integer(Bot::Count))
                    .col(string(Bot::ShortDesc))
                    .col(text(Bot::LongDesc))
                    .col(string(Bot::Type))
                    .col(string(Bot::Owner))
                    .col(boolean(Bot::Approved).default(false))
                    .col(string_uniq(Bot::Token))
                    .col(big_integer(Bot::Timestamp))
                    .to_owned(),
            )
            .await?;

        // Listing pages filter on approval and sort by submission time
        manager
            .create_index(
                Index::create()
                    .name("idx_bot_approved_timestamp")
                    .table(Bot::Table)
                    .col(Bot::Approved)
                    .col(Bot::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bot {
    Table,
    Id,
    Name,
    Avatar,
    Invite,
    Count,
    ShortDesc,
    LongDesc,
    Type,
    Owner,
    Approved,
    Token,
    Timestamp,
}
