use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_brainstorm_session_table::BrainstormSession;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Idea::Table)
                    .if_not_exists()
                    .col(pk_auto(Idea::Id))
                    .col(integer(Idea::SessionId))
                    .col(string(Idea::Name))
                    .col(text(Idea::Description))
                    .col(timestamp_with_time_zone(Idea::DateCreated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_idea_session_id")
                            .from(Idea::Table, Idea::SessionId)
                            .to(BrainstormSession::Table, BrainstormSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_idea_session_id")
                    .table(Idea::Table)
                    .col(Idea::SessionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Idea::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Idea {
    Table,
    Id,
    SessionId,
    Name,
    Description,
    DateCreated,
}
