use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SentPing::Table)
                    .if_not_exists()
                    .col(string(SentPing::Key).primary_key())
                    .col(string(SentPing::EventId))
                    .col(big_integer(SentPing::OffsetSeconds))
                    .col(
                        timestamp_with_time_zone(SentPing::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup of every fired offset for one event
        manager
            .create_index(
                Index::create()
                    .name("idx_sent_ping_event_id")
                    .table(SentPing::Table)
                    .col(SentPing::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sent_ping_event_id")
                    .table(SentPing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SentPing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SentPing {
    Table,
    Key,
    EventId,
    OffsetSeconds,
    SentAt,
}
