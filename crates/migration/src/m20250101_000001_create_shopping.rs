//! Create `shopping` table.
//!
//! One row per list entry. `id` is a store-assigned `bigserial` (BIGINT
//! backed by a sequence).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn shopping_table() -> TableCreateStatement {
    Table::create()
        .table(Shopping::Table)
        .if_not_exists()
        .col(big_integer(Shopping::Id).auto_increment().primary_key())
        .col(
            text(Shopping::Title)
                .check(Expr::cust("char_length(btrim(title)) > 0")),
        )
        .col(
            timestamp_with_time_zone(Shopping::CreatedAt)
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(shopping_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shopping::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shopping { Table, Id, Title, CreatedAt }
