use sea_orm_migration::prelude::*;

/// Creates the `game` table holding the imported catalog.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Title,
    Platform,
    Genre,
    State,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Game::Platform).string_len(100).not_null())
                    .col(ColumnDef::new(Game::Genre).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Game::State)
                            .string_len(20)
                            .not_null()
                            .default("BACKLOG"),
                    )
                    .col(
                        ColumnDef::new(Game::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Game::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Default listing order is most recently updated first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_updated_at")
                    .table(Game::Table)
                    .col(Game::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_state")
                    .table(Game::Table)
                    .col(Game::State)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_platform")
                    .table(Game::Table)
                    .col(Game::Platform)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_genre")
                    .table(Game::Table)
                    .col(Game::Genre)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}
