use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(uuid(Comment::Id).primary_key())
                    .col(big_integer(Comment::MovieId))
                    .col(text(Comment::Message))
                    .col(string(Comment::IpAddress))
                    .col(timestamp(Comment::CreatedAt))
                    .col(timestamp_null(Comment::UpdatedAt))
                    .col(timestamp_null(Comment::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_comment_movie_id_created_at")
                    .table(Comment::Table)
                    .col(Comment::MovieId)
                    .col(Comment::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_comment_movie_id_created_at")
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    MovieId,
    Message,
    IpAddress,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
