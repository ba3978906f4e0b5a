use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(ColumnDef::new(Posts::Summary).text())
                    .col(ColumnDef::new(Posts::Category).string().not_null())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Named CHECK constraints so write errors map back to the
        // validation taxonomy by name. The clickbait title policy has no
        // declarative counterpart; it lives in the field validators only.
        let db = manager.get_connection();
        db.execute_unprepared(
            "ALTER TABLE posts ADD CONSTRAINT content_length_constraint \
             CHECK (char_length(content) >= 250)",
        )
        .await?;
        db.execute_unprepared(
            "ALTER TABLE posts ADD CONSTRAINT summary_length_constraint \
             CHECK (char_length(summary) <= 250)",
        )
        .await?;
        db.execute_unprepared(
            "ALTER TABLE posts ADD CONSTRAINT valid_category_constraint \
             CHECK (category IN ('Fiction', 'Non-Fiction'))",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Content,
    Summary,
    Category,
    CreatedAt,
    UpdatedAt,
}
