use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectAdCopies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectAdCopies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectAdCopies::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProjectAdCopies::Channel)
                            .string_len(60)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectAdCopies::Title).text().not_null())
                    .col(ColumnDef::new(ProjectAdCopies::Description).text().not_null())
                    .col(ColumnDef::new(ProjectAdCopies::Keywords).text())
                    .col(
                        ColumnDef::new(ProjectAdCopies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectAdCopies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_ad_copies_project_id")
                            .from(ProjectAdCopies::Table, ProjectAdCopies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_ad_copies_project_id")
                    .table(ProjectAdCopies::Table)
                    .col(ProjectAdCopies::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_project_ad_copies_updated_at
                BEFORE UPDATE ON project_ad_copies
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_project_ad_copies_updated_at ON project_ad_copies",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectAdCopies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectAdCopies {
    Table,
    Id,
    ProjectId,
    Channel,
    Title,
    Description,
    Keywords,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
