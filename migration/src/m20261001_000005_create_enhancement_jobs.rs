use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnhancementJobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnhancementJobs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EnhancementJobs::UserId).uuid().not_null())
                    .col(ColumnDef::new(EnhancementJobs::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(EnhancementJobs::ImageId).uuid().not_null())
                    .col(
                        ColumnDef::new(EnhancementJobs::Status)
                            .text()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(EnhancementJobs::ResultVersionId).uuid())
                    .col(
                        ColumnDef::new(EnhancementJobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EnhancementJobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enhancement_jobs_user_id")
                            .from(EnhancementJobs::Table, EnhancementJobs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enhancement_jobs_project_id")
                            .from(EnhancementJobs::Table, EnhancementJobs::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enhancement_jobs_image_id")
                            .from(EnhancementJobs::Table, EnhancementJobs::ImageId)
                            .to(Images::Table, Images::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enhancement_jobs_result_version_id")
                            .from(EnhancementJobs::Table, EnhancementJobs::ResultVersionId)
                            .to(ImageVersions::Table, ImageVersions::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE enhancement_jobs
                ADD CONSTRAINT chk_enhancement_jobs_status
                CHECK (status IN ('PENDING', 'COMPLETED'));

                CREATE INDEX idx_enhancement_jobs_project_created
                ON enhancement_jobs (project_id, created_at DESC);

                CREATE INDEX idx_enhancement_jobs_user_id
                ON enhancement_jobs (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_enhancement_jobs_updated_at
                BEFORE UPDATE ON enhancement_jobs
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
                "DROP TRIGGER IF EXISTS update_enhancement_jobs_updated_at ON enhancement_jobs",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EnhancementJobs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EnhancementJobs {
    Table,
    Id,
    UserId,
    ProjectId,
    ImageId,
    Status,
    ResultVersionId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Images {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ImageVersions {
    Table,
    Id,
}
