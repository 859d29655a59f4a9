use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // listings
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Listings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Listings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Listings::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(Listings::Title).text().not_null())
                    .col(ColumnDef::new(Listings::Description).text())
                    .col(ColumnDef::new(Listings::Price).double())
                    .col(ColumnDef::new(Listings::Currency).string_len(3))
                    .col(ColumnDef::new(Listings::LocationCity).string_len(120))
                    .col(ColumnDef::new(Listings::LocationState).string_len(120))
                    .col(ColumnDef::new(Listings::LocationCountry).string_len(120))
                    .col(ColumnDef::new(Listings::PropertyType).string_len(60))
                    .col(ColumnDef::new(Listings::Bedrooms).integer())
                    .col(ColumnDef::new(Listings::Bathrooms).integer())
                    .col(ColumnDef::new(Listings::AreaSqm).double())
                    .col(
                        ColumnDef::new(Listings::Status)
                            .text()
                            .not_null()
                            .default("DRAFT"),
                    )
                    .col(
                        ColumnDef::new(Listings::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Listings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Listings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_user_id")
                            .from(Listings::Table, Listings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_project_id")
                            .from(Listings::Table, Listings::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE listings
                ADD CONSTRAINT chk_listings_status
                CHECK (status IN ('DRAFT', 'PUBLISHED', 'ARCHIVED'));

                CREATE INDEX idx_listings_user_created
                ON listings (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Marketplace search only ever touches published rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listings_published_city
                ON listings (location_city, created_at DESC)
                WHERE is_published = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_listings_updated_at
                BEFORE UPDATE ON listings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        // =====================================================
        // listing_media
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ListingMedia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListingMedia::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListingMedia::ListingId).uuid().not_null())
                    .col(
                        ColumnDef::new(ListingMedia::ImageVersionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListingMedia::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ListingMedia::IsHero)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_media_listing_id")
                            .from(ListingMedia::Table, ListingMedia::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_media_image_version_id")
                            .from(ListingMedia::Table, ListingMedia::ImageVersionId)
                            .to(ImageVersions::Table, ImageVersions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_listing_media_listing_order
                ON listing_media (listing_id, sort_order);

                CREATE UNIQUE INDEX idx_listing_media_one_hero
                ON listing_media (listing_id)
                WHERE is_hero;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListingMedia::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_listings_updated_at ON listings")
            .await?;

        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    Id,
    UserId,
    ProjectId,
    Title,
    Description,
    Price,
    Currency,
    LocationCity,
    LocationState,
    LocationCountry,
    PropertyType,
    Bedrooms,
    Bathrooms,
    AreaSqm,
    Status,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ListingMedia {
    Table,
    Id,
    ListingId,
    ImageVersionId,
    SortOrder,
    IsHero,
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
enum ImageVersions {
    Table,
    Id,
}
