pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users_table;
mod m20261001_000002_create_roles_and_tokens;
mod m20261001_000003_create_billing_tables;
mod m20261001_000004_create_projects_and_images;
mod m20261001_000005_create_enhancement_jobs;
mod m20261001_000006_create_listings;
mod m20261001_000007_create_project_ad_copies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users_table::Migration),
            Box::new(m20261001_000002_create_roles_and_tokens::Migration),
            Box::new(m20261001_000003_create_billing_tables::Migration),
            Box::new(m20261001_000004_create_projects_and_images::Migration),
            Box::new(m20261001_000005_create_enhancement_jobs::Migration),
            Box::new(m20261001_000006_create_listings::Migration),
            Box::new(m20261001_000007_create_project_ad_copies::Migration),
        ]
    }
}
