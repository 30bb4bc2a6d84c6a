//! Schema migration for the `configuration` table
//!
//! One table holds all durable state. The unique index on
//! (service, version) is the single source of truth for version
//! uniqueness; the (service, created_at) index supports latest-lookup and
//! history listing.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250810_000001_create_configuration::Migration)]
    }
}

mod m20250810_000001_create_configuration {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Configuration::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Configuration::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Configuration::Service).string().not_null())
                        .col(
                            ColumnDef::new(Configuration::Version)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Configuration::Payload).text().not_null())
                        .col(
                            ColumnDef::new(Configuration::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uk_configuration_service_version")
                        .table(Configuration::Table)
                        .col(Configuration::Service)
                        .col(Configuration::Version)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_configuration_service_created_at")
                        .table(Configuration::Table)
                        .col(Configuration::Service)
                        .col(Configuration::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Configuration::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Configuration {
        Table,
        Id,
        Service,
        Version,
        Payload,
        CreatedAt,
    }
}
