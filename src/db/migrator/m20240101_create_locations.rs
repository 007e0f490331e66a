use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::SearchQuery).string().not_null())
                    .col(ColumnDef::new(Locations::FormattedQuery).text().not_null())
                    .col(ColumnDef::new(Locations::Latitude).string().not_null())
                    .col(ColumnDef::new(Locations::Longitude).string().not_null())
                    .col(ColumnDef::new(Locations::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Not unique: racing cache misses may each insert a row for the same query.
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_search_query")
                    .table(Locations::Table)
                    .col(Locations::SearchQuery)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    SearchQuery,
    FormattedQuery,
    Latitude,
    Longitude,
    CreatedAt,
}
