use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ads: owner lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_ads_user")
                    .table(Ads::Table)
                    .col(Ads::UserId)
                    .to_owned(),
            )
            .await?;

        // Ads: recency paging over every ad
        manager
            .create_index(
                Index::create()
                    .name("idx_ads_created_at")
                    .table(Ads::Table)
                    .col(Ads::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Ads: active listings ordered by recency
        manager
            .create_index(
                Index::create()
                    .name("idx_ads_active_created_at")
                    .table(Ads::Table)
                    .col(Ads::Active)
                    .col(Ads::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_ads_user").table(Ads::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ads_created_at").table(Ads::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ads_active_created_at").table(Ads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ads {
    Table,
    UserId,
    Active,
    CreatedAt,
}
