//! Create `ads` table with FK to `users`.
//! `img` holds the asset reference and may be absent for ads written directly through the store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(pk_auto(Ads::Id))
                    .col(integer(Ads::UserId).not_null())
                    .col(string_len(Ads::Title, 200).not_null())
                    .col(text(Ads::Content).not_null())
                    .col(
                        ColumnDef::new(Ads::Img)
                            .string_len(512)
                            .null(),
                    )
                    .col(boolean(Ads::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(Ads::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ads_user")
                            .from(Ads::Table, Ads::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ads::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ads {
    Table,
    Id,
    UserId,
    Title,
    Content,
    Img,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
