use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 組織 → 構造的部門 → 課 の3階層ディレクトリテーブル
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organizations::FullName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organizations::ShortName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organizations::Requisites).text().null())
                    .col(
                        ColumnDef::new(Organizations::Location)
                            .string_len(100)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Organizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Organizations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subdivisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subdivisions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subdivisions::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subdivisions::ShortName)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Subdivisions::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subdivisions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Subdivisions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_subdivisions_organization_id")
                    .from(Subdivisions::Table, Subdivisions::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 同一組織内での部門名の重複を禁止
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Subdivisions::Table)
                    .name("idx_subdivisions_name_organization")
                    .col(Subdivisions::Name)
                    .col(Subdivisions::OrganizationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::ShortName)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Departments::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Departments::SubdivisionId).uuid().null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_departments_organization_id")
                    .from(Departments::Table, Departments::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_departments_subdivision_id")
                    .from(Departments::Table, Departments::SubdivisionId)
                    .to(Subdivisions::Table, Subdivisions::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Departments::Table)
                    .name("idx_departments_name_organization_subdivision")
                    .col(Departments::Name)
                    .col(Departments::OrganizationId)
                    .col(Departments::SubdivisionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 階層解決クエリ用（組織・部門からの子検索）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Subdivisions::Table)
                    .name("idx_subdivisions_organization_id")
                    .col(Subdivisions::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Departments::Table)
                    .name("idx_departments_organization_id")
                    .col(Departments::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Departments::Table)
                    .name("idx_departments_subdivision_id")
                    .col(Departments::SubdivisionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subdivisions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
    FullName,
    ShortName,
    Requisites,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subdivisions {
    Table,
    Id,
    Name,
    ShortName,
    OrganizationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
    Name,
    ShortName,
    OrganizationId,
    SubdivisionId,
    CreatedAt,
    UpdatedAt,
}
