use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::FullName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::DateOfBirth).date().null())
                    .col(ColumnDef::new(Employees::Email).string_len(255).null())
                    .col(ColumnDef::new(Employees::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Employees::SubdivisionId).uuid().null())
                    .col(ColumnDef::new(Employees::DepartmentId).uuid().null())
                    .col(ColumnDef::new(Employees::PositionId).uuid().not_null())
                    .col(
                        ColumnDef::new(Employees::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(ColumnDef::new(Employees::HireDate).date().null())
                    .col(ColumnDef::new(Employees::Height).string_len(15).null())
                    .col(ColumnDef::new(Employees::ClothingSize).string_len(5).null())
                    .col(ColumnDef::new(Employees::ShoeSize).string_len(2).null())
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employees::UpdatedAt)
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
                    .name("fk_employees_organization_id")
                    .from(Employees::Table, Employees::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_employees_subdivision_id")
                    .from(Employees::Table, Employees::SubdivisionId)
                    .to(Subdivisions::Table, Subdivisions::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_employees_department_id")
                    .from(Employees::Table, Employees::DepartmentId)
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_employees_position_id")
                    .from(Employees::Table, Employees::PositionId)
                    .to(Positions::Table, Positions::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // ステータスでの絞り込み用（在籍者一覧など）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Employees::Table)
                    .name("idx_employees_status")
                    .col(Employees::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Employees::Table)
                    .name("idx_employees_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    FullName,
    DateOfBirth,
    Email,
    OrganizationId,
    SubdivisionId,
    DepartmentId,
    PositionId,
    Status,
    HireDate,
    Height,
    ClothingSize,
    ShoeSize,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Subdivisions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Positions {
    Table,
    Id,
}
