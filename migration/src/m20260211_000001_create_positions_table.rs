use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Positions::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Positions::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Positions::SubdivisionId).uuid().null())
                    .col(ColumnDef::new(Positions::DepartmentId).uuid().null())
                    .col(
                        ColumnDef::new(Positions::ElectricalSafetyGroup)
                            .string_len(5)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Positions::IsSafetyResponsible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Positions::SafetyInstructions)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Positions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Positions::UpdatedAt)
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
                    .name("fk_positions_organization_id")
                    .from(Positions::Table, Positions::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_positions_subdivision_id")
                    .from(Positions::Table, Positions::SubdivisionId)
                    .to(Subdivisions::Table, Subdivisions::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_positions_department_id")
                    .from(Positions::Table, Positions::DepartmentId)
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 同一スコープ内での役職名の重複を禁止
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Positions::Table)
                    .name("idx_positions_name_scope")
                    .col(Positions::Name)
                    .col(Positions::OrganizationId)
                    .col(Positions::SubdivisionId)
                    .col(Positions::DepartmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Positions {
    Table,
    Id,
    Name,
    OrganizationId,
    SubdivisionId,
    DepartmentId,
    ElectricalSafetyGroup,
    IsSafetyResponsible,
    SafetyInstructions,
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
