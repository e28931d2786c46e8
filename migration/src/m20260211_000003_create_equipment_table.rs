use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Equipment::InventoryNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Equipment::EquipmentType)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(Equipment::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Equipment::SubdivisionId).uuid().null())
                    .col(ColumnDef::new(Equipment::DepartmentId).uuid().null())
                    .col(ColumnDef::new(Equipment::LastMaintenanceDate).date().null())
                    .col(ColumnDef::new(Equipment::NextMaintenanceDate).date().null())
                    .col(
                        ColumnDef::new(Equipment::MaintenancePeriodMonths)
                            .integer()
                            .not_null()
                            .default(12),
                    )
                    .col(
                        ColumnDef::new(Equipment::MaintenanceStatus)
                            .string_len(20)
                            .not_null()
                            .default("operational"),
                    )
                    .col(
                        ColumnDef::new(Equipment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Equipment::UpdatedAt)
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
                    .name("fk_equipment_organization_id")
                    .from(Equipment::Table, Equipment::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_equipment_subdivision_id")
                    .from(Equipment::Table, Equipment::SubdivisionId)
                    .to(Subdivisions::Table, Subdivisions::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_equipment_department_id")
                    .from(Equipment::Table, Equipment::DepartmentId)
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 期限ダッシュボード用（次回保守日の範囲検索）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Equipment::Table)
                    .name("idx_equipment_next_maintenance_date")
                    .col(Equipment::NextMaintenanceDate)
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
                    .table(Equipment::Table)
                    .name("idx_equipment_next_maintenance_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    InventoryNumber,
    EquipmentType,
    OrganizationId,
    SubdivisionId,
    DepartmentId,
    LastMaintenanceDate,
    NextMaintenanceDate,
    MaintenancePeriodMonths,
    MaintenanceStatus,
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
