use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 個人保護具（SIZ）のカタログ・支給基準・支給記録
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SizItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SizItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SizItems::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(SizItems::Classification)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SizItems::Unit)
                            .string_len(50)
                            .not_null()
                            .default("шт."),
                    )
                    .col(
                        ColumnDef::new(SizItems::WearPeriodMonths)
                            .integer()
                            .not_null()
                            .default(12),
                    )
                    .col(
                        ColumnDef::new(SizItems::WearType)
                            .string_len(20)
                            .not_null()
                            .default("constant"),
                    )
                    .col(
                        ColumnDef::new(SizItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SizItems::UpdatedAt)
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
                    .table(SizNorms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SizNorms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SizNorms::PositionId).uuid().not_null())
                    .col(ColumnDef::new(SizNorms::SizItemId).uuid().not_null())
                    .col(
                        ColumnDef::new(SizNorms::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(SizNorms::Condition).string_len(255).null())
                    .col(
                        ColumnDef::new(SizNorms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SizNorms::UpdatedAt)
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
                    .name("fk_siz_norms_position_id")
                    .from(SizNorms::Table, SizNorms::PositionId)
                    .to(Positions::Table, Positions::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_siz_norms_siz_item_id")
                    .from(SizNorms::Table, SizNorms::SizItemId)
                    .to(SizItems::Table, SizItems::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 同一役職・同一保護具・同一条件の基準は一意
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SizNorms::Table)
                    .name("idx_siz_norms_position_item_condition")
                    .col(SizNorms::PositionId)
                    .col(SizNorms::SizItemId)
                    .col(SizNorms::Condition)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SizIssues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SizIssues::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SizIssues::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(SizIssues::SizItemId).uuid().not_null())
                    .col(ColumnDef::new(SizIssues::IssueDate).date().not_null())
                    .col(
                        ColumnDef::new(SizIssues::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(SizIssues::WearPercent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(SizIssues::ReturnDate).date().null())
                    .col(
                        ColumnDef::new(SizIssues::IsReturned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SizIssues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SizIssues::UpdatedAt)
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
                    .name("fk_siz_issues_employee_id")
                    .from(SizIssues::Table, SizIssues::EmployeeId)
                    .to(Employees::Table, Employees::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_siz_issues_siz_item_id")
                    .from(SizIssues::Table, SizIssues::SizItemId)
                    .to(SizItems::Table, SizItems::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SizIssues::Table)
                    .name("idx_siz_issues_employee_id")
                    .col(SizIssues::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SizIssues::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SizNorms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SizItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SizItems {
    Table,
    Id,
    Name,
    Classification,
    Unit,
    WearPeriodMonths,
    WearType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SizNorms {
    Table,
    Id,
    PositionId,
    SizItemId,
    Quantity,
    Condition,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SizIssues {
    Table,
    Id,
    EmployeeId,
    SizItemId,
    IssueDate,
    Quantity,
    WearPercent,
    ReturnDate,
    IsReturned,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Positions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
