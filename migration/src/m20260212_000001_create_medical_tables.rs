use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 医療検診のカタログ（検診種別・有害要因）と検診記録
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalExaminationTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicalExaminationTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminationTypes::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminationTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminationTypes::UpdatedAt)
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
                    .table(HarmfulFactors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HarmfulFactors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HarmfulFactors::ShortName)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(HarmfulFactors::FullName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HarmfulFactors::PeriodicityMonths)
                            .integer()
                            .not_null()
                            .default(12),
                    )
                    .col(
                        ColumnDef::new(HarmfulFactors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HarmfulFactors::UpdatedAt)
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
                    .table(MedicalExaminations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MedicalExaminations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::ExaminationTypeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::HarmfulFactorId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::DateCompleted)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::NextDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::Status)
                            .string_len(20)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MedicalExaminations::UpdatedAt)
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
                    .name("fk_medical_examinations_employee_id")
                    .from(
                        MedicalExaminations::Table,
                        MedicalExaminations::EmployeeId,
                    )
                    .to(Employees::Table, Employees::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_medical_examinations_examination_type_id")
                    .from(
                        MedicalExaminations::Table,
                        MedicalExaminations::ExaminationTypeId,
                    )
                    .to(
                        MedicalExaminationTypes::Table,
                        MedicalExaminationTypes::Id,
                    )
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_medical_examinations_harmful_factor_id")
                    .from(
                        MedicalExaminations::Table,
                        MedicalExaminations::HarmfulFactorId,
                    )
                    .to(HarmfulFactors::Table, HarmfulFactors::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 期限ダッシュボード用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(MedicalExaminations::Table)
                    .name("idx_medical_examinations_next_date")
                    .col(MedicalExaminations::NextDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(MedicalExaminations::Table)
                    .name("idx_medical_examinations_employee_id")
                    .col(MedicalExaminations::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalExaminations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HarmfulFactors::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(MedicalExaminationTypes::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum MedicalExaminationTypes {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HarmfulFactors {
    Table,
    Id,
    ShortName,
    FullName,
    PeriodicityMonths,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MedicalExaminations {
    Table,
    Id,
    EmployeeId,
    ExaminationTypeId,
    HarmfulFactorId,
    DateCompleted,
    NextDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
