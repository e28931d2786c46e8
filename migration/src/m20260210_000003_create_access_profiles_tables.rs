use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// アクセスプロファイルと3つのスコープ付与テーブル
// 付与は組織・部門・課の各レベルで独立に管理される
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccessProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AccessProfiles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AccessProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AccessProfiles::UpdatedAt)
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
                    .name("fk_access_profiles_user_id")
                    .from(AccessProfiles::Table, AccessProfiles::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessProfileOrganizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessProfileOrganizations::ProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessProfileOrganizations::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AccessProfileOrganizations::ProfileId)
                            .col(AccessProfileOrganizations::OrganizationId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_organizations_profile_id")
                    .from(
                        AccessProfileOrganizations::Table,
                        AccessProfileOrganizations::ProfileId,
                    )
                    .to(AccessProfiles::Table, AccessProfiles::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_organizations_organization_id")
                    .from(
                        AccessProfileOrganizations::Table,
                        AccessProfileOrganizations::OrganizationId,
                    )
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessProfileSubdivisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessProfileSubdivisions::ProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessProfileSubdivisions::SubdivisionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AccessProfileSubdivisions::ProfileId)
                            .col(AccessProfileSubdivisions::SubdivisionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_subdivisions_profile_id")
                    .from(
                        AccessProfileSubdivisions::Table,
                        AccessProfileSubdivisions::ProfileId,
                    )
                    .to(AccessProfiles::Table, AccessProfiles::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_subdivisions_subdivision_id")
                    .from(
                        AccessProfileSubdivisions::Table,
                        AccessProfileSubdivisions::SubdivisionId,
                    )
                    .to(Subdivisions::Table, Subdivisions::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessProfileDepartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessProfileDepartments::ProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessProfileDepartments::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AccessProfileDepartments::ProfileId)
                            .col(AccessProfileDepartments::DepartmentId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_departments_profile_id")
                    .from(
                        AccessProfileDepartments::Table,
                        AccessProfileDepartments::ProfileId,
                    )
                    .to(AccessProfiles::Table, AccessProfiles::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_access_profile_departments_department_id")
                    .from(
                        AccessProfileDepartments::Table,
                        AccessProfileDepartments::DepartmentId,
                    )
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AccessProfileDepartments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AccessProfileSubdivisions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(AccessProfileOrganizations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccessProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AccessProfiles {
    Table,
    Id,
    UserId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AccessProfileOrganizations {
    Table,
    ProfileId,
    OrganizationId,
}

#[derive(DeriveIden)]
enum AccessProfileSubdivisions {
    Table,
    ProfileId,
    SubdivisionId,
}

#[derive(DeriveIden)]
enum AccessProfileDepartments {
    Table,
    ProfileId,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
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
