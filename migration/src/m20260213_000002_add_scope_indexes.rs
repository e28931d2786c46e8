use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// スコープフィルタの実行計画改善用インデックス
// 一覧系クエリは organization/subdivision/department で絞り込むため
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name, column) in Self::scope_indexes() {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .table(table)
                        .name(name)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name, _column) in Self::scope_indexes() {
            manager
                .drop_index(Index::drop().if_exists().table(table).name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

impl Migration {
    fn scope_indexes() -> Vec<(Alias, &'static str, Alias)> {
        let idx = |table: &str, name: &'static str, column: &str| {
            (Alias::new(table), name, Alias::new(column))
        };

        vec![
            idx(
                "positions",
                "idx_positions_organization_id",
                "organization_id",
            ),
            idx("positions", "idx_positions_subdivision_id", "subdivision_id"),
            idx("positions", "idx_positions_department_id", "department_id"),
            idx(
                "employees",
                "idx_employees_organization_id",
                "organization_id",
            ),
            idx("employees", "idx_employees_subdivision_id", "subdivision_id"),
            idx("employees", "idx_employees_department_id", "department_id"),
            idx(
                "equipment",
                "idx_equipment_organization_id",
                "organization_id",
            ),
            idx("equipment", "idx_equipment_subdivision_id", "subdivision_id"),
            idx("equipment", "idx_equipment_department_id", "department_id"),
        ]
    }
}
