// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 基本テーブル
mod m20260210_000001_create_users_table;
mod m20260210_000002_create_directory_tables;
mod m20260210_000003_create_access_profiles_tables;

// レコードテーブル（役職・従業員・設備）
mod m20260211_000001_create_positions_table;
mod m20260211_000002_create_employees_table;
mod m20260211_000003_create_equipment_table;

// 医療検診・個人保護具（SIZ）
mod m20260212_000001_create_medical_tables;
mod m20260212_000002_create_siz_tables;

// 初期データとインデックス
mod m20260213_000001_create_initial_superuser;
mod m20260213_000002_add_scope_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20260210_000001_create_users_table::Migration),
            Box::new(m20260210_000002_create_directory_tables::Migration),
            // 2. アクセスプロファイル（users・ディレクトリに依存）
            Box::new(m20260210_000003_create_access_profiles_tables::Migration),
            // 3. レコードテーブル（ディレクトリに依存）
            Box::new(m20260211_000001_create_positions_table::Migration),
            Box::new(m20260211_000002_create_employees_table::Migration),
            Box::new(m20260211_000003_create_equipment_table::Migration),
            // 4. 医療検診・SIZ（従業員・役職に依存）
            Box::new(m20260212_000001_create_medical_tables::Migration),
            Box::new(m20260212_000002_create_siz_tables::Migration),
            // 5. 初期スーパーユーザーとスコープインデックス
            Box::new(m20260213_000001_create_initial_superuser::Migration),
            Box::new(m20260213_000002_add_scope_indexes::Migration),
        ]
    }
}
