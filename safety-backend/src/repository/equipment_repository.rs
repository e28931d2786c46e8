use crate::domain::equipment_model::{self, Entity as Equipment};
use crate::error::AppError;
use chrono::NaiveDate;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct EquipmentRepository;

impl EquipmentRepository {
    pub async fn create(
        db: &DatabaseConnection,
        equipment: equipment_model::ActiveModel,
    ) -> Result<equipment_model::Model, AppError> {
        let result = equipment.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<equipment_model::Model>, AppError> {
        let result = Equipment::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_by_inventory_number(
        db: &DatabaseConnection,
        inventory_number: &str,
    ) -> Result<Option<equipment_model::Model>, AppError> {
        let result = Equipment::find()
            .filter(equipment_model::Column::InventoryNumber.eq(inventory_number))
            .one(db)
            .await?;
        Ok(result)
    }

    /// スコープ条件付きの一覧（ページネーション・検索・ステータス絞り込み付き）
    pub async fn find_scoped(
        db: &DatabaseConnection,
        scope_condition: Condition,
        search: Option<&str>,
        maintenance_status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> Result<(Vec<equipment_model::Model>, u64), AppError> {
        let mut condition = Condition::all().add(scope_condition);

        if let Some(search_term) = search {
            let search_pattern = format!("%{}%", search_term);
            condition = condition.add(
                Condition::any()
                    .add(equipment_model::Column::Name.like(&search_pattern))
                    .add(equipment_model::Column::InventoryNumber.like(&search_pattern)),
            );
        }

        if let Some(status) = maintenance_status {
            condition = condition.add(equipment_model::Column::MaintenanceStatus.eq(status));
        }

        let query = Equipment::find()
            .filter(condition)
            .order_by_asc(equipment_model::Column::Name);

        let paginator = query.paginate(db, per_page as u64);
        let total_count = paginator.num_items().await?;
        let equipment = paginator.fetch_page((page - 1) as u64).await?;

        Ok((equipment, total_count))
    }

    /// 次回保守日が指定日以前の設備（期限ダッシュボード用、スコープはメモリ側で適用）
    pub async fn find_maintenance_due_before(
        db: &DatabaseConnection,
        before: NaiveDate,
    ) -> Result<Vec<equipment_model::Model>, AppError> {
        let result = Equipment::find()
            .filter(equipment_model::Column::NextMaintenanceDate.is_not_null())
            .filter(equipment_model::Column::NextMaintenanceDate.lte(before))
            .order_by_asc(equipment_model::Column::NextMaintenanceDate)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        equipment: equipment_model::ActiveModel,
    ) -> Result<equipment_model::Model, AppError> {
        let mut active_model = equipment;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Equipment::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
