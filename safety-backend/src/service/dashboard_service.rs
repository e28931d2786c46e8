// src/service/dashboard_service.rs
//
// 期限ダッシュボード: スコープ内の保守・検診期限の集計。
// 候補を日付で絞って取得し、可視性はメモリ内フィルタで適用する。

use crate::access::{AccessContext, AccessControlService};
use crate::domain::{employee_model, equipment_model, medical_examination_model};
use crate::error::AppResult;
use crate::repository::{
    equipment_repository::EquipmentRepository,
    medical_examination_repository::MedicalExaminationRepository,
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// 期限が近い・切れている項目の表示上限
const DEADLINE_ITEM_LIMIT: usize = 10;
/// 「期限が近い」と見なす日数
const DUE_SOON_DAYS: i64 = 30;

pub struct DashboardService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

#[derive(Debug, Serialize)]
pub struct MaintenanceDeadline {
    pub equipment_id: Uuid,
    pub name: String,
    pub inventory_number: String,
    pub next_maintenance_date: NaiveDate,
    pub overdue: bool,
}

#[derive(Debug, Serialize)]
pub struct ExaminationDeadline {
    pub examination_id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub next_date: NaiveDate,
    pub overdue: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub maintenance_overdue: usize,
    pub maintenance_due_soon: usize,
    pub examinations_overdue: usize,
    pub examinations_due_soon: usize,
    pub upcoming_maintenance: Vec<MaintenanceDeadline>,
    pub upcoming_examinations: Vec<ExaminationDeadline>,
}

impl DashboardService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    pub async fn get_summary(&self, context: &AccessContext) -> AppResult<DashboardSummary> {
        let today = Utc::now().date_naive();
        let horizon = today + Duration::days(DUE_SOON_DAYS);

        let equipment = self.visible_equipment_due(context, horizon).await?;
        let examinations = self.visible_examinations_due(context, horizon).await?;

        let maintenance_overdue = equipment
            .iter()
            .filter(|e| e.is_maintenance_overdue(today))
            .count();
        let maintenance_due_soon = equipment
            .iter()
            .filter(|e| e.is_maintenance_due_soon(today, DUE_SOON_DAYS))
            .count();

        let examinations_overdue = examinations
            .iter()
            .filter(|(examination, _)| examination.is_overdue(today))
            .count();
        let examinations_due_soon = examinations
            .iter()
            .filter(|(examination, _)| examination.is_due_soon(today, DUE_SOON_DAYS))
            .count();

        let upcoming_maintenance = equipment
            .into_iter()
            .filter_map(|equipment| {
                let next = equipment.next_maintenance_date?;
                Some(MaintenanceDeadline {
                    equipment_id: equipment.id,
                    name: equipment.name,
                    inventory_number: equipment.inventory_number,
                    next_maintenance_date: next,
                    overdue: next < today,
                })
            })
            .take(DEADLINE_ITEM_LIMIT)
            .collect();

        let upcoming_examinations = examinations
            .into_iter()
            .map(|(examination, employee)| ExaminationDeadline {
                examination_id: examination.id,
                employee_id: examination.employee_id,
                employee_name: employee.full_name,
                next_date: examination.next_date,
                overdue: examination.next_date < today,
            })
            .take(DEADLINE_ITEM_LIMIT)
            .collect();

        Ok(DashboardSummary {
            maintenance_overdue,
            maintenance_due_soon,
            examinations_overdue,
            examinations_due_soon,
            upcoming_maintenance,
            upcoming_examinations,
        })
    }

    /// 期限が指定日以前の設備のうち、呼び出し元に可視なもの
    async fn visible_equipment_due(
        &self,
        context: &AccessContext,
        before: NaiveDate,
    ) -> AppResult<Vec<equipment_model::Model>> {
        let due = EquipmentRepository::find_maintenance_due_before(&self.db, before).await?;
        self.access.filter_records(context, due).await
    }

    /// 期限が指定日以前の検診のうち、対象従業員が可視なもの
    async fn visible_examinations_due(
        &self,
        context: &AccessContext,
        before: NaiveDate,
    ) -> AppResult<Vec<(medical_examination_model::Model, employee_model::Model)>> {
        let due =
            MedicalExaminationRepository::find_due_before_with_employees(&self.db, before).await?;

        let scopes = self.access.scopes(context).await?;

        // 検診記録の可視性は従業員のスコープに従う
        let visible = due
            .into_iter()
            .filter_map(|(examination, employee)| {
                let employee = employee?;
                scopes.is_visible(&employee).then_some((examination, employee))
            })
            .collect();

        Ok(visible)
    }
}
