// src/domain/equipment_model.rs

use crate::access::scope::{HierarchyScoped, ScopeFields, ScopeRef};
use chrono::{DateTime, Months, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 設備の保守ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Operational,
    NeedsMaintenance,
    InMaintenance,
    OutOfOrder,
}

impl MaintenanceStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "operational" => Some(Self::Operational),
            "needs_maintenance" => Some(Self::NeedsMaintenance),
            "in_maintenance" => Some(Self::InMaintenance),
            "out_of_order" => Some(Self::OutOfOrder),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::NeedsMaintenance => "needs_maintenance",
            Self::InMaintenance => "in_maintenance",
            Self::OutOfOrder => "out_of_order",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 設備（保守期限管理付き）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub inventory_number: String,

    #[sea_orm(nullable)]
    pub equipment_type: Option<String>,

    pub organization_id: Uuid,

    #[sea_orm(nullable)]
    pub subdivision_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub department_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub last_maintenance_date: Option<NaiveDate>,

    #[sea_orm(nullable)]
    pub next_maintenance_date: Option<NaiveDate>,

    pub maintenance_period_months: i32,

    pub maintenance_status: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization_model::Entity",
        from = "Column::OrganizationId",
        to = "super::organization_model::Column::Id"
    )]
    Organization,
    #[sea_orm(
        belongs_to = "super::subdivision_model::Entity",
        from = "Column::SubdivisionId",
        to = "super::subdivision_model::Column::Id"
    )]
    Subdivision,
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DepartmentId",
        to = "super::department_model::Column::Id"
    )]
    Department,
}

impl Related<super::organization_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl HierarchyScoped for Model {
    const SCOPE_FIELDS: ScopeFields = ScopeFields::FULL;

    fn scope_ref(&self) -> ScopeRef {
        ScopeRef {
            organization: Some(self.organization_id),
            subdivision: self.subdivision_id,
            department: self.department_id,
        }
    }
}

impl Model {
    pub fn maintenance_status(&self) -> Option<MaintenanceStatus> {
        MaintenanceStatus::from_str(&self.maintenance_status)
    }

    /// 実施日と周期から次回保守日を計算
    pub fn compute_next_maintenance_date(
        performed_on: NaiveDate,
        period_months: i32,
    ) -> Option<NaiveDate> {
        let months = u32::try_from(period_months).ok()?;
        performed_on.checked_add_months(Months::new(months))
    }

    /// 保守期限切れか
    pub fn is_maintenance_overdue(&self, today: NaiveDate) -> bool {
        match self.next_maintenance_date {
            Some(next) => next < today,
            None => false,
        }
    }

    /// 保守期限が指定日数以内に迫っているか（期限切れは除く）
    pub fn is_maintenance_due_soon(&self, today: NaiveDate, within_days: i64) -> bool {
        match self.next_maintenance_date {
            Some(next) => next >= today && (next - today).num_days() <= within_days,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(next: Option<NaiveDate>) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "Hoist".to_string(),
            inventory_number: "INV-001".to_string(),
            equipment_type: None,
            organization_id: Uuid::new_v4(),
            subdivision_id: None,
            department_id: None,
            last_maintenance_date: None,
            next_maintenance_date: next,
            maintenance_period_months: 12,
            maintenance_status: "operational".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_maintenance_date_adds_period() {
        let next = Model::compute_next_maintenance_date(date(2026, 1, 31), 1).unwrap();
        // 月末はクランプされる
        assert_eq!(next, date(2026, 2, 28));

        let next = Model::compute_next_maintenance_date(date(2026, 3, 15), 12).unwrap();
        assert_eq!(next, date(2027, 3, 15));
    }

    #[test]
    fn test_overdue_and_due_soon() {
        let today = date(2026, 6, 1);

        let overdue = equipment(Some(date(2026, 5, 20)));
        assert!(overdue.is_maintenance_overdue(today));
        assert!(!overdue.is_maintenance_due_soon(today, 30));

        let due_soon = equipment(Some(date(2026, 6, 20)));
        assert!(!due_soon.is_maintenance_overdue(today));
        assert!(due_soon.is_maintenance_due_soon(today, 30));

        let far = equipment(Some(date(2026, 9, 1)));
        assert!(!far.is_maintenance_overdue(today));
        assert!(!far.is_maintenance_due_soon(today, 30));

        let unscheduled = equipment(None);
        assert!(!unscheduled.is_maintenance_overdue(today));
        assert!(!unscheduled.is_maintenance_due_soon(today, 30));
    }
}
