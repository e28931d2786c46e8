// src/domain/medical_examination_model.rs

use chrono::{DateTime, Months, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 検診記録のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExaminationStatus {
    Scheduled,
    Completed,
    Overdue,
}

impl ExaminationStatus {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ExaminationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 従業員の検診記録
///
/// 帰属フィールドは持たず、可視性は従業員のスコープに従う。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_examinations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub employee_id: Uuid,

    pub examination_type_id: Uuid,

    #[sea_orm(nullable)]
    pub harmful_factor_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub date_completed: Option<NaiveDate>,

    pub next_date: NaiveDate,

    pub status: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::medical_examination_type_model::Entity",
        from = "Column::ExaminationTypeId",
        to = "super::medical_examination_type_model::Column::Id"
    )]
    ExaminationType,
    #[sea_orm(
        belongs_to = "super::harmful_factor_model::Entity",
        from = "Column::HarmfulFactorId",
        to = "super::harmful_factor_model::Column::Id"
    )]
    HarmfulFactor,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::medical_examination_type_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExaminationType.def()
    }
}

impl Related<super::harmful_factor_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HarmfulFactor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn status(&self) -> Option<ExaminationStatus> {
        ExaminationStatus::from_str(&self.status)
    }

    /// 実施日と周期から次回検診日を計算
    pub fn compute_next_date(completed_on: NaiveDate, periodicity_months: i32) -> Option<NaiveDate> {
        let months = u32::try_from(periodicity_months).ok()?;
        completed_on.checked_add_months(Months::new(months))
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.date_completed.is_none() && self.next_date < today
    }

    pub fn is_due_soon(&self, today: NaiveDate, within_days: i64) -> bool {
        self.date_completed.is_none()
            && self.next_date >= today
            && (self.next_date - today).num_days() <= within_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn examination(next_date: NaiveDate, date_completed: Option<NaiveDate>) -> Model {
        Model {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            examination_type_id: Uuid::new_v4(),
            harmful_factor_id: None,
            date_completed,
            next_date,
            status: "scheduled".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_compute_next_date() {
        assert_eq!(
            Model::compute_next_date(date(2026, 1, 15), 12),
            Some(date(2027, 1, 15))
        );
        assert_eq!(Model::compute_next_date(date(2026, 1, 15), -1), None);
    }

    #[test]
    fn test_overdue_ignores_completed_examinations() {
        let today = date(2026, 6, 1);

        let pending = examination(date(2026, 5, 1), None);
        assert!(pending.is_overdue(today));

        let completed = examination(date(2026, 5, 1), Some(date(2026, 4, 28)));
        assert!(!completed.is_overdue(today));
    }

    #[test]
    fn test_due_soon_window() {
        let today = date(2026, 6, 1);

        let inside = examination(date(2026, 6, 20), None);
        assert!(inside.is_due_soon(today, 30));

        let outside = examination(date(2026, 8, 1), None);
        assert!(!outside.is_due_soon(today, 30));
    }
}
