// src/domain/employee_status.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 従業員の在籍ステータスを表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Candidate,
    Active,
    MaternityLeave,
    PartTime,
    Fired,
}

impl EmployeeStatus {
    /// 文字列からEmployeeStatusに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "candidate" => Some(Self::Candidate),
            "active" => Some(Self::Active),
            "maternity_leave" => Some(Self::MaternityLeave),
            "part_time" => Some(Self::PartTime),
            "fired" => Some(Self::Fired),
            _ => None,
        }
    }

    /// EmployeeStatusを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Active => "active",
            Self::MaternityLeave => "maternity_leave",
            Self::PartTime => "part_time",
            Self::Fired => "fired",
        }
    }

    /// 組織ツリーに表示されるステータスか（候補者・退職者を除く）
    pub fn is_listed(&self) -> bool {
        !matches!(self, Self::Candidate | Self::Fired)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for status in [
            EmployeeStatus::Candidate,
            EmployeeStatus::Active,
            EmployeeStatus::MaternityLeave,
            EmployeeStatus::PartTime,
            EmployeeStatus::Fired,
        ] {
            assert_eq!(EmployeeStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(EmployeeStatus::from_str("unknown"), None);
    }

    #[test]
    fn test_listed_statuses() {
        assert!(EmployeeStatus::Active.is_listed());
        assert!(!EmployeeStatus::Candidate.is_listed());
        assert!(!EmployeeStatus::Fired.is_listed());
    }
}
