// src/domain/mod.rs
pub mod access_grant_model;
pub mod access_profile_model;
pub mod department_model;
pub mod employee_model;
pub mod employee_status;
pub mod equipment_model;
pub mod harmful_factor_model;
pub mod medical_examination_model;
pub mod medical_examination_type_model;
pub mod organization_model;
pub mod position_model;
pub mod siz_issue_model;
pub mod siz_item_model;
pub mod siz_norm_model;
pub mod subdivision_model;
pub mod user_model;
