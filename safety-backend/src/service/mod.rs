// src/service/mod.rs
pub mod access_profile_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod department_service;
pub mod employee_service;
pub mod equipment_service;
pub mod medical_service;
pub mod organization_service;
pub mod position_service;
pub mod scope_validation;
pub mod siz_service;
pub mod subdivision_service;
pub mod user_service;
