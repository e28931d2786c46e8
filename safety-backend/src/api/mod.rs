// src/api/mod.rs

use crate::access::AccessControlService;
use crate::service::{
    access_profile_service::AccessProfileService, auth_service::AuthService,
    dashboard_service::DashboardService, department_service::DepartmentService,
    employee_service::EmployeeService, equipment_service::EquipmentService,
    medical_service::MedicalService, organization_service::OrganizationService,
    position_service::PositionService, siz_service::SizService,
    subdivision_service::SubdivisionService, user_service::UserService,
};
use crate::utils::jwt::JwtManager;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub access_profile_service: Arc<AccessProfileService>,
    pub access_control_service: Arc<AccessControlService>,
    pub organization_service: Arc<OrganizationService>,
    pub subdivision_service: Arc<SubdivisionService>,
    pub department_service: Arc<DepartmentService>,
    pub position_service: Arc<PositionService>,
    pub employee_service: Arc<EmployeeService>,
    pub equipment_service: Arc<EquipmentService>,
    pub medical_service: Arc<MedicalService>,
    pub siz_service: Arc<SizService>,
    pub dashboard_service: Arc<DashboardService>,
    pub jwt_manager: Arc<JwtManager>,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt_manager: Arc<JwtManager>) -> Self {
        let access_control_service = Arc::new(AccessControlService::new(db.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(db.clone(), jwt_manager.clone())),
            user_service: Arc::new(UserService::new(db.clone())),
            access_profile_service: Arc::new(AccessProfileService::new(db.clone())),
            organization_service: Arc::new(OrganizationService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            subdivision_service: Arc::new(SubdivisionService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            department_service: Arc::new(DepartmentService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            position_service: Arc::new(PositionService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            employee_service: Arc::new(EmployeeService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            equipment_service: Arc::new(EquipmentService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            medical_service: Arc::new(MedicalService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            siz_service: Arc::new(SizService::new(db.clone(), access_control_service.clone())),
            dashboard_service: Arc::new(DashboardService::new(
                db.clone(),
                access_control_service.clone(),
            )),
            access_control_service,
            jwt_manager,
            db,
        }
    }
}
