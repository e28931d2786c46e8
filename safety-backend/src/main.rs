// src/main.rs
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use safety_backend::api::handlers::{
    access_profile_handler::access_profile_router, auth_handler::auth_router,
    dashboard_handler::dashboard_router, department_handler::department_router,
    employee_handler::employee_router, equipment_handler::equipment_router,
    medical_handler::medical_router, organization_handler::organization_router,
    position_handler::position_router, siz_handler::siz_router,
    subdivision_handler::subdivision_router, user_handler::user_router,
};
use safety_backend::api::AppState;
use safety_backend::config::Config;
use safety_backend::db::create_db_pool;
use safety_backend::logging::{inject_request_context, logging_middleware};
use safety_backend::middleware::auth::jwt_auth_middleware;
use safety_backend::utils::jwt::{JwtConfig, JwtManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safety_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Safety Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env().expect("Failed to load configuration");

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Database pool created successfully.");

    // マイグレーションの適用
    use migration::{Migrator, MigratorTrait};
    Migrator::up(&db_pool, None)
        .await
        .expect("Failed to apply migrations");

    // JWTマネージャーの作成
    let jwt_config = JwtConfig::new(
        app_config.jwt_secret.clone(),
        app_config.access_token_expiry_minutes,
    );
    let jwt_manager = Arc::new(JwtManager::new(jwt_config).expect("Failed to create JWT manager"));

    // アプリケーション状態の構築
    let app_state = AppState::new(db_pool, jwt_manager);

    // ルーターの設定
    let app_router = axum::Router::new()
        .merge(auth_router(app_state.clone()))
        .merge(user_router(app_state.clone()))
        .merge(access_profile_router(app_state.clone()))
        .merge(organization_router(app_state.clone()))
        .merge(subdivision_router(app_state.clone()))
        .merge(department_router(app_state.clone()))
        .merge(position_router(app_state.clone()))
        .merge(employee_router(app_state.clone()))
        .merge(equipment_router(app_state.clone()))
        .merge(medical_router(app_state.clone()))
        .merge(siz_router(app_state.clone()))
        .merge(dashboard_router(app_state.clone()))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            jwt_auth_middleware,
        ))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(inject_request_context))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)));

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
