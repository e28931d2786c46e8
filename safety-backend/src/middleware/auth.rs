// src/middleware/auth.rs

use crate::access::AccessContext;
use crate::api::AppState;
use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::logging::RequestContext;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// 認証をスキップするパス
const SKIP_AUTH_PATHS: [&str; 2] = ["/auth/signin", "/health"];

/// 認証済みユーザー情報を格納するエクステンション
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: UserClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> uuid::Uuid {
        self.claims.user_id
    }

    pub fn is_superuser(&self) -> bool {
        self.claims.is_superuser
    }

    /// このリクエスト用のアクセス解決コンテキストを作成
    pub fn access_context(&self) -> AccessContext {
        AccessContext::new(&self.claims)
    }

    /// スーパーユーザー専用操作のガード
    pub fn ensure_superuser(&self) -> Result<(), AppError> {
        if self.is_superuser() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Superuser privileges required".to_string(),
            ))
        }
    }
}

pub fn is_auth_skipped(path: &str) -> bool {
    SKIP_AUTH_PATHS.iter().any(|skip| path == *skip)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
}

/// JWT認証ミドルウェア
pub async fn jwt_auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if is_auth_skipped(&path) {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers()).ok_or_else(|| {
        warn!(path = %path, "Missing authentication token");
        AppError::Unauthorized("Authentication required".to_string())
    })?;

    let access_claims = app_state
        .jwt_manager
        .verify_access_token(token)
        .map_err(|e| {
            warn!(path = %path, error = %e, "Invalid access token");
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

    let user_claims = access_claims.user;

    if !user_claims.is_active {
        warn!(
            user_id = %user_claims.user_id,
            path = %path,
            "Access attempt with inactive account"
        );
        return Err(AppError::Forbidden("Account is inactive".to_string()));
    }

    // ロギング用のリクエストコンテキストにユーザーIDを反映
    if let Some(context) = request.extensions_mut().get_mut::<RequestContext>() {
        context.user_id = Some(user_claims.user_id);
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser::new(user_claims));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn claims(is_superuser: bool) -> UserClaims {
        UserClaims {
            user_id: Uuid::new_v4(),
            username: "inspector".to_string(),
            is_superuser,
            is_active: true,
        }
    }

    #[test]
    fn test_skip_paths() {
        assert!(is_auth_skipped("/auth/signin"));
        assert!(is_auth_skipped("/health"));
        assert!(!is_auth_skipped("/employees"));
    }

    #[test]
    fn test_ensure_superuser() {
        assert!(AuthenticatedUser::new(claims(true)).ensure_superuser().is_ok());
        assert!(AuthenticatedUser::new(claims(false))
            .ensure_superuser()
            .is_err());
    }
}
