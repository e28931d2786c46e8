use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginationMeta {
    pub current_page: i32,
    pub page_size: i32,
    pub total_pages: i32,
    pub total_items: i64,
}

impl PaginationMeta {
    pub fn new(page: i32, per_page: i32, total_items: i64) -> Self {
        let total_pages = if per_page > 0 {
            ((total_items as f64) / (per_page as f64)).ceil() as i32
        } else {
            0
        };

        Self {
            current_page: page,
            page_size: per_page,
            total_pages,
            total_items,
        }
    }
}

impl ResponseMeta {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            pagination: None,
        }
    }
}

impl Default for ResponseMeta {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(ResponseMeta::new()),
        }
    }

    pub fn success_with_pagination(data: T, pagination: PaginationMeta) -> Self {
        let mut meta = ResponseMeta::new();
        meta.pagination = Some(pagination);

        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_rounds_up() {
        let meta = PaginationMeta::new(1, 20, 41);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_items, 41);
    }

    #[test]
    fn test_success_response_has_meta() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert!(response.success);
        assert!(response.meta.is_some());
        assert!(response.error.is_none());
    }
}
