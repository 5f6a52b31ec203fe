//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

use super::middleware::RequestId;

/// 成功响应的统一包装，`requestId` 与响应头 `x-request-id` 一致
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, request_id: Option<&RequestId>) -> Self {
        Self {
            success: true,
            data,
            request_id: request_id
                .map(|id| id.0.clone())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
