//! 核心错误处理模块
//!
//! 所有失败对外都折叠为 500 + 固定文案，真实原因只写进日志。

use std::fmt;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("数据库错误: {0}")]
    Database(String),
    #[error("上游数据源错误: {0}")]
    Upstream(String),
    #[error("无效的查询参数: {0}")]
    InvalidQuery(String),
    #[error("数据校验失败: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("请求超时: {0}")]
    Timeout(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        CoreError::Upstream(err.to_string())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::InvalidQuery(rejection.body_text())
    }
}

/// 对外暴露的操作，每个操作对应一条固定的失败文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Transactions,
    Statistics,
    BarChart,
    PieChart,
    Health,
    Request,
}

impl Operation {
    /// 按路由路径找到对应操作，未知路径归为通用请求
    pub fn from_path(path: &str) -> Self {
        match path {
            "/initialize" => Operation::Initialize,
            "/transactions" => Operation::Transactions,
            "/statistics" => Operation::Statistics,
            "/bar-chart" => Operation::BarChart,
            "/pie-chart" => Operation::PieChart,
            "/health" => Operation::Health,
            _ => Operation::Request,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Initialize => "Error initializing database",
            Operation::Transactions => "Error fetching transactions",
            Operation::Statistics => "Error fetching statistics",
            Operation::BarChart => "Error fetching bar chart data",
            Operation::PieChart => "Error fetching pie chart data",
            Operation::Health => "Error checking health",
            Operation::Request => "Error handling request",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Initialize => "initialize",
            Operation::Transactions => "transactions",
            Operation::Statistics => "statistics",
            Operation::BarChart => "bar-chart",
            Operation::PieChart => "pie-chart",
            Operation::Health => "health",
            Operation::Request => "request",
        };
        f.write_str(name)
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

/// 处理器返回的错误：带上失败的操作，渲染时只暴露固定文案
#[derive(Debug)]
pub struct ApiError {
    pub operation: Operation,
    pub source: CoreError,
}

impl ApiError {
    pub fn new(operation: Operation, source: impl Into<CoreError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(operation = %self.operation, error = %self.source, "请求处理失败");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let error_response = ErrorResponse {
            error: "INTERNAL_SERVER_ERROR".to_string(),
            message: self.operation.failure_message().to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

/// 给任意 `Result` 附加失败时所处的操作
pub trait OperationContext<T> {
    fn during(self, operation: Operation) -> Result<T, ApiError>;
}

impl<T, E> OperationContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn during(self, operation: Operation) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::new(operation, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_failure_renders_as_internal_server_error() {
        let cases = [
            CoreError::Database("connection refused".to_string()),
            CoreError::Upstream("503 Service Unavailable".to_string()),
            CoreError::InvalidQuery("page".to_string()),
            CoreError::Timeout("request timed out".to_string()),
        ];

        for source in cases {
            let response = ApiError::new(Operation::Statistics, source).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_during_attaches_operation() {
        let result: Result<(), CoreError> = Err(CoreError::InvalidQuery("month".to_string()));
        let err = result.during(Operation::PieChart).unwrap_err();

        assert_eq!(err.operation, Operation::PieChart);
        assert_eq!(err.operation.failure_message(), "Error fetching pie chart data");
        assert!(matches!(err.source, CoreError::InvalidQuery(_)));
    }

    #[test]
    fn test_operation_from_path() {
        assert_eq!(Operation::from_path("/initialize"), Operation::Initialize);
        assert_eq!(Operation::from_path("/bar-chart"), Operation::BarChart);
        assert_eq!(Operation::from_path("/pie-chart"), Operation::PieChart);
        assert_eq!(Operation::from_path("/nope"), Operation::Request);
        assert_eq!(Operation::Request.failure_message(), "Error handling request");
    }
}
