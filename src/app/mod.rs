//! 应用层：路由组装

pub mod product;

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer, http::Uri, middleware, routing::get, BoxError, Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::{
    error::{ApiError, CoreError, Operation},
    middleware::request_logging_middleware,
};
use product::{handler, AppState};

/// 创建路由
pub fn create_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/initialize", get(handler::initialize))
        .route("/transactions", get(handler::list_transactions))
        .route("/statistics", get(handler::get_statistics))
        .route("/bar-chart", get(handler::get_bar_chart))
        .route("/pie-chart", get(handler::get_pie_chart))
        .route("/health", get(handler::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(timeout))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

/// 超时同样按所属端点的固定文案返回 500
async fn handle_timeout(uri: Uri, err: BoxError) -> ApiError {
    ApiError::new(
        Operation::from_path(uri.path()),
        CoreError::Timeout(err.to_string()),
    )
}
