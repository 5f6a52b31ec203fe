//! 产品交易处理器

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
    Extension,
};
use serde::Deserialize;
use validator::Validate;

use super::{
    chart::PriceRangeCount,
    model::{CategoryCount, PageRequest, ProductFilter, SeedSummary, Statistics, TransactionPage},
    month::Month,
    service::ProductService,
};
use crate::core::{
    error::{ApiError, CoreError, Operation, OperationContext},
    middleware::RequestId,
    response::ApiResponse,
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// `/transactions` 查询参数
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, message = "perPage must be at least 1"))]
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub month: Option<String>,
}

/// 只带月份的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    fn filter(&self) -> Result<ProductFilter, CoreError> {
        Month::parse_optional(self.month.as_deref()).map(ProductFilter::for_month)
    }
}

pub async fn initialize(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Result<Json<ApiResponse<SeedSummary>>, ApiError> {
    let inserted = state
        .product_service
        .initialize()
        .await
        .during(Operation::Initialize)?;

    let summary = SeedSummary {
        message: "Database initialized".to_string(),
        inserted,
    };
    Ok(Json(ApiResponse::success(
        summary,
        request_id.as_ref().map(|Extension(id)| id),
    )))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionPage>, ApiError> {
    let op = Operation::Transactions;
    let Query(query) = query.during(op)?;
    query.validate().during(op)?;

    let month = Month::parse_optional(query.month.as_deref()).during(op)?;
    let filter = ProductFilter::new(month, query.search.as_deref());
    let page = PageRequest::new(query.page, query.per_page);

    let result = state
        .product_service
        .transactions(&filter, page)
        .await
        .during(op)?;
    Ok(Json(result))
}

pub async fn get_statistics(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Statistics>, ApiError> {
    let op = Operation::Statistics;
    let Query(query) = query.during(op)?;
    let filter = query.filter().during(op)?;

    let stats = state.product_service.statistics(&filter).await.during(op)?;
    Ok(Json(stats))
}

pub async fn get_bar_chart(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<PriceRangeCount>>, ApiError> {
    let op = Operation::BarChart;
    let Query(query) = query.during(op)?;
    let filter = query.filter().during(op)?;

    let ranges = state.product_service.bar_chart(&filter).await.during(op)?;
    Ok(Json(ranges))
}

pub async fn get_pie_chart(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let op = Operation::PieChart;
    let Query(query) = query.during(op)?;
    let filter = query.filter().during(op)?;

    let groups = state.product_service.pie_chart(&filter).await.during(op)?;
    Ok(Json(groups))
}

/// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .product_service
        .health_check()
        .await
        .during(Operation::Health)?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
