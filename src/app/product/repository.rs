//! 产品存储与数据源的抽象接口
//!
//! Postgres 实现见 `infrastructure::database`，内存实现见 `infrastructure::memory`。

use async_trait::async_trait;

use super::{
    chart::PriceHistogram,
    model::{CategoryCount, NewProduct, PageRequest, Product, ProductFilter, Statistics},
};
use crate::core::error::CoreError;

/// 产品集合的读写操作
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 清空集合并写入新数据，返回写入条数
    async fn replace_all(&self, products: Vec<NewProduct>) -> Result<u64, CoreError>;

    /// 按 id 升序返回一页匹配记录
    async fn find(&self, filter: &ProductFilter, page: PageRequest)
        -> Result<Vec<Product>, CoreError>;

    /// 匹配记录总数，不受分页影响
    async fn count(&self, filter: &ProductFilter) -> Result<u64, CoreError>;

    async fn statistics(&self, filter: &ProductFilter) -> Result<Statistics, CoreError>;

    async fn price_histogram(&self, filter: &ProductFilter) -> Result<PriceHistogram, CoreError>;

    /// 按类别名升序
    async fn category_counts(&self, filter: &ProductFilter)
        -> Result<Vec<CategoryCount>, CoreError>;

    async fn ping(&self) -> Result<(), CoreError>;
}

/// 外部数据集来源
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<NewProduct>, CoreError>;
}
