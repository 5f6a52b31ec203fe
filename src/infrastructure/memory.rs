//! 内存实现
//!
//! 不依赖数据库和网络，供单元测试、集成测试和本地开发使用。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::app::product::{
    chart::PriceHistogram,
    model::{CategoryCount, NewProduct, PageRequest, Product, ProductFilter, Statistics},
    repository::{DatasetSource, ProductRepository},
};
use crate::core::error::CoreError;

/// 内存中的产品集合，id 按写入顺序从 1 开始分配
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(records: Vec<NewProduct>) -> Self {
        Self {
            products: RwLock::new(number(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

fn number(records: Vec<NewProduct>) -> Vec<Product> {
    records
        .into_iter()
        .zip(1..)
        .map(|(record, id)| record.into_product(id))
        .collect()
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn replace_all(&self, products: Vec<NewProduct>) -> Result<u64, CoreError> {
        let fresh = number(products);
        let inserted = fresh.len() as u64;
        *self.products.write().await = fresh;
        Ok(inserted)
    }

    async fn find(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, CoreError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, CoreError> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn statistics(&self, filter: &ProductFilter) -> Result<Statistics, CoreError> {
        let products = self.products.read().await;
        let stats = products
            .iter()
            .filter(|p| filter.matches(p))
            .fold(Statistics::default(), |mut stats, p| {
                stats.total_sale_amount += p.price;
                if p.sold {
                    stats.total_sold_items += 1;
                } else {
                    stats.total_not_sold_items += 1;
                }
                stats
            });
        Ok(stats)
    }

    async fn price_histogram(&self, filter: &ProductFilter) -> Result<PriceHistogram, CoreError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.price)
            .collect())
    }

    async fn category_counts(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<CategoryCount>, CoreError> {
        let products = self.products.read().await;
        let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
        for p in products.iter().filter(|p| filter.matches(p)) {
            *groups.entry(p.category.as_str()).or_default() += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// 返回固定数据（或固定失败）的数据源
pub struct StaticDatasetSource {
    records: Result<Vec<NewProduct>, String>,
}

impl StaticDatasetSource {
    pub fn new(records: Vec<NewProduct>) -> Self {
        Self {
            records: Ok(records),
        }
    }

    /// 每次 fetch 都以上游错误失败
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Err(reason.into()),
        }
    }
}

#[async_trait]
impl DatasetSource for StaticDatasetSource {
    async fn fetch(&self) -> Result<Vec<NewProduct>, CoreError> {
        self.records.clone().map_err(CoreError::Upstream)
    }
}
