//! 产品业务服务

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use super::{
    chart::PriceRangeCount,
    model::{CategoryCount, PageRequest, ProductFilter, Statistics, TransactionPage},
    repository::{DatasetSource, ProductRepository},
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    source: Arc<dyn DatasetSource>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, source: Arc<dyn DatasetSource>) -> Self {
        Self { repository, source }
    }

    /// 拉取数据集并整体替换现有数据；任何一条记录校验失败都不会写入
    pub async fn initialize(&self) -> Result<u64, CoreError> {
        let records = self.source.fetch().await?;
        for record in &records {
            record.validate()?;
        }

        info!("已拉取 {} 条交易记录，开始替换数据", records.len());
        let inserted = self.repository.replace_all(records).await?;
        info!("✅ 数据初始化完成，共写入 {} 条记录", inserted);
        Ok(inserted)
    }

    pub async fn transactions(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<TransactionPage, CoreError> {
        let products = self.repository.find(filter, page).await?;
        let total = self.repository.count(filter).await?;

        Ok(TransactionPage {
            products,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total),
        })
    }

    pub async fn statistics(&self, filter: &ProductFilter) -> Result<Statistics, CoreError> {
        self.repository.statistics(filter).await
    }

    pub async fn bar_chart(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<PriceRangeCount>, CoreError> {
        let histogram = self.repository.price_histogram(filter).await?;
        Ok(histogram.into_ranges())
    }

    pub async fn pie_chart(&self, filter: &ProductFilter) -> Result<Vec<CategoryCount>, CoreError> {
        self.repository.category_counts(filter).await
    }

    pub async fn health_check(&self) -> Result<(), CoreError> {
        self.repository.ping().await
    }
}
