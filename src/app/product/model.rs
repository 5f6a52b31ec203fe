//! 产品交易数据模型

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::month::Month;

/// 已入库的交易记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub sold: bool,
    pub category: String,
}

/// 数据源中的一条记录，多余字段（id、image 等）直接忽略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub sold: bool,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            date_of_sale: self.date_of_sale,
            sold: self.sold,
            category: self.category,
        }
    }
}

/// 查询过滤条件：月份 + 关键字
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub month: Option<Month>,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn new(month: Option<Month>, search: Option<&str>) -> Self {
        let search = search.filter(|s| !s.is_empty()).map(|s| s.to_string());
        Self { month, search }
    }

    pub fn for_month(month: Option<Month>) -> Self {
        Self {
            month,
            search: None,
        }
    }

    /// 内存实现使用的匹配逻辑，与 SQL 中的 ILIKE 条件保持一致
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(month) = self.month {
            if product.date_of_sale.month() != month.number() {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(term) => {
                let needle = term.to_lowercase();
                product.title.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
                    || product.price.to_string().contains(&needle)
            }
        }
    }

    /// `%term%`，LIKE 元字符按字面量转义
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// 分页参数，page 从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 10;

    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(Self::DEFAULT_PAGE).max(1),
            per_page: per_page.unwrap_or(Self::DEFAULT_PER_PAGE).max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// `/transactions` 响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

/// `/statistics` 响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sale_amount: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// `/pie-chart` 中的一个分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// `/initialize` 成功后返回的数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSummary {
    pub message: String,
    pub inserted: u64,
}
