//! 远程数据集拉取

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::app::product::{model::NewProduct, repository::DatasetSource};
use crate::config::DatasetConfig;
use crate::core::error::CoreError;

const USER_AGENT: &str = "product-transactions/0.1";

/// 通过 HTTP GET 拉取 JSON 数组形式的数据集
pub struct HttpDatasetSource {
    client: Client,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(config: &DatasetConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<Vec<NewProduct>, CoreError> {
        info!("拉取数据集: {}", self.url);

        let records = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NewProduct>>()
            .await?;

        Ok(records)
    }
}
