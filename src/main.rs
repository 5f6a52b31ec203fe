use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use product_transactions::{
    app::product::{AppState, ProductService},
    config::CONFIG_PATH_ENV,
    create_router,
    infrastructure::{
        database::{DatabaseManager, PgProductRepository},
        dataset::HttpDatasetSource,
        logger::Logger,
    },
    AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging).map_err(|e| anyhow::anyhow!("初始化日志失败: {e}"))?;

    info!("启动产品交易服务...");
    info!("连接数据库: {}", config.database.redacted_url());

    let database = DatabaseManager::new(&config.database)
        .await
        .context("连接数据库失败")?;
    database.create_tables().await.context("创建数据表失败")?;

    let repository = Arc::new(PgProductRepository::new(database.get_pool().clone()));
    let source =
        Arc::new(HttpDatasetSource::new(&config.dataset).context("创建 HTTP 客户端失败")?);
    let state = AppState {
        product_service: ProductService::new(repository, source),
    };

    let app = create_router(state, config.server.timeout());

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET /initialize    - 拉取数据集并重建数据");
    info!("   GET /transactions  - 交易列表 (?page=1&perPage=10&search=&month=3)");
    info!("   GET /statistics    - 月度统计 (?month=3)");
    info!("   GET /bar-chart     - 价格区间分布 (?month=3)");
    info!("   GET /pie-chart     - 类别分布 (?month=3)");
    info!("   GET /health        - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到退出信号，正在关闭..."),
        Err(e) => {
            error!("无法监听退出信号: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
