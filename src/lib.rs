//! # 产品交易数据服务
//!
//! 从远程 JSON 数据集加载产品交易记录，并提供按月份、关键字过滤的
//! 分页查询、统计、柱状图和饼图接口：
//! - `app`：路由、处理器、业务服务
//! - `core`：错误处理、响应包装、中间件
//! - `infrastructure`：Postgres 存储、内存存储、数据集拉取、日志
//! - `config`：TOML + 环境变量配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::create_router;
pub use config::AppConfig;
