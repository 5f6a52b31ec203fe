//! 产品交易应用

pub mod chart;
pub mod handler;
pub mod model;
pub mod month;
pub mod repository;
pub mod service;

pub use handler::AppState;
pub use repository::{DatasetSource, ProductRepository};
pub use service::ProductService;
