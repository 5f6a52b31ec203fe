//! 核心层：错误、响应包装、中间件

pub mod error;
pub mod middleware;
pub mod response;

pub use error::{ApiError, CoreError, Operation, OperationContext};
pub use response::ApiResponse;
