//! 基础设施层

#[cfg(feature = "database")]
pub mod database;
pub mod dataset;
pub mod logger;
pub mod memory;
