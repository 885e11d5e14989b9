// crates/fg_config/src/lib.rs

//! FloodGrid 配置层
//!
//! 把原先硬编码的文件路径、数据集路径和"最后 5 步"窗口抽象为显式配置。
//!
//! # 模块概览
//!
//! - [`export_config`]: 栅格时间序列导出配置（JSON）
//! - [`datasets`]: 结果容器内部数据集路径
//! - [`window`]: 时间步窗口
//! - [`error`]: 配置错误类型

#![warn(missing_docs)]

pub mod datasets;
pub mod error;
pub mod export_config;
pub mod window;

// 重导出核心类型
pub use datasets::DatasetKeys;
pub use error::ConfigError;
pub use export_config::{ExportConfig, FailurePolicy};
pub use window::StepWindow;
