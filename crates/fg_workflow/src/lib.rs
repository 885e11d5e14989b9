// crates/fg_workflow/src/lib.rs

//! FloodGrid 工作流模块
//!
//! 把采样点集逐时间步插值到参考栅格并写出，附带外部模型调用。
//!
//! # 模块结构
//!
//! - [`batch`]: 批处理驱动
//! - [`pipeline`]: 按导出配置加载输入并运行批处理
//! - [`progress`]: 进度监听
//! - [`cancel`]: 取消令牌
//! - [`report`]: 批处理结果
//! - [`external`]: 外部模型可执行程序
//!
//! # 示例
//!
//! ```rust,ignore
//! use fg_config::ExportConfig;
//! use fg_workflow::{export_rasters, CancellationToken, LoggingListener};
//!
//! let config = ExportConfig::from_file("export.json")?;
//! let report = export_rasters(&config, &LoggingListener::new("export"), &CancellationToken::new())?;
//! println!("{}", report.summary());
//! ```

pub mod batch;
pub mod cancel;
pub mod external;
pub mod pipeline;
pub mod progress;
pub mod report;

// 重导出核心类型
pub use batch::BatchDriver;
pub use cancel::CancellationToken;
pub use external::ExternalModel;
pub use pipeline::{export_rasters, export_with_container, load_samples};
pub use progress::{FnListener, LoggingListener, ProgressListener, SilentListener};
pub use report::{BatchReport, SkippedStep};
