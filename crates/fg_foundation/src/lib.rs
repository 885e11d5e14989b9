// crates/fg_foundation/src/lib.rs

//! FloodGrid 基础层
//!
//! 提供整个工作区共享的错误类型。
//!
//! # 层级架构
//!
//! ```text
//! Layer 4: fg_cli
//! Layer 3: fg_workflow  ─> 批处理驱动、进度、外部程序
//! Layer 2: fg_io        ─> GDAL / HDF5 驱动、文本导入
//!          fg_config    ─> 导出配置
//! Layer 1: fg_terrain   ─> 空间框架、散点插值
//! Layer 0: fg_foundation (本层)
//! ```

pub mod error;

pub use error::{FgError, FgResult};
