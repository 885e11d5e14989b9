// crates/fg_io/src/drivers/gdal/mod.rs

//! GDAL 栅格驱动模块
//!
//! # 功能
//!
//! - 读取参考栅格的空间框架（行列数、仿射变换、投影）
//! - 写出单波段 Float32 GeoTIFF，附带无数据值与波段统计
//!
//! # 依赖
//!
//! 需要启用 `gdal` feature 并安装 GDAL 库。

mod driver;
mod writer;

pub use driver::*;
pub use writer::*;
