// crates/fg_io/src/drivers/hdf5/mod.rs

//! HDF5 结果容器驱动
//!
//! 读取 HEC-RAS 计划结果文件中的二维数据集。
//!
//! # 依赖
//!
//! 需要启用 `hdf5` feature 并安装 HDF5 库。

mod driver;

pub use driver::*;
