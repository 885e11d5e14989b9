// crates/fg_terrain/src/lib.rs

//! 空间框架与栅格插值
//!
//! 提供参考栅格的空间框架、网格采样点集以及散点到规则栅格的线性插值。
//!
//! # 模块
//!
//! - `frame`: 仿射变换与空间框架
//! - `samples`: 网格单元中心采样点集
//! - `interpolation`: Delaunay 三角化与重心坐标插值
//! - `raster`: 插值结果栅格与波段统计

pub mod frame;
pub mod interpolation;
pub mod raster;
pub mod samples;

// 重导出常用类型
pub use frame::{linspace, GeoTransform, SpatialFrame};
pub use interpolation::{interpolate_scattered, LinearInterpolator, TargetGrid, Triangulation, TriangulationError};
pub use raster::{InterpolatedGrid, RasterStatistics};
pub use samples::MeshSamples;
