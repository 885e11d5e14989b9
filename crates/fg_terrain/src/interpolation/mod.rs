// crates/fg_terrain/src/interpolation/mod.rs

//! 插值模块
//!
//! 把网格单元中心的散点数值插值到参考栅格的规则网格上。
//!
//! - [`triangulation`]: 散点 Delaunay 三角化
//! - [`linear`]: 重心坐标线性插值，权重预计算后跨时间步复用
//!
//! 凸包外的网格点得到 NaN（无数据），不会被填充为 0。

pub mod linear;
pub mod triangulation;

pub use linear::{interpolate_scattered, LinearInterpolator, TargetGrid};
pub use triangulation::{Triangulation, TriangulationError};
