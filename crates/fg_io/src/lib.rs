// crates/fg_io/src/lib.rs

//! FloodGrid IO 模块
//!
//! 提供数据输入输出功能。
//!
//! # 模块
//!
//! - [`drivers`]: 参考栅格 (GDAL)、结果容器 (HDF5) 与栅格输出
//! - [`import`]: 预报输入（降雨表、流量序列、过程线表）
//!
//! # 可选依赖
//!
//! - `gdal`: 启用 GDAL 栅格驱动与 GeoTIFF 写出
//! - `hdf5`: 启用 HDF5 结果容器
//!
//! 未启用时相应驱动返回 `FgError::NotAvailable`；内存容器与内存输出始终可用。
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use fg_io::drivers::{load_spatial_frame, read_mesh_samples, Hdf5Container};
//!
//! let frame = load_spatial_frame("dem.tif")?;
//! let container = Hdf5Container::open("river.p01.hdf")?;
//! let samples = read_mesh_samples(&container, &DatasetKeys::default())?;
//! ```

pub mod drivers;
pub mod import;

// 重导出常用类型
pub use drivers::{
    load_spatial_frame, raster_path, read_mesh_samples, GdalDriver, GeoTiffWriter, Hdf5Container,
    MemoryContainer, MemoryRasterSink, RasterSink, ResultContainer, StoredRaster, WrittenRaster,
};
pub use import::{aggregate_rainfall, load_series, HydrographTable, RainfallSum};
