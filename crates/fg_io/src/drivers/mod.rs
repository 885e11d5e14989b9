// crates/fg_io/src/drivers/mod.rs

//! 数据驱动模块
//!
//! 提供读取参考栅格、结果容器以及写出栅格的驱动程序。

pub mod container;
pub mod gdal;
pub mod hdf5;
pub mod raster;

// 重导出
pub use self::gdal::{load_spatial_frame, GdalDriver, GeoTiffWriter};
pub use self::hdf5::Hdf5Container;
pub use container::{read_mesh_samples, MemoryContainer, ResultContainer};
pub use raster::{raster_path, MemoryRasterSink, RasterSink, StoredRaster, WrittenRaster};
