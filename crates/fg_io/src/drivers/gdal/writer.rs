// crates/fg_io/src/drivers/gdal/writer.rs

//! GeoTIFF 写出
//!
//! 每个时间步写出一个单波段 Float32 文件 `{dir}/{step}.tif`，
//! 仿射变换与投影取自空间框架，波段统计写入 `STATISTICS_*` 元数据。

use crate::drivers::raster::{RasterSink, WrittenRaster};
use fg_foundation::error::{FgError, FgResult};
use fg_terrain::{InterpolatedGrid, SpatialFrame};
use std::path::{Path, PathBuf};

/// GeoTIFF 输出
#[derive(Debug, Clone)]
pub struct GeoTiffWriter {
    directory: PathBuf,
    nodata: Option<f64>,
}

impl GeoTiffWriter {
    /// 创建输出，必要时创建输出目录
    pub fn new(directory: impl Into<PathBuf>, nodata: Option<f64>) -> FgResult<Self> {
        let directory = directory.into();
        if cfg!(not(feature = "gdal")) {
            return Err(FgError::NotAvailable { feature: "gdal" });
        }
        std::fs::create_dir_all(&directory)
            .map_err(|e| FgError::resource_unavailable(&directory, e))?;
        Ok(Self { directory, nodata })
    }

    /// 输出目录
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// 无数据值，`None` 时写出 NaN
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }
}

#[cfg(feature = "gdal")]
impl RasterSink for GeoTiffWriter {
    fn write(&mut self, grid: &InterpolatedGrid, frame: &SpatialFrame) -> FgResult<WrittenRaster> {
        use crate::drivers::raster::raster_path;
        use ::gdal::raster::Buffer;
        use ::gdal::{DriverManager, Metadata};

        let path = raster_path(&self.directory, grid.step());
        let (rows, cols) = grid.shape();
        FgError::check_size("grid rows", frame.rows(), rows)?;
        FgError::check_size("grid cols", frame.cols(), cols)?;

        let unavailable = |e: ::gdal::errors::GdalError| FgError::resource_unavailable(&path, e);

        let driver = DriverManager::get_driver_by_name("GTiff").map_err(unavailable)?;
        let mut dataset = driver
            .create_with_band_type::<f32, _>(&path, cols, rows, 1)
            .map_err(unavailable)?;

        dataset
            .set_geo_transform(&frame.transform().to_gdal())
            .map_err(unavailable)?;
        if let Some(wkt) = frame.projection() {
            dataset.set_projection(wkt).map_err(unavailable)?;
        }

        let statistics = grid.statistics();
        {
            let mut band = dataset.rasterband(1).map_err(unavailable)?;
            let mut buffer = Buffer::new((cols, rows), grid.to_f32_with_nodata(self.nodata));
            band.write((0, 0), (cols, rows), &mut buffer)
                .map_err(unavailable)?;
            band.set_no_data_value(Some(self.nodata.unwrap_or(f64::NAN)))
                .map_err(unavailable)?;

            match statistics {
                Some(stats) => {
                    for (key, value) in [
                        ("STATISTICS_MINIMUM", stats.min),
                        ("STATISTICS_MAXIMUM", stats.max),
                        ("STATISTICS_MEAN", stats.mean),
                        ("STATISTICS_STDDEV", stats.std_dev),
                    ] {
                        band.set_metadata_item(key, &value.to_string(), "")
                            .map_err(unavailable)?;
                    }
                }
                None => log::warn!("第 {} 步全部为无数据，未写入波段统计", grid.step()),
            }
        }

        dataset.flush_cache().map_err(unavailable)?;
        log::debug!("写出 {}", path.display());

        Ok(WrittenRaster {
            step: grid.step(),
            path,
            statistics,
        })
    }
}

#[cfg(not(feature = "gdal"))]
impl RasterSink for GeoTiffWriter {
    fn write(&mut self, _grid: &InterpolatedGrid, _frame: &SpatialFrame) -> FgResult<WrittenRaster> {
        Err(FgError::NotAvailable { feature: "gdal" })
    }
}
