// crates/fg_io/src/drivers/gdal/driver.rs

//! GDAL 参考栅格读取

use fg_foundation::error::{FgError, FgResult};
use fg_terrain::SpatialFrame;
use std::path::Path;

/// 读取参考栅格的空间框架
///
/// 栅格句柄在函数返回前释放。
pub fn load_spatial_frame(path: impl AsRef<Path>) -> FgResult<SpatialFrame> {
    let driver = GdalDriver::open(path)?;
    Ok(driver.frame().clone())
}

/// GDAL 栅格驱动
#[cfg(feature = "gdal")]
pub struct GdalDriver {
    frame: SpatialFrame,
    nodata: Option<f64>,
    band_count: usize,
}

#[cfg(feature = "gdal")]
impl GdalDriver {
    /// 打开栅格文件并读取空间框架
    pub fn open(path: impl AsRef<Path>) -> FgResult<Self> {
        use ::gdal::Dataset;
        use fg_terrain::GeoTransform;

        let path = path.as_ref();
        if !path.exists() {
            return Err(FgError::resource_unavailable(path, "文件不存在"));
        }

        let dataset = Dataset::open(path).map_err(|e| FgError::resource_unavailable(path, e))?;
        let (cols, rows) = dataset.raster_size();
        let geo_transform = dataset
            .geo_transform()
            .map_err(|e| FgError::resource_unavailable(path, format!("缺少仿射变换: {e}")))?;
        let projection = dataset.projection();
        let band_count = dataset.raster_count();

        let nodata = if band_count > 0 {
            dataset.rasterband(1).ok().and_then(|b| b.no_data_value())
        } else {
            None
        };

        let transform = GeoTransform::from_gdal(geo_transform);
        if transform.has_rotation() {
            log::warn!(
                "参考栅格 {} 含旋转项，插值网格按无旋转处理",
                path.display()
            );
        }

        let frame = SpatialFrame::new(rows, cols, transform, Some(projection))?;
        log::debug!(
            "参考栅格 {}: {}x{}, 原点 ({}, {}), 像素 ({}, {})",
            path.display(),
            rows,
            cols,
            transform.origin_x,
            transform.origin_y,
            transform.pixel_width,
            transform.pixel_height
        );

        Ok(Self {
            frame,
            nodata,
            band_count,
        })
    }

    /// 空间框架
    pub fn frame(&self) -> &SpatialFrame {
        &self.frame
    }

    /// 第一波段的无数据值
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// 波段数
    pub fn band_count(&self) -> usize {
        self.band_count
    }
}

/// 无 GDAL 支持时的占位实现
#[cfg(not(feature = "gdal"))]
pub struct GdalDriver {
    frame: SpatialFrame,
}

#[cfg(not(feature = "gdal"))]
impl GdalDriver {
    /// 打开栅格文件 (无 GDAL 支持)
    pub fn open(_path: impl AsRef<Path>) -> FgResult<Self> {
        Err(FgError::NotAvailable { feature: "gdal" })
    }

    /// 空间框架
    pub fn frame(&self) -> &SpatialFrame {
        &self.frame
    }

    /// 第一波段的无数据值
    pub fn nodata(&self) -> Option<f64> {
        None
    }

    /// 波段数
    pub fn band_count(&self) -> usize {
        0
    }
}
