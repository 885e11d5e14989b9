// crates/fg_io/src/drivers/raster.rs

//! 栅格输出抽象接口

use fg_foundation::error::FgResult;
use fg_terrain::{GeoTransform, InterpolatedGrid, RasterStatistics, SpatialFrame};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 输出文件路径 `{dir}/{step}.tif`
pub fn raster_path(dir: &Path, step: usize) -> PathBuf {
    dir.join(format!("{step}.tif"))
}

/// 已写出的栅格
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRaster {
    /// 时间步索引（1 起）
    pub step: usize,
    /// 输出路径
    pub path: PathBuf,
    /// 波段统计，全部为无数据时为 `None`
    pub statistics: Option<RasterStatistics>,
}

/// 栅格输出 trait
///
/// 同一时间步重复写出时覆盖旧结果。
pub trait RasterSink {
    /// 写出一个时间步
    fn write(&mut self, grid: &InterpolatedGrid, frame: &SpatialFrame) -> FgResult<WrittenRaster>;
}

/// 内存中保存的栅格
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRaster {
    /// (rows, cols)
    pub shape: (usize, usize),
    /// 行优先 Float32 数据
    pub data: Vec<f32>,
    /// 仿射变换
    pub transform: GeoTransform,
    /// 投影 WKT
    pub projection: Option<String>,
    /// 无数据值
    pub nodata: Option<f64>,
    /// 波段统计
    pub statistics: Option<RasterStatistics>,
}

/// 内存栅格输出，用于测试与无 GDAL 环境
#[derive(Debug, Clone, Default)]
pub struct MemoryRasterSink {
    directory: PathBuf,
    nodata: Option<f64>,
    rasters: BTreeMap<usize, StoredRaster>,
}

impl MemoryRasterSink {
    /// 创建
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            nodata: None,
            rasters: BTreeMap::new(),
        }
    }

    /// 设置无数据值
    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    /// 已写出的时间步
    pub fn steps(&self) -> Vec<usize> {
        self.rasters.keys().copied().collect()
    }

    /// 获取某一时间步的栅格
    pub fn get(&self, step: usize) -> Option<&StoredRaster> {
        self.rasters.get(&step)
    }

    /// 栅格数量
    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }
}

impl RasterSink for MemoryRasterSink {
    fn write(&mut self, grid: &InterpolatedGrid, frame: &SpatialFrame) -> FgResult<WrittenRaster> {
        let statistics = grid.statistics();
        let stored = StoredRaster {
            shape: grid.shape(),
            data: grid.to_f32_with_nodata(self.nodata),
            transform: *frame.transform(),
            projection: frame.projection().map(str::to_string),
            nodata: self.nodata,
            statistics,
        };
        self.rasters.insert(grid.step(), stored);

        Ok(WrittenRaster {
            step: grid.step(),
            path: raster_path(&self.directory, grid.step()),
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_raster_path() {
        assert_eq!(raster_path(Path::new("out"), 12), PathBuf::from("out/12.tif"));
    }

    #[test]
    fn test_memory_sink_overwrites() {
        let frame = SpatialFrame::new(
            1,
            2,
            GeoTransform::new(10.0, 20.0, 1.0, -1.0),
            Some("LOCAL_CS[\"test\"]".to_string()),
        )
        .unwrap();
        let mut sink = MemoryRasterSink::new("out").with_nodata(Some(-9999.0));

        sink.write(&InterpolatedGrid::new(2, array![[1.0, f64::NAN]]), &frame).unwrap();
        let written = sink
            .write(&InterpolatedGrid::new(2, array![[3.0, 4.0]]), &frame)
            .unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(written.path, PathBuf::from("out/2.tif"));
        let stored = sink.get(2).unwrap();
        assert_eq!(stored.data, vec![3.0, 4.0]);
        assert_eq!(stored.transform, *frame.transform());
        assert_eq!(stored.projection.as_deref(), Some("LOCAL_CS[\"test\"]"));
        assert!((written.statistics.unwrap().max - 4.0).abs() < 1e-12);
    }
}
