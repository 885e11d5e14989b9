// crates/fg_terrain/src/raster.rs

//! 插值结果栅格
//!
//! 一个时间步的插值网格及其波段统计。

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 波段统计，仅统计有限值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterStatistics {
    /// 最小值
    pub min: f64,
    /// 最大值
    pub max: f64,
    /// 平均值
    pub mean: f64,
    /// 总体标准差
    pub std_dev: f64,
    /// 有效像元数
    pub valid_count: usize,
}

impl RasterStatistics {
    /// 计算统计量，没有有效值时返回 `None`
    pub fn compute<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut count = 0usize;

        for &v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v;
            sum_sq += v * v;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        let mean = sum / n;
        let variance = (sum_sq / n - mean * mean).max(0.0);
        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
            valid_count: count,
        })
    }
}

/// 插值网格
#[derive(Debug, Clone)]
pub struct InterpolatedGrid {
    /// 时间步索引（1 起）
    step: usize,
    /// 网格数据，第 0 行为北侧
    data: Array2<f64>,
}

impl InterpolatedGrid {
    /// 创建
    pub fn new(step: usize, data: Array2<f64>) -> Self {
        Self { step, data }
    }

    /// 时间步索引（1 起）
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// 网格数据
    #[inline]
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// 无数据像元数
    pub fn nodata_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }

    /// 波段统计
    ///
    /// 按 Float32 存储后的值计算，与写出的栅格一致。
    pub fn statistics(&self) -> Option<RasterStatistics> {
        let stored: Vec<f64> = self.to_f32_row_major().into_iter().map(f64::from).collect();
        RasterStatistics::compute(stored.iter())
    }

    /// 行优先的 Float32 数据，NaN 替换为指定的无数据值
    pub fn to_f32_with_nodata(&self, nodata: Option<f64>) -> Vec<f32> {
        let fill = nodata.map(|v| v as f32);
        self.data
            .iter()
            .map(|&v| match fill {
                Some(nd) if !v.is_finite() => nd,
                _ => v as f32,
            })
            .collect()
    }

    /// 行优先的 Float32 数据
    pub fn to_f32_row_major(&self) -> Vec<f32> {
        self.to_f32_with_nodata(None)
    }
}
