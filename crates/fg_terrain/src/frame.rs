// crates/fg_terrain/src/frame.rs

//! 空间框架
//!
//! 参考栅格的网格形状、仿射变换和坐标参考系。框架在一次运行中只加载一次，
//! 之后对每个输出时间步保持不变。

use fg_foundation::error::{FgError, FgResult};
use serde::{Deserialize, Serialize};

/// 仿射变换（栅格坐标 ↔ 地理坐标）
///
/// 字段顺序与 GDAL 的 `[x_origin, x_res, x_rot, y_origin, y_rot, y_res]` 对应。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    /// 左上角 x 坐标
    pub origin_x: f64,
    /// 像素宽度（x 方向分辨率）
    pub pixel_width: f64,
    /// x 方向旋转（通常为 0）
    pub rotation_x: f64,
    /// 左上角 y 坐标
    pub origin_y: f64,
    /// y 方向旋转（通常为 0）
    pub rotation_y: f64,
    /// 像素高度（y 方向分辨率，通常为负）
    pub pixel_height: f64,
}

impl GeoTransform {
    /// 创建简单的仿射变换（无旋转）
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            pixel_width,
            rotation_x: 0.0,
            origin_y,
            rotation_y: 0.0,
            pixel_height,
        }
    }

    /// 从 GDAL 六参数数组创建
    pub fn from_gdal(gt: [f64; 6]) -> Self {
        Self {
            origin_x: gt[0],
            pixel_width: gt[1],
            rotation_x: gt[2],
            origin_y: gt[3],
            rotation_y: gt[4],
            pixel_height: gt[5],
        }
    }

    /// 转为 GDAL 六参数数组
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.pixel_width,
            self.rotation_x,
            self.origin_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }

    /// 是否包含旋转项
    pub fn has_rotation(&self) -> bool {
        self.rotation_x != 0.0 || self.rotation_y != 0.0
    }
}

/// 空间框架：目标栅格的形状、仿射变换与坐标参考系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialFrame {
    rows: usize,
    cols: usize,
    transform: GeoTransform,
    /// 投影 WKT
    projection: Option<String>,
}

impl SpatialFrame {
    /// 创建空间框架
    ///
    /// 行列数必须为正，像素尺寸必须为非零有限值。
    pub fn new(
        rows: usize,
        cols: usize,
        transform: GeoTransform,
        projection: Option<String>,
    ) -> FgResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(FgError::format("spatial frame shape", "rows > 0 且 cols > 0", format!("{rows}x{cols}")));
        }
        for (key, value) in [
            ("pixel_width", transform.pixel_width),
            ("pixel_height", transform.pixel_height),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(FgError::format(key, "非零有限值", value));
            }
        }
        let projection = projection.filter(|wkt| !wkt.trim().is_empty());
        Ok(Self {
            rows,
            cols,
            transform,
            projection,
        })
    }

    /// 行数
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 仿射变换
    #[inline]
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// 投影 WKT
    pub fn projection(&self) -> Option<&str> {
        self.projection.as_deref()
    }

    /// 地理范围 (min_x, min_y, max_x, max_y)
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let gt = &self.transform;
        let x0 = gt.origin_x;
        let y0 = gt.origin_y;
        let x1 = x0 + self.cols as f64 * gt.pixel_width;
        let y1 = y0 + self.rows as f64 * gt.pixel_height;

        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// 目标网格的列坐标
    ///
    /// 从 x 原点线性分布到 `x0 + pixel_width * cols`，端点包含在内。
    pub fn column_coordinates(&self) -> Vec<f64> {
        let gt = &self.transform;
        linspace(gt.origin_x, gt.origin_x + gt.pixel_width * self.cols as f64, self.cols)
    }

    /// 目标网格的行坐标，自下而上
    ///
    /// 从 `y0 + pixel_height * rows` 线性分布到 y 原点。
    pub fn row_coordinates_bottom_up(&self) -> Vec<f64> {
        let gt = &self.transform;
        linspace(gt.origin_y + gt.pixel_height * self.rows as f64, gt.origin_y, self.rows)
    }
}

/// 等间距序列，包含两个端点
///
/// `n == 1` 时只返回起点；最后一个元素精确等于 `stop`。
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_4x5() -> SpatialFrame {
        SpatialFrame::new(4, 5, GeoTransform::new(0.0, 0.0, 1.0, -1.0), None).unwrap()
    }

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 5.0, 5);
        assert_eq!(v.len(), 5);
        assert!((v[0] - 0.0).abs() < 1e-12);
        assert!((v[1] - 1.25).abs() < 1e-12);
        assert_eq!(v[4], 5.0);

        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_gdal_roundtrip_order() {
        let gt = [100.0, 2.0, 0.0, 500.0, 0.0, -2.0];
        let t = GeoTransform::from_gdal(gt);
        assert_eq!(t.origin_x, 100.0);
        assert_eq!(t.origin_y, 500.0);
        assert_eq!(t.pixel_height, -2.0);
        assert_eq!(t.to_gdal(), gt);
        assert!(!t.has_rotation());
    }

    #[test]
    fn test_frame_coordinates() {
        let frame = frame_4x5();
        assert_eq!(frame.shape(), (4, 5));

        let xs = frame.column_coordinates();
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[4], 5.0);

        let ys = frame.row_coordinates_bottom_up();
        assert_eq!(ys.len(), 4);
        assert_eq!(ys[0], -4.0);
        assert_eq!(ys[3], 0.0);
        assert!(ys.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_frame_extent() {
        let frame = frame_4x5();
        let (min_x, min_y, max_x, max_y) = frame.extent();
        assert_eq!((min_x, min_y, max_x, max_y), (0.0, -4.0, 5.0, 0.0));
    }

    #[test]
    fn test_frame_rejects_degenerate() {
        assert!(SpatialFrame::new(0, 5, GeoTransform::new(0.0, 0.0, 1.0, -1.0), None).is_err());
        assert!(SpatialFrame::new(4, 5, GeoTransform::new(0.0, 0.0, 0.0, -1.0), None).is_err());
    }

    #[test]
    fn test_empty_projection_is_none() {
        let frame = SpatialFrame::new(
            1,
            1,
            GeoTransform::new(0.0, 0.0, 1.0, -1.0),
            Some("  ".to_string()),
        )
        .unwrap();
        assert!(frame.projection().is_none());
    }
}
