// crates/fg_terrain/src/interpolation/linear.rs

//! 线性重心坐标插值器
//!
//! 对散点构建 Delaunay 三角网，把每个三角形光栅化到目标网格上，
//! 为落在三角形内的网格点预计算三个顶点的重心权重。
//! 所有时间步共享坐标，因此权重只需计算一次，之后每个时间步只做加权求和。
//!
//! # 算法
//!
//! 1. 列坐标 `linspace(x0, x0 + pw*cols, cols)`，行坐标
//!    `linspace(y0 + ph*rows, y0, rows)`（自下而上）
//! 2. 凸包内的网格点做重心坐标线性插值，凸包外为 NaN
//! 3. 垂直翻转，使第 0 行对应北侧边界

use fg_foundation::error::{FgError, FgResult};
use ndarray::{s, Array2, ArrayView1};

use super::triangulation::{Triangulation, TriangulationError};
use crate::frame::SpatialFrame;

/// 重心坐标容差：边界上的点视为在三角形内
const BARYCENTRIC_EPS: f64 = 1e-10;

/// 三角形面积（两倍）小于该值时视为退化
const DEGENERATE_AREA: f64 = 1e-300;

/// 目标网格采样坐标
#[derive(Debug, Clone)]
pub struct TargetGrid {
    /// 列坐标
    xs: Vec<f64>,
    /// 行坐标（自下而上）
    ys: Vec<f64>,
}

impl TargetGrid {
    /// 从空间框架构建
    pub fn from_frame(frame: &SpatialFrame) -> Self {
        Self {
            xs: frame.column_coordinates(),
            ys: frame.row_coordinates_bottom_up(),
        }
    }

    /// 列坐标
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// 行坐标（自下而上）
    pub fn ys_bottom_up(&self) -> &[f64] {
        &self.ys
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.ys.len(), self.xs.len())
    }
}

/// 单个网格点的插值权重
#[derive(Debug, Clone, Copy)]
struct CellWeight {
    /// 三角形顶点（采样点索引）
    vertices: [u32; 3],
    /// 重心权重
    weights: [f64; 3],
}

/// 线性插值器
///
/// 预计算目标网格点到采样点的重心权重。
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    /// 每个网格点的权重（自下而上行优先），`None` 表示在凸包外
    cells: Vec<Option<CellWeight>>,
    /// (rows, cols)
    shape: (usize, usize),
    /// 采样点数量
    n_samples: usize,
    /// 凸包内网格点数量
    covered: usize,
}

impl LinearInterpolator {
    /// 从采样坐标和空间框架创建插值器
    pub fn new(points: &[[f64; 2]], frame: &SpatialFrame) -> Result<Self, TriangulationError> {
        let triangulation = Triangulation::build(points)?;
        Ok(Self::from_triangulation(points, &triangulation, &TargetGrid::from_frame(frame)))
    }

    /// 从已有三角网创建
    pub fn from_triangulation(
        points: &[[f64; 2]],
        triangulation: &Triangulation,
        grid: &TargetGrid,
    ) -> Self {
        let (rows, cols) = grid.shape();
        let mut cells: Vec<Option<CellWeight>> = vec![None; rows * cols];
        let mut covered = 0;

        for tri in triangulation.triangles() {
            let a = points[tri[0]];
            let b = points[tri[1]];
            let c = points[tri[2]];

            let det = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
            if det.abs() < DEGENERATE_AREA {
                continue;
            }

            let min_x = a[0].min(b[0]).min(c[0]);
            let max_x = a[0].max(b[0]).max(c[0]);
            let min_y = a[1].min(b[1]).min(c[1]);
            let max_y = a[1].max(b[1]).max(c[1]);

            let col_range = axis_range(grid.xs(), min_x, max_x);
            let row_range = axis_range(grid.ys_bottom_up(), min_y, max_y);

            for i in row_range {
                let py = grid.ys_bottom_up()[i];
                for j in col_range.clone() {
                    let idx = i * cols + j;
                    if cells[idx].is_some() {
                        continue;
                    }

                    let px = grid.xs()[j];
                    let wa = ((b[1] - c[1]) * (px - c[0]) + (c[0] - b[0]) * (py - c[1])) / det;
                    let wb = ((c[1] - a[1]) * (px - c[0]) + (a[0] - c[0]) * (py - c[1])) / det;
                    let wc = 1.0 - wa - wb;

                    if wa >= -BARYCENTRIC_EPS && wb >= -BARYCENTRIC_EPS && wc >= -BARYCENTRIC_EPS {
                        cells[idx] = Some(CellWeight {
                            vertices: [tri[0] as u32, tri[1] as u32, tri[2] as u32],
                            weights: [wa, wb, wc],
                        });
                        covered += 1;
                    }
                }
            }
        }

        log::debug!(
            "插值权重预计算完成: {}x{} 网格, {} 个网格点位于凸包内",
            rows,
            cols,
            covered
        );

        Self {
            cells,
            shape: (rows, cols),
            n_samples: points.len(),
            covered,
        }
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// 凸包内网格点数量
    #[inline]
    pub fn covered_cells(&self) -> usize {
        self.covered
    }

    /// 采样点数量
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// 对一个时间步的数值插值
    ///
    /// 返回的网格第 0 行为北侧（顶部），凸包外为 NaN。
    pub fn interpolate(&self, values: ArrayView1<'_, f64>) -> FgResult<Array2<f64>> {
        FgError::check_size("step values", self.n_samples, values.len())?;

        let (rows, cols) = self.shape;
        let mut bottom_up = Array2::from_elem((rows, cols), f64::NAN);
        for (cell, out) in self.cells.iter().zip(bottom_up.iter_mut()) {
            if let Some(w) = cell {
                *out = w
                    .vertices
                    .iter()
                    .zip(w.weights.iter())
                    .map(|(&v, &wt)| values[v as usize] * wt)
                    .sum();
            }
        }

        Ok(flip_rows(&bottom_up))
    }
}

/// 垂直翻转
fn flip_rows(grid: &Array2<f64>) -> Array2<f64> {
    grid.slice(s![..;-1, ..]).to_owned()
}

/// 单调坐标轴上覆盖 `[lo, hi]` 的索引范围
///
/// 两端各放宽一个索引，最终是否在三角形内由重心坐标判断。
fn axis_range(axis: &[f64], lo: f64, hi: f64) -> std::ops::Range<usize> {
    let n = axis.len();
    if n == 0 {
        return 0..0;
    }
    let ascending = axis[n - 1] >= axis[0];
    let (first, last) = if ascending {
        (
            axis.partition_point(|&v| v < lo),
            axis.partition_point(|&v| v <= hi),
        )
    } else {
        (
            axis.partition_point(|&v| v > hi),
            axis.partition_point(|&v| v >= lo),
        )
    };
    first.saturating_sub(1)..(last + 1).min(n)
}

/// 一次性散点插值
///
/// 对单个时间步执行完整流程；批处理应复用 [`LinearInterpolator`]。
pub fn interpolate_scattered(
    points: &[[f64; 2]],
    values: ArrayView1<'_, f64>,
    frame: &SpatialFrame,
    step: usize,
) -> FgResult<Array2<f64>> {
    FgError::check_size("step values", points.len(), values.len())?;
    let interp = LinearInterpolator::new(points, frame)
        .map_err(|e| FgError::interpolation_failed(step, e))?;
    interp.interpolate(values)
}
