// crates/fg_terrain/src/samples.rs

//! 网格单元采样点集
//!
//! 所有时间步共享同一组单元中心坐标，数值矩阵每行对应一个时间步，
//! 每列对应一个单元，与坐标逐一对齐。

use fg_foundation::error::{FgError, FgResult};
use ndarray::{Array2, ArrayView1};

/// 网格采样点集
#[derive(Debug, Clone)]
pub struct MeshSamples {
    /// 单元中心坐标 (N)
    coordinates: Vec<[f64; 2]>,
    /// 数值矩阵 (T×N)
    values: Array2<f64>,
}

impl MeshSamples {
    /// 创建采样点集
    ///
    /// 数值矩阵的列数必须等于坐标数量。
    pub fn new(coordinates: Vec<[f64; 2]>, values: Array2<f64>) -> FgResult<Self> {
        let (_, n_cols) = values.dim();
        if n_cols != coordinates.len() {
            return Err(FgError::format(
                "cell values row length",
                coordinates.len(),
                n_cols,
            ));
        }
        Ok(Self { coordinates, values })
    }

    /// 从 N×2 坐标矩阵创建
    pub fn from_coordinate_matrix(coordinates: &Array2<f64>, values: Array2<f64>) -> FgResult<Self> {
        let (n, dims) = coordinates.dim();
        if dims != 2 {
            return Err(FgError::format("cell center coordinates", "Nx2", format!("{n}x{dims}")));
        }
        let coords = coordinates
            .outer_iter()
            .map(|row| [row[0], row[1]])
            .collect();
        Self::new(coords, values)
    }

    /// 单元数量 N
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.coordinates.len()
    }

    /// 时间步数量 T
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.values.nrows()
    }

    /// 单元中心坐标
    #[inline]
    pub fn coordinates(&self) -> &[[f64; 2]] {
        &self.coordinates
    }

    /// 数值矩阵
    #[inline]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// 获取某一时间步的数值（0 起索引）
    pub fn step_values(&self, step: usize) -> Option<ArrayView1<'_, f64>> {
        (step < self.n_steps()).then(|| self.values.row(step))
    }

    /// 坐标包围盒 (min_x, min_y, max_x, max_y)，仅统计有限坐标
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.coordinates
            .iter()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .fold(None, |acc, p| {
                Some(match acc {
                    None => (p[0], p[1], p[0], p[1]),
                    Some((x0, y0, x1, y1)) => (x0.min(p[0]), y0.min(p[1]), x1.max(p[0]), y1.max(p[1])),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shape_mismatch_is_format_error() {
        let coords = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let values = Array2::<f64>::zeros((2, 4));
        let err = MeshSamples::new(coords, values).unwrap_err();
        assert!(matches!(err, FgError::FormatError { .. }));
    }

    #[test]
    fn test_coordinate_matrix_must_be_n_by_2() {
        let coords = Array2::<f64>::zeros((3, 3));
        let values = Array2::<f64>::zeros((1, 3));
        assert!(MeshSamples::from_coordinate_matrix(&coords, values).is_err());
    }

    #[test]
    fn test_step_access() {
        let coords = array![[0.0, 0.0], [2.0, 0.0], [0.0, 3.0]];
        let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let samples = MeshSamples::from_coordinate_matrix(&coords, values).unwrap();

        assert_eq!(samples.n_cells(), 3);
        assert_eq!(samples.n_steps(), 2);
        assert_eq!(samples.step_values(1).unwrap()[2], 6.0);
        assert!(samples.step_values(2).is_none());
        assert_eq!(samples.bounds(), Some((0.0, 0.0, 2.0, 3.0)));
    }
}
