// crates/fg_terrain/src/interpolation/triangulation.rs

//! 散点 Delaunay 三角化
//!
//! 非有限坐标的点不参与三角化；三角形顶点索引始终指向原始采样点数组。

use delaunator::Point;
use thiserror::Error;

/// 三角化错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// 有效点少于 3 个
    #[error("有效采样点不足: {count} 个 (至少需要 3 个)")]
    TooFewPoints {
        /// 有效点数量
        count: usize,
    },

    /// 所有点共线或重合
    #[error("{count} 个采样点全部共线或重合，无法构成三角网")]
    Collinear {
        /// 有效点数量
        count: usize,
    },
}

/// Delaunay 三角网
#[derive(Debug, Clone)]
pub struct Triangulation {
    /// 三角形顶点（原始采样点索引）
    triangles: Vec<[usize; 3]>,
}

impl Triangulation {
    /// 构建三角网
    pub fn build(points: &[[f64; 2]]) -> Result<Self, TriangulationError> {
        let mut index_map = Vec::with_capacity(points.len());
        let mut finite = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if p[0].is_finite() && p[1].is_finite() {
                index_map.push(i);
                finite.push(Point { x: p[0], y: p[1] });
            }
        }

        let count = finite.len();
        if count < 3 {
            return Err(TriangulationError::TooFewPoints { count });
        }

        let result = delaunator::triangulate(&finite);
        if result.triangles.is_empty() {
            return Err(TriangulationError::Collinear { count });
        }

        let triangles = result
            .triangles
            .chunks_exact(3)
            .map(|t| [index_map[t[0]], index_map[t[1]], index_map[t[2]]])
            .collect();

        log::debug!("三角化完成: {} 个点, {} 个三角形", count, result.triangles.len() / 3);

        Ok(Self { triangles })
    }

    /// 三角形列表
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }
}
