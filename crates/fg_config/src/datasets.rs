// crates/fg_config/src/datasets.rs

//! 结果容器内部数据集路径
//!
//! 默认值对应 HEC-RAS 二维计划结果文件（`*.p01.hdf`）的布局。

use serde::{Deserialize, Serialize};

/// 数据集路径配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetKeys {
    /// 二维流动区域名称
    #[serde(default = "default_area")]
    pub area: String,

    /// 几何组
    #[serde(default = "default_geometry_group")]
    pub geometry_group: String,

    /// 结果组
    #[serde(default = "default_results_group")]
    pub results_group: String,

    /// 单元中心坐标数据集名 (N×2)
    #[serde(default = "default_coordinates")]
    pub coordinates: String,

    /// 数值数据集名 (T×N)
    #[serde(default = "default_values")]
    pub values: String,
}

fn default_area() -> String {
    "Perimeter 1".to_string()
}
fn default_geometry_group() -> String {
    "Geometry/2D Flow Areas".to_string()
}
fn default_results_group() -> String {
    "Results/Unsteady/Output/Output Blocks/Base Output/Unsteady Time Series/2D Flow Areas"
        .to_string()
}
fn default_coordinates() -> String {
    "Cells Center Coordinate".to_string()
}
fn default_values() -> String {
    "Depth".to_string()
}

impl Default for DatasetKeys {
    fn default() -> Self {
        Self {
            area: default_area(),
            geometry_group: default_geometry_group(),
            results_group: default_results_group(),
            coordinates: default_coordinates(),
            values: default_values(),
        }
    }
}

impl DatasetKeys {
    /// 指定区域名的默认配置
    pub fn for_area(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            ..Default::default()
        }
    }

    /// 坐标数据集完整路径
    pub fn coordinates_path(&self) -> String {
        join_path(&[&self.geometry_group, &self.area, &self.coordinates])
    }

    /// 数值数据集完整路径
    pub fn values_path(&self) -> String {
        join_path(&[&self.results_group, &self.area, &self.values])
    }
}

/// 用 `/` 拼接路径段，忽略多余的分隔符
fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let keys = DatasetKeys::default();
        assert_eq!(
            keys.coordinates_path(),
            "Geometry/2D Flow Areas/Perimeter 1/Cells Center Coordinate"
        );
        assert_eq!(
            keys.values_path(),
            "Results/Unsteady/Output/Output Blocks/Base Output/Unsteady Time Series/2D Flow Areas/Perimeter 1/Depth"
        );
    }

    #[test]
    fn test_custom_area_and_slashes() {
        let mut keys = DatasetKeys::for_area("Upper Reach");
        keys.geometry_group = "/Geometry/2D Flow Areas/".to_string();
        keys.values = "Water Surface".to_string();
        assert_eq!(
            keys.coordinates_path(),
            "Geometry/2D Flow Areas/Upper Reach/Cells Center Coordinate"
        );
        assert!(keys.values_path().ends_with("Upper Reach/Water Surface"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let keys: DatasetKeys = serde_json::from_str(r#"{"area": "Perimeter 2"}"#).unwrap();
        assert_eq!(keys.area, "Perimeter 2");
        assert_eq!(keys.values, "Depth");
    }
}
