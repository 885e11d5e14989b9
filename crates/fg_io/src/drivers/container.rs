// crates/fg_io/src/drivers/container.rs

//! 结果容器抽象
//!
//! 层级式结果文件（HDF5）中按路径存放的二维数值数据集。
//! [`read_mesh_samples`] 在读取任何数据前先确认两个数据集都存在。

use fg_config::DatasetKeys;
use fg_foundation::error::{FgError, FgResult};
use fg_terrain::MeshSamples;
use ndarray::Array2;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 结果容器 trait
pub trait ResultContainer {
    /// 容器位置（用于错误信息）
    fn location(&self) -> &Path;

    /// 数据集是否存在
    fn contains(&self, dataset: &str) -> bool;

    /// 读取二维数据集
    fn read_matrix(&self, dataset: &str) -> FgResult<Array2<f64>>;
}

/// 从结果容器读取网格采样点集
///
/// 坐标或数值数据集缺失时返回 `DataNotFound`；形状不一致时返回 `FormatError`。
pub fn read_mesh_samples<C>(container: &C, keys: &DatasetKeys) -> FgResult<MeshSamples>
where
    C: ResultContainer + ?Sized,
{
    let coordinates_path = keys.coordinates_path();
    let values_path = keys.values_path();

    for path in [&coordinates_path, &values_path] {
        if !container.contains(path) {
            return Err(FgError::data_not_found(container.location(), path.as_str()));
        }
    }

    let coordinates = container.read_matrix(&coordinates_path)?;
    let values = container.read_matrix(&values_path)?;

    let samples = MeshSamples::from_coordinate_matrix(&coordinates, values)?;
    log::debug!(
        "读取采样点集: {} 个单元, {} 个时间步 ({})",
        samples.n_cells(),
        samples.n_steps(),
        container.location().display()
    );
    Ok(samples)
}

/// 内存结果容器
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    location: PathBuf,
    datasets: BTreeMap<String, Array2<f64>>,
}

impl MemoryContainer {
    /// 创建空容器
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            datasets: BTreeMap::new(),
        }
    }

    /// 写入数据集
    pub fn insert(&mut self, dataset: impl Into<String>, data: Array2<f64>) {
        self.datasets.insert(dataset.into(), data);
    }

    /// 链式写入数据集
    pub fn with_dataset(mut self, dataset: impl Into<String>, data: Array2<f64>) -> Self {
        self.insert(dataset, data);
        self
    }

    /// 按配置的路径写入坐标与数值
    pub fn with_samples(self, keys: &DatasetKeys, coordinates: Array2<f64>, values: Array2<f64>) -> Self {
        self.with_dataset(keys.coordinates_path(), coordinates)
            .with_dataset(keys.values_path(), values)
    }
}

impl ResultContainer for MemoryContainer {
    fn location(&self) -> &Path {
        &self.location
    }

    fn contains(&self, dataset: &str) -> bool {
        self.datasets.contains_key(dataset)
    }

    fn read_matrix(&self, dataset: &str) -> FgResult<Array2<f64>> {
        self.datasets
            .get(dataset)
            .cloned()
            .ok_or_else(|| FgError::data_not_found(&self.location, dataset))
    }
}
