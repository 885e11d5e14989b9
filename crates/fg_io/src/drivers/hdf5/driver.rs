// crates/fg_io/src/drivers/hdf5/driver.rs

//! HDF5 结果容器实现

use crate::drivers::container::ResultContainer;
use fg_foundation::error::{FgError, FgResult};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// HDF5 结果容器
///
/// 文件句柄随容器释放。
#[cfg(feature = "hdf5")]
pub struct Hdf5Container {
    path: PathBuf,
    file: ::hdf5::File,
}

#[cfg(feature = "hdf5")]
impl Hdf5Container {
    /// 以只读方式打开结果文件
    pub fn open(path: impl AsRef<Path>) -> FgResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FgError::resource_unavailable(path, "文件不存在"));
        }

        let file = ::hdf5::File::open(path)
            .map_err(|e| FgError::resource_unavailable(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// 数据集形状
    pub fn shape(&self, dataset: &str) -> FgResult<Vec<usize>> {
        Ok(self.open_dataset(dataset)?.shape())
    }

    fn open_dataset(&self, dataset: &str) -> FgResult<::hdf5::Dataset> {
        if !self.contains(dataset) {
            return Err(FgError::data_not_found(&self.path, dataset));
        }
        self.file
            .dataset(dataset)
            .map_err(|e| FgError::format(dataset, "数值数据集", e))
    }
}

#[cfg(feature = "hdf5")]
impl ResultContainer for Hdf5Container {
    fn location(&self) -> &Path {
        &self.path
    }

    fn contains(&self, dataset: &str) -> bool {
        // 逐级检查，中间组缺失时不会触发 HDF5 错误
        let mut prefix = String::new();
        for part in dataset.split('/').filter(|p| !p.is_empty()) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(part);
            if !self.file.link_exists(&prefix) {
                return false;
            }
        }
        !prefix.is_empty()
    }

    fn read_matrix(&self, dataset: &str) -> FgResult<Array2<f64>> {
        let ds = self.open_dataset(dataset)?;
        let shape = ds.shape();
        if shape.len() != 2 {
            return Err(FgError::format(dataset, "二维数组", format!("{shape:?}")));
        }

        let data: Vec<f64> = ds
            .read_raw::<f64>()
            .map_err(|e| FgError::resource_unavailable(&self.path, format!("{dataset}: {e}")))?;

        Array2::from_shape_vec((shape[0], shape[1]), data)
            .map_err(|e| FgError::format(dataset, format!("{}x{}", shape[0], shape[1]), e))
    }
}

/// 无 HDF5 支持时的占位实现
#[cfg(not(feature = "hdf5"))]
pub struct Hdf5Container {
    path: PathBuf,
}

#[cfg(not(feature = "hdf5"))]
impl Hdf5Container {
    /// 打开结果文件 (无 HDF5 支持)
    pub fn open(_path: impl AsRef<Path>) -> FgResult<Self> {
        Err(FgError::NotAvailable { feature: "hdf5" })
    }

    /// 数据集形状 (无 HDF5 支持)
    pub fn shape(&self, _dataset: &str) -> FgResult<Vec<usize>> {
        Err(FgError::NotAvailable { feature: "hdf5" })
    }
}

#[cfg(not(feature = "hdf5"))]
impl ResultContainer for Hdf5Container {
    fn location(&self) -> &Path {
        &self.path
    }

    fn contains(&self, _dataset: &str) -> bool {
        false
    }

    fn read_matrix(&self, _dataset: &str) -> FgResult<Array2<f64>> {
        Err(FgError::NotAvailable { feature: "hdf5" })
    }
}
