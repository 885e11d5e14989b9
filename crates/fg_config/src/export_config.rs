// crates/fg_config/src/export_config.rs

//! ExportConfig - 栅格时间序列导出配置
//!
//! 汇总一次导出运行所需的全部输入：参考栅格、结果容器、输出目录、
//! 时间步窗口、数据集路径以及单步插值失败时的处理策略。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::datasets::DatasetKeys;
use crate::error::ConfigError;
use crate::window::StepWindow;

/// 单步插值失败策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 跳过该时间步并记录警告
    #[default]
    SkipAndWarn,
    /// 中止整个批处理
    Abort,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 参考栅格路径（提供空间框架）
    pub reference_raster: PathBuf,

    /// 模拟结果容器路径
    pub result_container: PathBuf,

    /// 输出目录
    #[serde(default = "default_output_dir")]
    pub output_directory: PathBuf,

    /// 时间步窗口
    #[serde(default)]
    pub steps: StepWindow,

    /// 数据集路径
    #[serde(default)]
    pub datasets: DatasetKeys,

    /// 单步失败策略
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// 写入栅格的无数据值，`None` 表示使用 NaN
    #[serde(default)]
    pub nodata_value: Option<f64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl ExportConfig {
    /// 以默认选项创建
    pub fn new(reference_raster: impl Into<PathBuf>, result_container: impl Into<PathBuf>) -> Self {
        Self {
            reference_raster: reference_raster.into(),
            result_container: result_container.into(),
            output_directory: default_output_dir(),
            steps: StepWindow::default(),
            datasets: DatasetKeys::default(),
            failure_policy: FailurePolicy::default(),
            nodata_value: None,
        }
    }

    /// 设置输出目录
    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    /// 设置时间步窗口
    pub fn with_steps(mut self, steps: StepWindow) -> Self {
        self.steps = steps;
        self
    }

    /// 设置失败策略
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;

        let config: ExportConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_raster.as_os_str().is_empty() {
            return Err(ConfigError::Missing("reference_raster".to_string()));
        }

        if self.result_container.as_os_str().is_empty() {
            return Err(ConfigError::Missing("result_container".to_string()));
        }

        if self.output_directory.as_os_str().is_empty() {
            return Err(ConfigError::Missing("output_directory".to_string()));
        }

        self.steps.validate()?;

        for (key, value) in [
            ("datasets.area", &self.datasets.area),
            ("datasets.coordinates", &self.datasets.coordinates),
            ("datasets.values", &self.datasets.values),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(key, value, "不能为空"));
            }
        }

        if let Some(nodata) = self.nodata_value {
            if !nodata.is_finite() {
                return Err(ConfigError::invalid("nodata_value", nodata, "必须为有限值"));
            }
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }
}
