// crates/fg_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `FgError` 枚举和 `FgResult` 类型别名。每个错误都携带足以定位问题的
//! 上下文：文件路径、数据集路径或时间步索引。
//!
//! # 错误分类
//!
//! | 类别 | 典型来源 | 批处理行为 |
//! |------|---------|-----------|
//! | `ResourceUnavailable` | 参考栅格、结果容器、输出目录 | 中止 |
//! | `DataNotFound` | 结果容器内缺失的数据集 | 中止 |
//! | `StepOutOfRange` | 时间步窗口超出可用范围 | 中止 |
//! | `FormatError` | 坐标与数值维度不一致 | 中止 |
//! | `InterpolationFailed` | 点集不足或共线 | 按失败策略处理 |
//!
//! # 示例
//!
//! ```
//! use fg_foundation::error::{FgError, FgResult};
//!
//! fn check_cells(expected: usize, actual: usize) -> FgResult<()> {
//!     FgError::check_size("cell values", expected, actual)
//! }
//!
//! assert!(check_cells(3, 3).is_ok());
//! assert!(matches!(check_cells(3, 2), Err(FgError::FormatError { .. })));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type FgResult<T> = Result<T, FgError>;

/// FloodGrid 错误类型
#[derive(Error, Debug)]
pub enum FgError {
    // ========================================================================
    // 资源与数据
    // ========================================================================
    /// 文件或目录无法打开/写入
    #[error("资源不可用: {path}: {reason}")]
    ResourceUnavailable {
        /// 相关路径
        path: PathBuf,
        /// 原因
        reason: String,
    },

    /// 结果容器中缺少数据集
    #[error("数据集不存在: {container} 中缺少 '{dataset}'")]
    DataNotFound {
        /// 容器路径
        container: PathBuf,
        /// 容器内部数据集路径
        dataset: String,
    },

    /// 请求的时间步超出可用范围
    #[error("时间步超出范围: 请求 {first}..={last}, 可用 1..={available}")]
    StepOutOfRange {
        /// 请求的首个时间步（1 起）
        first: usize,
        /// 请求的最后时间步（1 起）
        last: usize,
        /// 可用时间步数
        available: usize,
    },

    /// 维度或形状不一致
    #[error("数据格式错误: {name} 期望 {expected}, 实际 {actual}")]
    FormatError {
        /// 数据名称
        name: String,
        /// 期望形状
        expected: String,
        /// 实际形状
        actual: String,
    },

    /// 单个时间步插值失败
    #[error("第 {step} 步插值失败: {reason}")]
    InterpolationFailed {
        /// 时间步索引（1 起）
        step: usize,
        /// 原因
        reason: String,
    },

    // ========================================================================
    // 文本输入、配置、外部程序
    // ========================================================================
    /// 文本解析错误
    #[error("文件解析错误: {file} 第{line}行: {message}")]
    Parse {
        /// 文件路径
        file: PathBuf,
        /// 行号（1 起）
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 配置值无效
    #[error("配置错误: {key}: {reason}")]
    Config {
        /// 配置键
        key: String,
        /// 原因
        reason: String,
    },

    /// 编译时未启用的功能
    #[error("功能不可用: 需要启用 '{feature}' feature")]
    NotAvailable {
        /// feature 名称
        feature: &'static str,
    },

    /// 外部程序执行失败
    #[error("外部程序失败: {program}: {reason}")]
    ExternalTool {
        /// 程序路径
        program: PathBuf,
        /// 原因
        reason: String,
    },

    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        /// 底层 IO 错误
        #[source]
        source: Option<std::io::Error>,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl FgError {
    /// 资源不可用
    pub fn resource_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// 数据集不存在
    pub fn data_not_found(container: impl Into<PathBuf>, dataset: impl Into<String>) -> Self {
        Self::DataNotFound {
            container: container.into(),
            dataset: dataset.into(),
        }
    }

    /// 形状不匹配
    pub fn format(
        name: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::FormatError {
            name: name.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// 插值失败
    pub fn interpolation_failed(step: usize, reason: impl ToString) -> Self {
        Self::InterpolationFailed {
            step,
            reason: reason.to_string(),
        }
    }

    /// 解析错误
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// 配置错误
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// 外部程序失败
    pub fn external_tool(program: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ExternalTool {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &str, expected: usize, actual: usize) -> FgResult<()> {
        if expected != actual {
            Err(Self::format(name, expected, actual))
        } else {
            Ok(())
        }
    }

    /// 是否应中止整个批处理
    ///
    /// 只有插值失败可以限定在单个时间步内。
    pub fn is_step_local(&self) -> bool {
        matches!(self, Self::InterpolationFailed { .. })
    }
}

impl From<std::io::Error> for FgError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = FgError::data_not_found("river.p01.hdf", "Geometry/2D Flow Areas/Perimeter 1");
        let msg = err.to_string();
        assert!(msg.contains("river.p01.hdf"));
        assert!(msg.contains("Perimeter 1"));

        let err = FgError::interpolation_failed(7, "点数不足");
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_check_size() {
        assert!(FgError::check_size("values", 4, 4).is_ok());
        match FgError::check_size("values", 4, 3) {
            Err(FgError::FormatError { name, expected, actual }) => {
                assert_eq!(name, "values");
                assert_eq!(expected, "4");
                assert_eq!(actual, "3");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_step_local() {
        assert!(FgError::interpolation_failed(1, "x").is_step_local());
        assert!(!FgError::resource_unavailable("a.tif", "x").is_step_local());
        assert!(!FgError::data_not_found("a.hdf", "b").is_step_local());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FgError = io.into();
        assert!(matches!(err, FgError::Io { source: Some(_), .. }));
    }
}
