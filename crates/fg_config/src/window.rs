// crates/fg_config/src/window.rs

//! 时间步窗口
//!
//! 决定批处理导出哪些时间步。时间步编号从 1 开始，与输出文件名 `{index}.tif` 一致。

use fg_foundation::error::{FgError, FgResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::ConfigError;

/// 时间步窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepWindow {
    /// 全部时间步
    All,
    /// 最后 `count` 个时间步
    Last {
        /// 步数
        count: usize,
    },
    /// 闭区间 `first..=last`（1 起）
    Range {
        /// 首个时间步
        first: usize,
        /// 最后时间步
        last: usize,
    },
}

impl Default for StepWindow {
    fn default() -> Self {
        Self::Last { count: 5 }
    }
}

impl StepWindow {
    /// 静态校验（不依赖可用步数）
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::All => Ok(()),
            Self::Last { count } if count == 0 => {
                Err(ConfigError::invalid("steps.count", count, "必须为正"))
            }
            Self::Last { .. } => Ok(()),
            Self::Range { first, .. } if first == 0 => {
                Err(ConfigError::invalid("steps.first", first, "时间步从 1 开始编号"))
            }
            Self::Range { first, last } if last < first => Err(ConfigError::invalid(
                "steps.last",
                last,
                "不能小于 steps.first",
            )),
            Self::Range { .. } => Ok(()),
        }
    }

    /// 解析为 0 起的索引区间
    ///
    /// 超出可用步数时返回 `StepOutOfRange`，不做截断。
    pub fn resolve(&self, available: usize) -> FgResult<Range<usize>> {
        self.validate()?;
        let (first, last) = match *self {
            Self::All => (1, available),
            Self::Last { count } => (available.saturating_sub(count) + 1, available),
            Self::Range { first, last } => (first, last),
        };

        let requested_count = match *self {
            Self::Last { count } => count,
            _ => last.saturating_sub(first) + 1,
        };

        if available == 0 || last > available || requested_count > available {
            return Err(FgError::StepOutOfRange {
                first,
                last: last.max(first.saturating_add(requested_count - 1)),
                available,
            });
        }

        Ok(first - 1..last)
    }
}
