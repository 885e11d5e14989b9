// crates/fg_workflow/src/report.rs

//! 批处理结果

use fg_io::WrittenRaster;
use std::fmt::Write as _;
use std::ops::Range;

/// 被跳过的时间步
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStep {
    /// 时间步索引（1 起）
    pub step: usize,
    /// 原因
    pub reason: String,
}

/// 批处理结果
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// 请求的时间步（0 起索引区间）
    pub requested: Range<usize>,
    /// 序列总步数
    pub total_steps: usize,
    /// 已写出的栅格
    pub written: Vec<WrittenRaster>,
    /// 被跳过的时间步
    pub skipped: Vec<SkippedStep>,
    /// 是否被取消
    pub cancelled: bool,
}

impl BatchReport {
    /// 创建空结果
    pub fn new(requested: Range<usize>, total_steps: usize) -> Self {
        Self {
            requested,
            total_steps,
            ..Default::default()
        }
    }

    /// 已写出的时间步
    pub fn written_steps(&self) -> Vec<usize> {
        self.written.iter().map(|w| w.step).collect()
    }

    /// 已处理（写出或跳过）的步数
    pub fn processed(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    /// 是否全部写出
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.skipped.is_empty() && self.written.len() == self.requested.len()
    }

    /// 文本摘要
    pub fn summary(&self) -> String {
        let mut out = format!(
            "时间步 {}..={} (共 {} 步): 已处理 {}/{}, 写出 {}, 跳过 {}",
            self.requested.start + 1,
            self.requested.end,
            self.total_steps,
            self.processed(),
            self.requested.len(),
            self.written.len(),
            self.skipped.len()
        );
        if self.cancelled {
            out.push_str(", 已取消");
        }
        for skipped in &self.skipped {
            let _ = write!(out, "\n  第 {} 步: {}", skipped.step, skipped.reason);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_lists_skipped() {
        let mut report = BatchReport::new(7..12, 12);
        report.written.push(WrittenRaster {
            step: 8,
            path: PathBuf::from("out/8.tif"),
            statistics: None,
        });
        report.skipped.push(SkippedStep {
            step: 9,
            reason: "点数不足".to_string(),
        });

        let summary = report.summary();
        assert!(summary.starts_with("时间步 8..=12 (共 12 步): 已处理 2/5, 写出 1, 跳过 1"));
        assert!(summary.contains("第 9 步: 点数不足"));
        assert!(!report.is_complete());
    }
}
