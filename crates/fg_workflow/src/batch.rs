// crates/fg_workflow/src/batch.rs

//! 批处理驱动
//!
//! 对窗口内的每个时间步依次插值并写出。三角化与插值权重只计算一次，
//! 因为所有时间步共享同一组单元中心坐标。
//!
//! 失败处理：
//! - 窗口越界在任何写出之前返回 `StepOutOfRange`
//! - 插值失败按 [`FailurePolicy`] 跳过或中止
//! - 写出失败直接中止
//! - 取消令牌在时间步之间检查，取消不视为错误

use crate::cancel::CancellationToken;
use crate::progress::ProgressListener;
use crate::report::{BatchReport, SkippedStep};
use fg_config::{FailurePolicy, StepWindow};
use fg_foundation::error::{FgError, FgResult};
use fg_io::RasterSink;
use fg_terrain::{InterpolatedGrid, LinearInterpolator, MeshSamples, SpatialFrame};

/// 批处理驱动
pub struct BatchDriver<'a> {
    frame: &'a SpatialFrame,
    samples: &'a MeshSamples,
    window: StepWindow,
    policy: FailurePolicy,
    token: CancellationToken,
}

impl<'a> BatchDriver<'a> {
    /// 以默认窗口（最后 5 步）和默认失败策略创建
    pub fn new(frame: &'a SpatialFrame, samples: &'a MeshSamples) -> Self {
        Self {
            frame,
            samples,
            window: StepWindow::default(),
            policy: FailurePolicy::default(),
            token: CancellationToken::new(),
        }
    }

    /// 设置时间步窗口
    pub fn with_window(mut self, window: StepWindow) -> Self {
        self.window = window;
        self
    }

    /// 设置失败策略
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 设置取消令牌
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// 运行批处理
    pub fn run(
        &self,
        sink: &mut dyn RasterSink,
        listener: &dyn ProgressListener,
    ) -> FgResult<BatchReport> {
        let total_steps = self.samples.n_steps();
        let range = self.window.resolve(total_steps)?;

        if !samples_overlap_frame(self.samples, self.frame) {
            tracing::warn!(
                "采样点范围 {:?} 与参考栅格范围 {:?} 不相交，输出将全部为无数据",
                self.samples.bounds(),
                self.frame.extent()
            );
        }

        let interpolator = LinearInterpolator::new(self.samples.coordinates(), self.frame);
        match &interpolator {
            Ok(interp) => tracing::debug!(
                "插值权重: {} 个采样点, 覆盖 {}/{} 个像元",
                interp.n_samples(),
                interp.covered_cells(),
                self.frame.rows() * self.frame.cols()
            ),
            Err(e) => tracing::warn!("三角化失败，窗口内各步均无法插值: {}", e),
        }

        tracing::info!(
            "开始导出: 时间步 {}..={} / {}",
            range.start + 1,
            range.end,
            total_steps
        );

        let mut report = BatchReport::new(range.clone(), total_steps);

        for index in range {
            if self.token.is_cancelled() {
                tracing::warn!("批处理已取消，已写出 {} 步", report.written.len());
                report.cancelled = true;
                break;
            }

            let step = index + 1;
            let values = self.samples.step_values(index).ok_or(FgError::StepOutOfRange {
                first: step,
                last: step,
                available: total_steps,
            })?;

            let result = match &interpolator {
                Ok(interp) => interp.interpolate(values),
                Err(e) => Err(FgError::interpolation_failed(step, e)),
            };

            match result {
                Ok(data) => {
                    let grid = InterpolatedGrid::new(step, data);
                    tracing::debug!("第 {} 步: 无数据像元 {}", step, grid.nodata_count());
                    let written = sink.write(&grid, self.frame)?;
                    report.written.push(written);
                    listener.on_step_complete(step, total_steps);
                }
                Err(err) if err.is_step_local() && self.policy == FailurePolicy::SkipAndWarn => {
                    tracing::warn!("跳过第 {} 步: {}", step, err);
                    listener.on_step_skipped(step, &err);
                    report.skipped.push(SkippedStep {
                        step,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            "导出结束: 写出 {}, 跳过 {}{}",
            report.written.len(),
            report.skipped.len(),
            if report.cancelled { " (已取消)" } else { "" }
        );

        Ok(report)
    }
}

/// 采样点包围盒是否与目标栅格范围相交
fn samples_overlap_frame(samples: &MeshSamples, frame: &SpatialFrame) -> bool {
    let Some((x0, y0, x1, y1)) = samples.bounds() else {
        return false;
    };
    let (fx0, fy0, fx1, fy1) = frame.extent();
    x0 <= fx1 && x1 >= fx0 && y0 <= fy1 && y1 >= fy0
}
