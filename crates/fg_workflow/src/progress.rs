// crates/fg_workflow/src/progress.rs

//! 进度监听
//!
//! 批处理每写出一个时间步调用一次 [`ProgressListener::on_step_complete`]，
//! 参数为 1 起的时间步索引与序列总步数。

use fg_foundation::FgError;

/// 进度监听器 trait
pub trait ProgressListener: Send + Sync {
    /// 某一时间步已写出
    fn on_step_complete(&self, current_index: usize, total_steps: usize);

    /// 某一时间步被跳过
    fn on_step_skipped(&self, _step: usize, _reason: &FgError) {}
}

/// 不输出任何信息的监听器
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentListener;

impl ProgressListener for SilentListener {
    fn on_step_complete(&self, _current_index: usize, _total_steps: usize) {}
}

/// 函数式监听器
pub struct FnListener<F>
where
    F: Fn(usize, usize) + Send + Sync,
{
    handler: F,
}

impl<F> FnListener<F>
where
    F: Fn(usize, usize) + Send + Sync,
{
    /// 创建函数式监听器
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> ProgressListener for FnListener<F>
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_step_complete(&self, current_index: usize, total_steps: usize) {
        (self.handler)(current_index, total_steps);
    }
}

/// 日志监听器
pub struct LoggingListener {
    /// 日志前缀
    prefix: String,
}

impl LoggingListener {
    /// 创建日志监听器
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ProgressListener for LoggingListener {
    fn on_step_complete(&self, current_index: usize, total_steps: usize) {
        tracing::info!("[{}] 第 {}/{} 步已写出", self.prefix, current_index, total_steps);
    }

    fn on_step_skipped(&self, step: usize, reason: &FgError) {
        tracing::warn!("[{}] 跳过第 {} 步: {}", self.prefix, step, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_fn_listener() {
        let calls = Mutex::new(Vec::new());
        let listener = FnListener::new(|i, n| calls.lock().unwrap().push((i, n)));
        listener.on_step_complete(3, 10);
        listener.on_step_skipped(4, &FgError::interpolation_failed(4, "共线"));
        listener.on_step_complete(5, 10);
        assert_eq!(*calls.lock().unwrap(), vec![(3, 10), (5, 10)]);
    }
}
