// crates/fg_workflow/src/external.rs

//! 外部模型可执行程序
//!
//! 产流模型与栅格后处理工具作为阻塞子进程运行，只通过文件交换数据。

use fg_foundation::error::{FgError, FgResult};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 外部模型
#[derive(Debug, Clone)]
pub struct ExternalModel {
    program: PathBuf,
    args: Vec<OsString>,
    working_dir: Option<PathBuf>,
}

impl ExternalModel {
    /// 创建
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// 追加参数
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// 追加多个参数
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// 设置工作目录
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// 程序路径
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// 运行并等待结束
    pub fn run(&self) -> FgResult<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        if let Some(dir) = &self.working_dir {
            if !dir.is_dir() {
                return Err(FgError::resource_unavailable(dir, "工作目录不存在"));
            }
            command.current_dir(dir);
        }

        tracing::info!("运行外部程序: {}", self.program.display());
        let status = command.status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => FgError::resource_unavailable(&self.program, "可执行程序不存在"),
            ErrorKind::PermissionDenied => FgError::resource_unavailable(&self.program, e),
            _ => FgError::external_tool(&self.program, e.to_string()),
        })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("退出码 {code}"),
                None => "被信号终止".to_string(),
            };
            return Err(FgError::external_tool(&self.program, reason));
        }

        tracing::info!("外部程序完成: {}", self.program.display());
        Ok(())
    }
}
