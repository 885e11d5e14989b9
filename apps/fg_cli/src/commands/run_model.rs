// apps/fg_cli/src/commands/run_model.rs

//! 外部模型命令
//!
//! 阻塞运行产流模型或栅格后处理程序。

use anyhow::{Context, Result};
use clap::Args;
use fg_workflow::ExternalModel;
use std::path::PathBuf;

/// 外部模型参数
#[derive(Args)]
pub struct RunModelArgs {
    /// 可执行程序路径
    pub program: PathBuf,

    /// 工作目录
    #[arg(short, long)]
    pub workdir: Option<PathBuf>,

    /// 传给程序的参数
    #[arg(last = true)]
    pub args: Vec<String>,
}

/// 执行外部模型命令
pub fn execute(args: RunModelArgs) -> Result<()> {
    let mut model = ExternalModel::new(&args.program).args(&args.args);
    if let Some(dir) = &args.workdir {
        model = model.current_dir(dir);
    }

    model
        .run()
        .with_context(|| format!("外部程序 {} 运行失败", args.program.display()))?;
    println!("运行完成: {}", args.program.display());
    Ok(())
}
