// apps/fg_cli/src/commands/rainfall.rs

//! 降雨表汇总命令

use anyhow::{Context, Result};
use clap::Args;
use fg_io::import::{aggregate_rainfall, write_rainfall};
use std::path::PathBuf;
use tracing::info;

/// 降雨汇总参数
#[derive(Args)]
pub struct RainfallArgs {
    /// 降雨表（第一行为表头）
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出文件，每行一个汇总值
    #[arg(short, long)]
    pub output: PathBuf,
}

/// 执行降雨汇总命令
pub fn execute(args: RainfallArgs) -> Result<()> {
    let sums = aggregate_rainfall(&args.input)
        .with_context(|| format!("无法汇总降雨表 {}", args.input.display()))?;
    write_rainfall(&args.output, &sums)?;

    info!("已写出 {} 行: {}", sums.len(), args.output.display());
    Ok(())
}
