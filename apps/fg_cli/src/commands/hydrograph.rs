// apps/fg_cli/src/commands/hydrograph.rs

//! 流量过程线命令
//!
//! 把预测流量、实测流量和汇总降雨按小时对齐，报告洪峰并可导出 CSV。

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use fg_io::HydrographTable;
use std::path::PathBuf;
use tracing::info;

/// 过程线参数
#[derive(Args)]
pub struct HydrographArgs {
    /// 预测流量序列
    #[arg(long)]
    pub predicted: PathBuf,

    /// 实测流量序列
    #[arg(long)]
    pub observed: PathBuf,

    /// 汇总降雨序列
    #[arg(long)]
    pub rainfall: PathBuf,

    /// 起始时刻 (YYYY-MM-DD HH:MM)
    #[arg(long, default_value = "2012-01-01 00:00")]
    pub start: String,

    /// CSV 输出路径
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 执行过程线命令
pub fn execute(args: HydrographArgs) -> Result<()> {
    let start = NaiveDateTime::parse_from_str(&args.start, "%Y-%m-%d %H:%M")
        .with_context(|| format!("无效的起始时刻 '{}'", args.start))?;

    let table = HydrographTable::load(start, &args.predicted, &args.observed, &args.rainfall)
        .context("无法生成过程线表")?;

    println!("时段: {} 小时, 起始 {}", table.len(), start.format("%Y/%m/%d %H:%M"));
    match table.peak() {
        Some((time, q)) => println!("预测洪峰: {q} m³/s @ {}", time.format("%Y/%m/%d %H:%M")),
        None => println!("预测洪峰: 无有效数据"),
    }

    if let Some(output) = &args.output {
        table.write_csv(output)?;
        info!("已写出 {}", output.display());
    }

    Ok(())
}
