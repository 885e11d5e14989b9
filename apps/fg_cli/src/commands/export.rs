// apps/fg_cli/src/commands/export.rs

//! 导出命令
//!
//! 从配置文件或命令行参数组装 `ExportConfig`，运行批处理并打印摘要。
//! 命令行参数覆盖配置文件中的同名项。

use anyhow::{bail, Context, Result};
use clap::Args;
use fg_config::{ExportConfig, FailurePolicy, StepWindow};
use fg_workflow::{export_rasters, CancellationToken, LoggingListener};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// 导出参数
#[derive(Args)]
pub struct ExportArgs {
    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 参考栅格
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// 结果容器 (HDF5)
    #[arg(short = 'i', long)]
    pub container: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 导出最后 N 个时间步
    #[arg(long, conflicts_with_all = ["all", "range"])]
    pub last: Option<usize>,

    /// 导出全部时间步
    #[arg(long, conflicts_with = "range")]
    pub all: bool,

    /// 导出闭区间 FIRST..=LAST（1 起）
    #[arg(long, num_args = 2, value_names = ["FIRST", "LAST"])]
    pub range: Option<Vec<usize>>,

    /// 二维流动区域名称
    #[arg(long)]
    pub area: Option<String>,

    /// 数值数据集名（如 Depth、Water Surface）
    #[arg(long)]
    pub values: Option<String>,

    /// 任一时间步插值失败即中止
    #[arg(long)]
    pub abort: bool,

    /// 无数据值（默认 NaN）
    #[arg(long)]
    pub nodata: Option<f64>,
}

/// 执行导出命令
pub fn execute(args: ExportArgs) -> Result<()> {
    info!("=== FloodGrid 栅格导出 ===");

    let config = build_config(args)?;
    config.validate().context("导出配置无效")?;

    info!("参考栅格: {}", config.reference_raster.display());
    info!("结果容器: {}", config.result_container.display());
    info!("输出目录: {}", config.output_directory.display());
    info!("时间步窗口: {:?}", config.steps);

    let start = Instant::now();
    let report = export_rasters(
        &config,
        &LoggingListener::new("export"),
        &CancellationToken::new(),
    )
    .context("导出失败")?;

    println!("{}", report.summary());
    for written in &report.written {
        println!("  {}", written.path.display());
    }
    info!("耗时 {:.2} s", start.elapsed().as_secs_f64());

    Ok(())
}

fn build_config(args: ExportArgs) -> Result<ExportConfig> {
    let mut config = match &args.config {
        Some(path) => ExportConfig::from_file(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
        None => match (&args.reference, &args.container) {
            (Some(reference), Some(container)) => ExportConfig::new(reference, container),
            _ => bail!("未指定 --config 时必须同时提供 --reference 与 --container"),
        },
    };

    if let Some(reference) = args.reference {
        config.reference_raster = reference;
    }
    if let Some(container) = args.container {
        config.result_container = container;
    }
    if let Some(output) = args.output {
        config.output_directory = output;
    }

    if let Some(count) = args.last {
        config.steps = StepWindow::Last { count };
    } else if args.all {
        config.steps = StepWindow::All;
    } else if let Some(range) = args.range {
        if let [first, last] = range[..] {
            config.steps = StepWindow::Range { first, last };
        }
    }

    if let Some(area) = args.area {
        config.datasets.area = area;
    }
    if let Some(values) = args.values {
        config.datasets.values = values;
    }
    if args.abort {
        config.failure_policy = FailurePolicy::Abort;
    }
    if args.nodata.is_some() {
        config.nodata_value = args.nodata;
    }

    Ok(config)
}
