// apps/fg_cli/src/main.rs

//! FloodGrid 命令行界面
//!
//! 把二维水动力模拟结果导出为逐时间步的 GeoTIFF，并提供预报辅助工具。
//!
//! # 架构层级
//!
//! 本模块属于应用层：只组装配置、调用工作流并打印结果，
//! 库层错误在这里统一转为 `anyhow::Error`。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;

/// FloodGrid 栅格时间序列工具
#[derive(Parser)]
#[command(name = "fg_cli")]
#[command(author = "FloodGrid Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mesh results to georeferenced raster time series", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 导出栅格时间序列
    Export(commands::export::ExportArgs),
    /// 显示参考栅格与结果容器信息
    Info(commands::info::InfoArgs),
    /// 验证导出配置
    Validate(commands::validate::ValidateArgs),
    /// 汇总降雨表
    Rainfall(commands::rainfall::RainfallArgs),
    /// 生成流量过程线表
    Hydrograph(commands::hydrograph::HydrographArgs),
    /// 运行外部模型
    RunModel(commands::run_model::RunModelArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // 同时接管库层的 log 记录
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    // 执行命令
    match cli.command {
        Commands::Export(args) => commands::export::execute(args),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Rainfall(args) => commands::rainfall::execute(args),
        Commands::Hydrograph(args) => commands::hydrograph::execute(args),
        Commands::RunModel(args) => commands::run_model::execute(args),
    }
}
