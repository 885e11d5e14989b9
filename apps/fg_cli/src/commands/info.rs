// apps/fg_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示参考栅格的空间框架、结果容器中的数据集形状以及默认配置。

use anyhow::{Context, Result};
use clap::Args;
use fg_config::{DatasetKeys, ExportConfig};
use fg_io::{GdalDriver, Hdf5Container, ResultContainer};
use std::path::{Path, PathBuf};
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 参考栅格
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// 结果容器 (HDF5)
    #[arg(short = 'i', long)]
    pub container: Option<PathBuf>,

    /// 二维流动区域名称
    #[arg(long)]
    pub area: Option<String>,

    /// 显示默认配置
    #[arg(long)]
    pub defaults: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== FloodGrid 信息 ===");

    if let Some(reference) = &args.reference {
        print_frame(reference)?;
    }

    if let Some(container) = &args.container {
        let keys = match &args.area {
            Some(area) => DatasetKeys::for_area(area.as_str()),
            None => DatasetKeys::default(),
        };
        print_container(container, &keys)?;
    }

    if args.defaults || (args.reference.is_none() && args.container.is_none()) {
        print_default_config()?;
    }

    Ok(())
}

fn print_frame(path: &Path) -> Result<()> {
    let driver = GdalDriver::open(path)
        .with_context(|| format!("无法读取参考栅格 {}", path.display()))?;
    let frame = driver.frame();
    let gt = frame.transform();
    let (min_x, min_y, max_x, max_y) = frame.extent();

    println!("=== 参考栅格: {} ===", path.display());
    println!("尺寸: {} 行 x {} 列, {} 个波段", frame.rows(), frame.cols(), driver.band_count());
    println!("原点: ({}, {})", gt.origin_x, gt.origin_y);
    println!("像素: ({}, {})", gt.pixel_width, gt.pixel_height);
    if gt.has_rotation() {
        println!("旋转: ({}, {})", gt.rotation_x, gt.rotation_y);
    }
    println!("范围: x {min_x} ~ {max_x}, y {min_y} ~ {max_y}");
    match driver.nodata() {
        Some(nd) => println!("无数据值: {nd}"),
        None => println!("无数据值: 未设置"),
    }
    match frame.projection() {
        Some(wkt) => println!("投影: {wkt}"),
        None => println!("投影: 未设置"),
    }
    println!();
    Ok(())
}

fn print_container(path: &Path, keys: &DatasetKeys) -> Result<()> {
    let container = Hdf5Container::open(path)
        .with_context(|| format!("无法打开结果容器 {}", path.display()))?;

    println!("=== 结果容器: {} ===", path.display());
    for (label, dataset) in [("坐标", keys.coordinates_path()), ("数值", keys.values_path())] {
        if container.contains(&dataset) {
            let shape = container.shape(&dataset)?;
            println!("{label}: {dataset} {shape:?}");
        } else {
            println!("{label}: {dataset} (不存在)");
        }
    }
    println!();
    Ok(())
}

fn print_default_config() -> Result<()> {
    println!("=== 默认配置 ===");
    let config = ExportConfig::new("reference.tif", "plan.p01.hdf");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
