// apps/fg_cli/src/commands/validate.rs

//! 配置验证命令
//!
//! 检查导出配置的字段取值以及引用的文件是否存在。

use anyhow::{bail, Result};
use clap::Args;
use fg_config::ExportConfig;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== FloodGrid 配置验证 ===");

    let mut result = ValidationResult::default();
    println!("\n检查配置文件: {}", args.config.display());

    match ExportConfig::from_file(&args.config) {
        Ok(config) => {
            println!("  ✓ 配置文件格式有效");
            check_paths(&config, &mut result);
        }
        Err(e) => result.add_error(e.to_string()),
    }

    print_validation_result(&result, args.strict)
}

fn check_paths(config: &ExportConfig, result: &mut ValidationResult) {
    if !config.reference_raster.exists() {
        result.add_error(format!("参考栅格不存在: {}", config.reference_raster.display()));
    }
    if !config.result_container.exists() {
        result.add_error(format!("结果容器不存在: {}", config.result_container.display()));
    }

    let existing = existing_rasters(&config.output_directory);
    if existing > 0 {
        result.add_warning(format!(
            "输出目录 {} 已有 {} 个 .tif 文件，同名文件将被覆盖",
            config.output_directory.display(),
            existing
        ));
    }
}

fn existing_rasters(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().extension().is_some_and(|ext| ext == "tif"))
                .count()
        })
        .unwrap_or(0)
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    // 输出错误
    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    // 输出警告
    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    let success = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
