// apps/fg_cli/src/commands/mod.rs

//! 子命令

pub mod export;
pub mod hydrograph;
pub mod info;
pub mod rainfall;
pub mod run_model;
pub mod validate;
