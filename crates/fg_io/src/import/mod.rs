// crates/fg_io/src/import/mod.rs

//! 预报输入导入模块

pub mod rainfall;
pub mod series;

pub use rainfall::{aggregate_rainfall, aggregate_rainfall_str, write_rainfall, RainfallSum};
pub use series::{load_series, parse_series, HydrographRow, HydrographTable};
