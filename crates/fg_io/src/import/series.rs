// crates/fg_io/src/import/series.rs

//! 流量序列与过程线表
//!
//! 预测流量、实测流量和汇总降雨都是单列文本，每行一个值，按小时对齐到
//! 同一时间轴上。

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use fg_foundation::error::{FgError, FgResult};
use std::fmt::Write as _;
use std::path::Path;

/// 解析单列序列，忽略空行
pub fn parse_series(content: &str, source: &Path) -> FgResult<Vec<f64>> {
    let mut values = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            FgError::parse(source, line_num + 1, format!("无效数值 '{trimmed}'"))
        })?;
        values.push(value);
    }
    Ok(values)
}

/// 读取单列序列文件
pub fn load_series(path: &Path) -> FgResult<Vec<f64>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FgError::resource_unavailable(path, e))?;
    parse_series(&content, path)
}

/// 过程线表中的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrographRow {
    /// 时刻
    pub time: NaiveDateTime,
    /// 预测流量 (m³/s)
    pub predicted: f64,
    /// 实测流量 (m³/s)
    pub observed: f64,
    /// 降雨量 (mm)
    pub rainfall: f64,
}

/// 过程线表
#[derive(Debug, Clone)]
pub struct HydrographTable {
    start: NaiveDateTime,
    predicted: Vec<f64>,
    observed: Vec<f64>,
    rainfall: Vec<f64>,
}

impl HydrographTable {
    /// 默认起始时刻 2012-01-01 00:00
    pub fn default_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2012, 1, 1)
            .unwrap_or_default()
            .and_time(NaiveTime::MIN)
    }

    /// 创建过程线表，三个序列长度必须一致
    pub fn new(
        start: NaiveDateTime,
        predicted: Vec<f64>,
        observed: Vec<f64>,
        rainfall: Vec<f64>,
    ) -> FgResult<Self> {
        FgError::check_size("observed flow length", predicted.len(), observed.len())?;
        FgError::check_size("rainfall length", predicted.len(), rainfall.len())?;
        Ok(Self {
            start,
            predicted,
            observed,
            rainfall,
        })
    }

    /// 从三个文件加载
    pub fn load(
        start: NaiveDateTime,
        predicted: &Path,
        observed: &Path,
        rainfall: &Path,
    ) -> FgResult<Self> {
        Self::new(
            start,
            load_series(predicted)?,
            load_series(observed)?,
            load_series(rainfall)?,
        )
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.predicted.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.predicted.is_empty()
    }

    /// 第 `index` 行的时刻（逐小时）
    pub fn time_at(&self, index: usize) -> NaiveDateTime {
        self.start + Duration::hours(index as i64)
    }

    /// 按行遍历
    pub fn rows(&self) -> impl Iterator<Item = HydrographRow> + '_ {
        (0..self.len()).map(move |i| HydrographRow {
            time: self.time_at(i),
            predicted: self.predicted[i],
            observed: self.observed[i],
            rainfall: self.rainfall[i],
        })
    }

    /// 预测洪峰（时刻, 流量），忽略非有限值
    pub fn peak(&self) -> Option<(NaiveDateTime, f64)> {
        self.predicted
            .iter()
            .enumerate()
            .filter(|(_, q)| q.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, &q)| match best {
                Some((_, b)) if b >= q => best,
                _ => Some((i, q)),
            })
            .map(|(i, q)| (self.time_at(i), q))
    }

    /// 导出为 CSV 文本
    pub fn to_csv_string(&self) -> String {
        let mut out = String::from("time,predicted,observed,rainfall\n");
        for row in self.rows() {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                row.time.format("%Y-%m-%d %H:%M"),
                row.predicted,
                row.observed,
                row.rainfall
            );
        }
        out
    }

    /// 写出 CSV 文件
    pub fn write_csv(&self, path: &Path) -> FgResult<()> {
        std::fs::write(path, self.to_csv_string())
            .map_err(|e| FgError::resource_unavailable(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series() {
        let values = parse_series("1.5\n 2 \n\n3e1\n", Path::new("Q.txt")).unwrap();
        assert_eq!(values, vec![1.5, 2.0, 30.0]);

        let err = parse_series("1\nabc\n", Path::new("Q.txt")).unwrap_err();
        assert!(matches!(err, FgError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let start = HydrographTable::default_start();
        assert!(matches!(
            HydrographTable::new(start, vec![1.0, 2.0], vec![1.0], vec![0.0, 0.0]),
            Err(FgError::FormatError { .. })
        ));
    }

    #[test]
    fn test_hourly_axis_and_peak() {
        let table = HydrographTable::new(
            HydrographTable::default_start(),
            vec![10.0, 35.5, 20.0],
            vec![9.0, 30.0, 22.0],
            vec![0.0, 1.5, 0.0],
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.time_at(0).to_string(), "2012-01-01 00:00:00");
        assert_eq!(table.time_at(25).to_string(), "2012-01-02 01:00:00");

        let (time, q) = table.peak().unwrap();
        assert_eq!(q, 35.5);
        assert_eq!(time, table.time_at(1));
    }

    #[test]
    fn test_csv_output() {
        let table = HydrographTable::new(
            HydrographTable::default_start(),
            vec![1.0, 2.5],
            vec![1.5, 2.0],
            vec![0.0, 3.25],
        )
        .unwrap();
        assert_eq!(
            table.to_csv_string(),
            "time,predicted,observed,rainfall\n\
             2012-01-01 00:00,1,1.5,0\n\
             2012-01-01 01:00,2.5,2,3.25\n"
        );
    }

    #[test]
    fn test_empty_table_has_no_peak() {
        let table =
            HydrographTable::new(HydrographTable::default_start(), vec![], vec![], vec![]).unwrap();
        assert!(table.is_empty());
        assert!(table.peak().is_none());
    }
}
