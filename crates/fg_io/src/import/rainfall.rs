// crates/fg_io/src/import/rainfall.rs

//! 降雨表汇总
//!
//! 产流模型的降雨输入为空白分隔的文本表，第一行为表头。每个数据行
//! 汇总为一个值，按十进制精确求和，保留该行最大的小数位数：
//!
//! ```
//! use fg_io::import::aggregate_rainfall_str;
//! use std::path::Path;
//!
//! let sums = aggregate_rainfall_str("P1 P2\n0.1 0.2\n1.50 2\n\n", Path::new("P.txt")).unwrap();
//! let text: Vec<String> = sums.iter().map(|s| s.to_string()).collect();
//! assert_eq!(text, ["0.3", "3.50", "0"]);
//! ```

use fg_foundation::error::{FgError, FgResult};
use std::fmt;
use std::path::Path;

/// 十进制定点数：`units / 10^scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RainfallSum {
    units: i128,
    scale: u32,
}

impl RainfallSum {
    /// 零
    pub fn zero() -> Self {
        Self::default()
    }

    /// 解析十进制数，如 `12`、`-0.25`、`+3.`、`1.5E-3`
    ///
    /// 指数并入小数位数：负指数增加小数位，正指数先抵消小数位，余下的放大整数。
    pub fn parse(token: &str) -> Option<Self> {
        let (negative, body) = match token.as_bytes().first()? {
            b'-' => (true, &token[1..]),
            b'+' => (false, &token[1..]),
            _ => (false, token),
        };

        let (mantissa, exponent) = match body.split_once(['e', 'E']) {
            Some((m, e)) => (m, e.parse::<i32>().ok()?),
            None => (body, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut units: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            units = units.checked_mul(10)?.checked_add(i128::from(b - b'0'))?;
        }
        let scale = i64::try_from(frac_part.len()).ok()? - i64::from(exponent);
        let scale = if scale < 0 {
            let shift = u32::try_from(-scale).ok()?;
            units = units.checked_mul(10i128.checked_pow(shift)?)?;
            0
        } else {
            u32::try_from(scale).ok()?
        };

        Some(Self {
            units: if negative { -units } else { units },
            scale,
        })
    }

    /// 小数位数
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// 精确相加，结果取两者较大的小数位数
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let scale = self.scale.max(other.scale);
        let a = self.units.checked_mul(10i128.checked_pow(scale - self.scale)?)?;
        let b = other.units.checked_mul(10i128.checked_pow(scale - other.scale)?)?;
        Some(Self {
            units: a.checked_add(b)?,
            scale,
        })
    }

    /// 转为浮点数
    pub fn to_f64(&self) -> f64 {
        self.units as f64 / 10f64.powi(self.scale as i32)
    }
}

impl fmt::Display for RainfallSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.units.unsigned_abs().to_string();
        let sign = if self.units < 0 { "-" } else { "" };
        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let scale = self.scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

/// 汇总降雨表文本，跳过第一行表头
pub fn aggregate_rainfall_str(content: &str, source: &Path) -> FgResult<Vec<RainfallSum>> {
    let mut sums = Vec::new();

    for (line_num, line) in content.lines().enumerate().skip(1) {
        let mut sum = RainfallSum::zero();
        for token in line.split_whitespace() {
            let value = RainfallSum::parse(token).ok_or_else(|| {
                FgError::parse(source, line_num + 1, format!("无效数值 '{token}'"))
            })?;
            sum = sum
                .checked_add(value)
                .ok_or_else(|| FgError::parse(source, line_num + 1, "数值溢出"))?;
        }
        sums.push(sum);
    }

    Ok(sums)
}

/// 读取并汇总降雨表文件
pub fn aggregate_rainfall(path: &Path) -> FgResult<Vec<RainfallSum>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FgError::resource_unavailable(path, e))?;
    let sums = aggregate_rainfall_str(&content, path)?;
    log::info!("降雨表 {}: {} 行", path.display(), sums.len());
    Ok(sums)
}

/// 写出汇总结果，每行一个值
pub fn write_rainfall(path: &Path, sums: &[RainfallSum]) -> FgResult<()> {
    let text = sums
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, text).map_err(|e| FgError::resource_unavailable(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_line(line: &str) -> String {
        let content = format!("header\n{line}");
        aggregate_rainfall_str(&content, Path::new("P.txt")).unwrap()[0].to_string()
    }

    #[test]
    fn test_scale_is_preserved() {
        assert_eq!(sum_line("0.1 0.2"), "0.3");
        assert_eq!(sum_line("1.50 2"), "3.50");
        assert_eq!(sum_line("0 0 0"), "0");
        assert_eq!(sum_line("0.25 0.75"), "1.00");
        assert_eq!(sum_line(""), "0");
    }

    #[test]
    fn test_negative_and_small() {
        assert_eq!(sum_line("-0.5 0.2"), "-0.3");
        assert_eq!(sum_line("0.001"), "0.001");
        assert_eq!(sum_line("-0.0"), "0.0");
    }

    #[test]
    fn test_header_only() {
        assert!(aggregate_rainfall_str("P1 P2", Path::new("P.txt")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = aggregate_rainfall_str("h\n1 2\n3 x\n", Path::new("P.txt")).unwrap_err();
        match err {
            FgError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains('x'));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for token in ["", "-", ".", "1.2.3", "abc", "1e", "e3", "1e+", "1e3.5", "1e99"] {
            assert!(RainfallSum::parse(token).is_none(), "{token}");
        }
        assert_eq!(RainfallSum::parse("3.").unwrap().to_string(), "3");
        assert!((RainfallSum::parse("2.5").unwrap().to_f64() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(RainfallSum::parse("1e3").unwrap().to_string(), "1000");
        assert_eq!(RainfallSum::parse("1E-05").unwrap().to_string(), "0.00001");
        assert_eq!(RainfallSum::parse("-1.5e-2").unwrap().to_string(), "-0.015");
        assert_eq!(RainfallSum::parse("1.25E+1").unwrap().to_string(), "12.5");
        assert_eq!(RainfallSum::parse("2.5e2").unwrap().to_string(), "250");
        assert_eq!(sum_line("1e-2 0.5 1E1"), "10.51");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("P.txt");
        let output = dir.path().join("P1.txt");
        std::fs::write(&input, "A B\n1.5 1.5\n2 0.25\n").unwrap();

        let sums = aggregate_rainfall(&input).unwrap();
        write_rainfall(&output, &sums).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "3.0\n2.25");
    }
}
