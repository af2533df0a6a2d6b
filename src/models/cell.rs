//! 表格单元格值
//!
//! 电子表格里一个格子可能是空、文本、数字或布尔值，
//! 在读取边界统一成带标签的枚举，避免 "0" 与空格子混淆。

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 空格子（或行太短取不到）
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 从原始字符串推断单元格类型
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = raw.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }
        if raw.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }
        CellValue::Text(raw.to_string())
    }

    /// 确定性地转成文本
    ///
    /// 整数值不带小数部分（与电子表格里看到的 "2" 一致），布尔值转大写关键字
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }
}
