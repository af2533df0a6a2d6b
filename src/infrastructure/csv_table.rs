//! 表格读取 - 基础设施层
//!
//! 答案库的行式读取能力：无表头、各行长短不齐也照常读，
//! 产出结构化的单元格供装载服务消费。

use crate::models::CellValue;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// 读取整张表，返回按行排列的单元格
///
/// 文件打不开或行彻底无法解析属于致命错误，向上传播
pub fn load_rows(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("无法读取答案表格: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("表格行解析失败: {}", path.display()))?;
        rows.push(record.iter().map(CellValue::from_raw).collect());
    }

    info!("✓ 读取答案表格完成，共 {} 行", rows.len());
    Ok(rows)
}
