//! Excel 列号工具
//!
//! 把 "A"、"H"、"B-E"、"B,C,D" 这类列描述解析成 0 基列下标。

use crate::error::AppError;

/// 列字母转 0 基下标（A=0, Z=25, AA=26, ...）
///
/// 大小写不敏感，忽略首尾空白；空串或含非字母字符按非法列号处理
pub fn column_letter_to_index(letter: &str) -> Result<usize, AppError> {
    let letter = letter.trim().to_uppercase();
    if letter.is_empty() {
        return Err(AppError::InvalidColumn {
            spec: letter.clone(),
        });
    }
    let mut index: usize = 0;
    for ch in letter.chars() {
        if !ch.is_ascii_uppercase() {
            return Err(AppError::InvalidColumn {
                spec: letter.clone(),
            });
        }
        index = index * 26 + (ch as usize - 'A' as usize + 1);
    }
    Ok(index - 1)
}

/// 解析选项列描述，展开范围并去重，返回升序下标列表
///
/// 倒序范围（如 "E-B"）展开为空，不报错
pub fn parse_column_spec(spec: &str) -> Result<Vec<usize>, AppError> {
    let mut indices = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((start, end)) = part.split_once('-') {
            let start_idx = column_letter_to_index(start)?;
            let end_idx = column_letter_to_index(end)?;
            for i in start_idx..=end_idx {
                indices.push(i);
            }
        } else {
            indices.push(column_letter_to_index(part)?);
        }
    }
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}
