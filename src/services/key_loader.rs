//! 答案库装载服务 - 业务能力层
//!
//! 只负责把表格行折叠成答案库，不做任何 I/O。
//! 坏行最多产生一条空答案，从不中断整表装载。

use crate::config::Config;
use crate::models::{AnswerKey, AnswerRecord, CellValue, JudgeVerdict};
use crate::utils::text::normalize;
use phf::{phf_set, Set};
use tracing::info;

/// 判断题"正确"关键字（与答案单元格 trim + 大写后精确比较）
static TRUE_KEYWORDS: Set<&'static str> = phf_set! { "正确", "对", "√", "TRUE", "TURE" };

/// 判断题"错误"关键字
static FALSE_KEYWORDS: Set<&'static str> = phf_set! { "错误", "错", "×", "FALSE" };

/// 答案库装载服务
pub struct KeyLoader {
    question_col: usize,
    answer_col: usize,
    option_cols: Vec<usize>,
}

impl KeyLoader {
    /// 创建新的装载服务
    pub fn new(config: &Config) -> Self {
        Self {
            question_col: config.question_col,
            answer_col: config.answer_col,
            option_cols: config.option_cols.clone(),
        }
    }

    /// 把表格行折叠成答案库
    ///
    /// 题干归一化后为空的行直接跳过；同一题干的记录只追加不覆盖
    pub fn load(&self, rows: &[Vec<CellValue>]) -> AnswerKey {
        let key = rows.iter().fold(AnswerKey::new(), |mut key, row| {
            let question = normalize(&cell_text(row, self.question_col));
            if question.is_empty() {
                return key;
            }
            key.push(question, self.classify(row));
            key
        });

        info!("✓ 答案库装载完成，共 {} 个不同题干", key.len());
        key
    }

    /// 按答案代号单元格判定记录类型
    fn classify(&self, row: &[CellValue]) -> AnswerRecord {
        let raw_answer = cell_text(row, self.answer_col).trim().to_uppercase();

        if TRUE_KEYWORDS.contains(raw_answer.as_str()) {
            return AnswerRecord::Judge(JudgeVerdict::True);
        }
        if FALSE_KEYWORDS.contains(raw_answer.as_str()) {
            return AnswerRecord::Judge(JudgeVerdict::False);
        }

        // 选择题：答案代号逐字符映射到选项列，越界的字母直接忽略
        let mut correct_texts = Vec::new();
        for letter in raw_answer.chars() {
            if !letter.is_ascii_uppercase() {
                continue;
            }
            let offset = (letter as u8 - b'A') as usize;
            if let Some(&col) = self.option_cols.get(offset) {
                correct_texts.push(normalize(&cell_text(row, col)));
            }
        }
        AnswerRecord::Choice(correct_texts)
    }
}

/// 行内取格子，行太短当空格子
fn cell_text(row: &[CellValue], index: usize) -> String {
    row.get(index).map(CellValue::as_text).unwrap_or_default()
}
