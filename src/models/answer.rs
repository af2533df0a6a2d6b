//! 答案库数据模型

use std::collections::HashMap;
use std::fmt;

/// 判断题结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeVerdict {
    True,
    False,
}

impl JudgeVerdict {
    /// 报告中使用的符号
    pub fn symbol(self) -> &'static str {
        match self {
            JudgeVerdict::True => "✅",
            JudgeVerdict::False => "❌",
        }
    }
}

impl fmt::Display for JudgeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerType {
    /// 判断题
    Judge,
    /// 选择题（单选或多选）
    Choice,
}

/// 答案库里的一条答案记录
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerRecord {
    /// 判断题：对 / 错
    Judge(JudgeVerdict),
    /// 选择题：正确选项的归一化文本，顺序与答案代号里的字母一致
    Choice(Vec<String>),
}

impl AnswerRecord {
    pub fn answer_type(&self) -> AnswerType {
        match self {
            AnswerRecord::Judge(_) => AnswerType::Judge,
            AnswerRecord::Choice(_) => AnswerType::Choice,
        }
    }
}

/// 答案库：归一化题干 → 一条或多条答案记录
///
/// 同一题干可能在表里出现多次，记录只追加、从不覆盖。
/// 遍历顺序保持首次插入顺序——模糊匹配并列时"先到先得"依赖这一点。
/// 装载完成后只读。
#[derive(Debug, Default)]
pub struct AnswerKey {
    entries: Vec<(String, Vec<AnswerRecord>)>,
    index: HashMap<String, usize>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录
    pub fn push(&mut self, question: String, record: AnswerRecord) {
        match self.index.get(&question) {
            Some(&at) => self.entries[at].1.push(record),
            None => {
                self.index.insert(question.clone(), self.entries.len());
                self.entries.push((question, vec![record]));
            }
        }
    }

    /// 按归一化题干精确查找
    pub fn get(&self, question: &str) -> Option<&[AnswerRecord]> {
        self.index
            .get(question)
            .map(|&at| self.entries[at].1.as_slice())
    }

    /// 按插入顺序遍历全部题干
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AnswerRecord])> {
        self.entries
            .iter()
            .map(|(question, records)| (question.as_str(), records.as_slice()))
    }

    /// 不同题干的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_never_overwrites() {
        let mut key = AnswerKey::new();
        key.push("题干".to_string(), AnswerRecord::Judge(JudgeVerdict::True));
        key.push(
            "题干".to_string(),
            AnswerRecord::Choice(vec!["a".to_string()]),
        );

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("题干").map(<[AnswerRecord]>::len), Some(2));
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut key = AnswerKey::new();
        key.push("乙".to_string(), AnswerRecord::Judge(JudgeVerdict::True));
        key.push("甲".to_string(), AnswerRecord::Judge(JudgeVerdict::False));
        key.push("乙".to_string(), AnswerRecord::Judge(JudgeVerdict::True));

        let order: Vec<&str> = key.iter().map(|(q, _)| q).collect();
        assert_eq!(order, vec!["乙", "甲"]);
    }
}
