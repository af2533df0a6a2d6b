//! 网页题目与匹配结果模型

use crate::models::answer::{AnswerType, JudgeVerdict};
use std::collections::HashMap;

/// 从试卷 HTML 中提取出的一道题
///
/// 按文档顺序逐个产出，匹配完即丢弃，不做保留
#[derive(Debug, Clone)]
pub struct ExtractedQuestion {
    /// 题号（页面原文）
    pub number: String,
    /// 题干原文
    pub raw_text: String,
    /// 归一化后的题干
    pub normalized_text: String,
    /// 页面标注的预期题型
    pub expected_type: AnswerType,
    /// 归一化选项文本 → 页面字母（A..H）
    pub options: HashMap<String, char>,
}

/// 选择题结果里的一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPick {
    /// 页面字母；答案文本在页面选项里找不到时为 '?'
    pub letter: char,
    /// 展示文本：匹配成功为选项文本，否则为未匹配提示
    pub display: String,
}

/// 一道题的最终答案
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAnswer {
    Judge(JudgeVerdict),
    /// 按字母升序排列
    Choice(Vec<OptionPick>),
}

/// 匹配结果及其来源说明
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub answer: ResolvedAnswer,
    /// 走了模糊匹配时，附上被命中题干的预览
    pub fuzzy_note: Option<String>,
}
