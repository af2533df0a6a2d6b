//! 题目匹配服务 - 业务能力层
//!
//! 对每道网页题先做精确查找，查不到再做题型感知的模糊匹配，
//! 最后在同题干的多条候选里按题型一致性和选项命中数挑最优。

use crate::models::{
    AnswerKey, AnswerRecord, AnswerType, ExtractedQuestion, MatchOutcome, OptionPick,
    ResolvedAnswer,
};
use crate::utils::fuzzy::similarity_ratio;
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 模糊匹配兜底阈值：同题型最佳相似度低于该值时放开题型限制再搜一轮
const FALLBACK_THRESHOLD: f64 = 0.2;

/// 题型一致的候选加的权重，远大于可能的选项命中数，保证题型绝对优先
const TYPE_MATCH_BONUS: i64 = 100;

/// 模糊匹配命中题干在报告里的预览长度
const STEM_PREVIEW_LEN: usize = 25;

/// 题目匹配服务
pub struct Matcher<'a> {
    key: &'a AnswerKey,
}

impl<'a> Matcher<'a> {
    /// 基于只读答案库创建匹配服务
    pub fn new(key: &'a AnswerKey) -> Self {
        Self { key }
    }

    /// 解析一道题的答案
    ///
    /// 答案库为空或完全无法匹配时返回 None，由调用方按"未匹配"报告
    pub fn resolve(&self, question: &ExtractedQuestion) -> Option<MatchOutcome> {
        let (candidates, fuzzy_note) = match self.key.get(&question.normalized_text) {
            Some(candidates) => (candidates, None),
            None => {
                let (matched, ratio) =
                    self.best_fuzzy(&question.normalized_text, question.expected_type);
                let matched = matched?;
                debug!("模糊匹配命中: {} (相似度 {:.2})", matched, ratio);
                let candidates = self.key.get(matched)?;
                (candidates, Some(truncate_text(matched, STEM_PREVIEW_LEN)))
            }
        };

        let best = self.pick_candidate(candidates, question)?;
        Some(MatchOutcome {
            answer: render(best, question),
            fuzzy_note,
        })
    }

    /// 题型感知的模糊搜索
    ///
    /// 先只在含预期题型记录的题干里找相似度最高的；一个候选都没有、
    /// 或最高分低于阈值时，降级到全库再搜一轮，保留两轮中的最高分。
    /// 并列时先插入的题干获胜。
    fn best_fuzzy(&self, query: &str, expected_type: AnswerType) -> (Option<&'a str>, f64) {
        let mut best_match = None;
        let mut highest_ratio = 0.0_f64;

        for (stem, records) in self.key.iter() {
            if !records
                .iter()
                .any(|record| record.answer_type() == expected_type)
            {
                continue;
            }
            let ratio = similarity_ratio(query, stem);
            if ratio > highest_ratio {
                highest_ratio = ratio;
                best_match = Some(stem);
            }
        }

        if best_match.is_none() || highest_ratio < FALLBACK_THRESHOLD {
            for (stem, _) in self.key.iter() {
                let ratio = similarity_ratio(query, stem);
                if ratio > highest_ratio {
                    highest_ratio = ratio;
                    best_match = Some(stem);
                }
            }
        }

        (best_match, highest_ratio)
    }

    /// 在同题干的多条候选里挑最优
    ///
    /// 题型一致绝对优先，其次看正确选项在页面选项里的命中数；
    /// 判断题没有选项，基础分记 0。并列时先出现的候选获胜。
    fn pick_candidate<'k>(
        &self,
        candidates: &'k [AnswerRecord],
        question: &ExtractedQuestion,
    ) -> Option<&'k AnswerRecord> {
        let mut best = None;
        let mut max_score: i64 = -1;

        for candidate in candidates {
            let mut score: i64 = match candidate {
                AnswerRecord::Judge(_) => 0,
                AnswerRecord::Choice(texts) => texts
                    .iter()
                    .filter(|text| question.options.contains_key(text.as_str()))
                    .count() as i64,
            };
            if candidate.answer_type() == question.expected_type {
                score += TYPE_MATCH_BONUS;
            }
            if score > max_score {
                max_score = score;
                best = Some(candidate);
            }
        }

        best
    }
}

/// 把选中的答案记录渲染成面向页面字母的结果
///
/// 页面选项里找不到的答案文本标记为 '?'，按字母升序排列（'?' 排最前）
fn render(record: &AnswerRecord, question: &ExtractedQuestion) -> ResolvedAnswer {
    match record {
        AnswerRecord::Judge(verdict) => ResolvedAnswer::Judge(*verdict),
        AnswerRecord::Choice(texts) => {
            let mut picks: Vec<OptionPick> = texts
                .iter()
                .map(|text| match question.options.get(text.as_str()) {
                    Some(&letter) => OptionPick {
                        letter,
                        display: text.clone(),
                    },
                    None => OptionPick {
                        letter: '?',
                        display: format!("未找到文本匹配: {}", truncate_text(text, 10)),
                    },
                })
                .collect();
            picks.sort_by_key(|pick| pick.letter);
            ResolvedAnswer::Choice(picks)
        }
    }
}
