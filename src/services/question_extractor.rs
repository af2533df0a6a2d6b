//! 网页题目提取服务 - 业务能力层
//!
//! 遍历试卷 HTML 里的题目容器，提取题号、题干、题型标注与选项。
//! 单次遍历、按文档顺序产出，不关心后续怎么匹配。

use crate::error::AppError;
use crate::models::{AnswerType, ExtractedQuestion};
use crate::utils::text::normalize;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 网页题目提取服务
pub struct QuestionExtractor {
    question_sel: Selector,
    title_sel: Selector,
    span_sel: Selector,
    em_sel: Selector,
    li_sel: Selector,
}

impl QuestionExtractor {
    /// 编译提取所需的全部选择器
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            question_sel: parse_selector("div.questions")?,
            title_sel: parse_selector("div.title")?,
            span_sel: parse_selector("span")?,
            em_sel: parse_selector("em")?,
            li_sel: parse_selector("li")?,
        })
    }

    /// 按文档顺序提取全部题目
    pub fn extract(&self, document: &Html) -> Vec<ExtractedQuestion> {
        let mut questions = Vec::new();
        for container in document.select(&self.question_sel) {
            if let Some(question) = self.extract_one(container) {
                questions.push(question);
            }
        }
        questions
    }

    /// 提取单个题目容器
    ///
    /// 标题区不足两个 span 的容器直接跳过——没有题号和题干，无从报告
    fn extract_one(&self, container: ElementRef<'_>) -> Option<ExtractedQuestion> {
        let title = container.select(&self.title_sel).next()?;
        let spans: Vec<ElementRef<'_>> = title.select(&self.span_sel).collect();
        if spans.len() < 2 {
            debug!("题目容器缺少题号或题干 span，跳过");
            return None;
        }

        // 页面标注的题型（单选/多选/判断），没有标注按选择题处理
        let type_label = title
            .select(&self.em_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let expected_type = if type_label.contains("判断") {
            AnswerType::Judge
        } else {
            AnswerType::Choice
        };

        let number = element_text(spans[0]);
        let raw_text = element_text(spans[1]);
        let normalized_text = normalize(&raw_text);

        Some(ExtractedQuestion {
            number,
            raw_text,
            normalized_text,
            expected_type,
            options: self.extract_options(container),
        })
    }

    /// 提取选项行：归一化文本 → 页面字母，只认 A..H
    fn extract_options(&self, container: ElementRef<'_>) -> HashMap<String, char> {
        let mut options = HashMap::new();
        for li in container.select(&self.li_sel) {
            let (Some(em), Some(span)) = (
                li.select(&self.em_sel).next(),
                li.select(&self.span_sel).next(),
            ) else {
                continue;
            };

            let letter_text = element_text(em);
            let mut chars = letter_text.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                continue;
            };
            if !('A'..='H').contains(&letter) {
                continue;
            }

            let option_text = normalize(&element_text(span));
            // 两个选项归一化后撞到同一文本时，后者覆盖前者；
            // 这可能导致字母误报，只能提醒，不能擅自修正
            if let Some(previous) = options.insert(option_text.clone(), letter) {
                if previous != letter {
                    warn!(
                        "⚠️ 选项文本归一化后冲突: \"{}\" 同时对应 {} 和 {}，以 {} 为准",
                        option_text, previous, letter, letter
                    );
                }
            }
        }
        options
    }
}

/// 取元素的全部文本并去掉首尾空白
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::BadSelector {
        css: css.to_string(),
        detail: e.to_string(),
    })
}
