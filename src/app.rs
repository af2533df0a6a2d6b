//! 应用编排层
//!
//! 一次性批处理：装载答案库 → 提取网页题目 → 逐题匹配 → 输出报告。
//! 答案库整表装载完才开始处理题目，处理顺序即文档顺序。

use crate::config::Config;
use crate::infrastructure::load_rows;
use crate::models::{AnswerKey, ExtractedQuestion, MatchOutcome};
use crate::services::{KeyLoader, Matcher, QuestionExtractor, Reporter};
use anyhow::{Context, Result};
use scraper::Html;
use std::fs;
use std::io::{self, Write};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 创建应用
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行一次完整的批处理
    pub fn run(&self) -> Result<()> {
        info!("=== 试卷答案提取工具 ===");

        let rows = load_rows(&self.config.key_path)?;
        let key = KeyLoader::new(&self.config).load(&rows);
        if key.is_empty() {
            warn!("⚠️ 答案库为空，所有题目都将无法匹配");
        }

        let html = fs::read_to_string(&self.config.html_path)
            .with_context(|| format!("无法读取试卷文件: {}", self.config.html_path.display()))?;
        let document = Html::parse_document(&html);

        let extractor = QuestionExtractor::new()?;
        let questions = extractor.extract(&document);
        info!("✓ 共提取到 {} 道题目", questions.len());

        let stdout = io::stdout();
        let mut reporter = Reporter::new(stdout.lock());
        let stats = self.process(&questions, &key, &mut reporter)?;

        info!(
            "=== 所有题目处理完成: 精确 {} / 模糊 {} / 未匹配 {} ===",
            stats.exact, stats.fuzzy, stats.unmatched
        );
        Ok(())
    }

    /// 按文档顺序逐题匹配并写报告
    pub fn process<W: Write>(
        &self,
        questions: &[ExtractedQuestion],
        key: &AnswerKey,
        reporter: &mut Reporter<W>,
    ) -> Result<RunStats> {
        let matcher = Matcher::new(key);
        let mut stats = RunStats::default();

        for question in questions {
            let outcome = matcher.resolve(question);
            match &outcome {
                None => stats.unmatched += 1,
                Some(MatchOutcome {
                    fuzzy_note: Some(_),
                    ..
                }) => stats.fuzzy += 1,
                Some(_) => stats.exact += 1,
            }
            reporter.report(question, outcome.as_ref())?;
        }

        Ok(stats)
    }
}

/// 一次运行的匹配统计
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub exact: usize,
    pub fuzzy: usize,
    pub unmatched: usize,
}
