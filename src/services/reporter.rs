//! 结果输出服务 - 业务能力层
//!
//! 只负责把匹配结果写成逐行报告，不关心匹配过程。
//! 输出目标抽象成 Write，测试时写入内存缓冲即可。

use crate::models::{ExtractedQuestion, MatchOutcome, ResolvedAnswer};
use anyhow::Result;
use std::io::Write;

/// 报告分隔线宽度
const SEPARATOR_WIDTH: usize = 40;

/// 结果输出服务
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// 创建新的输出服务
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 输出一道题的报告
    pub fn report(
        &mut self,
        question: &ExtractedQuestion,
        outcome: Option<&MatchOutcome>,
    ) -> Result<()> {
        writeln!(self.out, "题号: {} {}", question.number, question.raw_text)?;

        match outcome {
            None => writeln!(self.out, "正确答案: [题库为空或无法匹配]")?,
            Some(outcome) => {
                if let Some(note) = &outcome.fuzzy_note {
                    writeln!(self.out, "  [!] 未找到精确题干，已智能匹配最相似同类型题目：")?;
                    writeln!(self.out, "  -> {}", note)?;
                }
                match &outcome.answer {
                    ResolvedAnswer::Judge(verdict) => {
                        writeln!(self.out, "正确答案: {}", verdict)?;
                    }
                    ResolvedAnswer::Choice(picks) => {
                        let letters: String = picks.iter().map(|pick| pick.letter).collect();
                        let texts: Vec<&str> =
                            picks.iter().map(|pick| pick.display.as_str()).collect();
                        writeln!(self.out, "正确答案: {} ({})", letters, texts.join(", "))?;
                    }
                }
            }
        }

        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }
}
