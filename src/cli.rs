//! 命令行参数
//!
//! 不做任何交互式选择，路径和列号全部由参数或配置文件给出

use clap::Parser;
use std::path::PathBuf;

/// 试卷答案提取工具：用表格答案库核对 HTML 试卷，逐题输出正确答案
#[derive(Debug, Parser)]
#[command(name = "exam_answer_extract", version)]
pub struct Cli {
    /// 答案表格文件路径（CSV）
    #[arg(long)]
    pub key: Option<PathBuf>,

    /// 试卷 HTML 文件路径
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// 题干所在列（例如 A）
    #[arg(long)]
    pub question_col: Option<String>,

    /// 答案代号所在列（例如 H）
    #[arg(long)]
    pub answer_col: Option<String>,

    /// 选项所在列（支持 B-E 或 B,C,D）
    #[arg(long)]
    pub option_cols: Option<String>,

    /// TOML 配置文件；命令行参数优先于配置文件
    #[arg(long)]
    pub config: Option<PathBuf>,
}
