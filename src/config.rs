//! 程序配置
//!
//! 路径与列号在这里一次性解析完毕，核心逻辑不再接触原始列描述。
//! 优先级：命令行参数 > 配置文件 > 内置默认列（A / H / B-E）。

use crate::cli::Cli;
use crate::error::AppError;
use crate::utils::columns::{column_letter_to_index, parse_column_spec};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// TOML 配置文件内容，字段全部可省略
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub key: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub question_col: Option<String>,
    pub answer_col: Option<String>,
    pub option_cols: Option<String>,
}

impl ConfigFile {
    /// 从 TOML 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let file = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;
        Ok(file)
    }
}

/// 解析完成的程序配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 答案表格路径
    pub key_path: PathBuf,
    /// 试卷 HTML 路径
    pub html_path: PathBuf,
    /// 题干列（0 基）
    pub question_col: usize,
    /// 答案代号列（0 基）
    pub answer_col: usize,
    /// 选项列（0 基，升序去重）
    pub option_cols: Vec<usize>,
}

impl Config {
    /// 合并命令行与配置文件，解析列描述
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let key_path = cli.key.or(file.key).ok_or(AppError::MissingKeyPath)?;
        let html_path = cli.html.or(file.html).ok_or(AppError::MissingHtmlPath)?;

        let question_col = cli
            .question_col
            .or(file.question_col)
            .unwrap_or_else(|| "A".to_string());
        let answer_col = cli
            .answer_col
            .or(file.answer_col)
            .unwrap_or_else(|| "H".to_string());
        let option_cols = cli
            .option_cols
            .or(file.option_cols)
            .unwrap_or_else(|| "B-E".to_string());

        Ok(Self {
            key_path,
            html_path,
            question_col: column_letter_to_index(&question_col)?,
            answer_col: column_letter_to_index(&answer_col)?,
            option_cols: parse_column_spec(&option_cols)?,
        })
    }
}
