//! # Exam Answer Extract
//!
//! 用表格答案库核对 HTML 试卷、逐题输出正确答案的批处理工具
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 表格读取能力，产出结构化的行
//!
//! ### ② 业务能力层（Services）
//! - `KeyLoader` - 把表格行折叠成答案库
//! - `QuestionExtractor` - 从试卷 HTML 提取题目
//! - `Matcher` - 精确查找 + 题型感知模糊匹配 + 候选消歧
//! - `Reporter` - 逐行报告输出
//!
//! ### ③ 编排层（App）
//! - `app` - 装载 → 提取 → 匹配 → 输出 的一次性批处理

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{App, RunStats};
pub use cli::Cli;
pub use config::Config;
pub use error::AppError;
pub use models::{AnswerKey, AnswerRecord, AnswerType, ExtractedQuestion, JudgeVerdict};
