//! 应用程序错误类型
//!
//! 只收录需要结构化区分的失败：配置/列描述错误、选择器构建失败。
//! 行级脏数据不在此列——坏行就地降级为空数据，从不中断整个批次。

use thiserror::Error;

/// 应用程序错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 未指定答案表格路径
    #[error("未指定答案表格路径（--key 或配置文件 key 字段）")]
    MissingKeyPath,
    /// 未指定试卷 HTML 路径
    #[error("未指定试卷 HTML 路径（--html 或配置文件 html 字段）")]
    MissingHtmlPath,
    /// 列描述非法
    #[error("非法列号: \"{spec}\"")]
    InvalidColumn { spec: String },
    /// CSS 选择器构建失败
    #[error("选择器解析失败 ({css}): {detail}")]
    BadSelector { css: String, detail: String },
}
