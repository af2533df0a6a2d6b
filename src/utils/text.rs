//! 文本归一化工具
//!
//! 去除所有空白字符、标点符号、括号等，只保留汉字、英文字母和数字，
//! 彻底解决（）和()、全角半角标点带来的匹配失败问题。

use once_cell::sync::Lazy;
use regex::Regex;

/// 匹配所有"非单词字符且非汉字"的字符
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\u{4E00}-\u{9FA5}]").expect("内置正则"));

/// 归一化题干/选项文本
///
/// 转小写后去掉所有不在 {字母, 数字, 下划线, 汉字} 范围内的字符，
/// 再去掉填空题中常见的下划线。空输入返回空串。
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD.replace_all(&lowered, "").replace('_', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_whitespace() {
        assert_eq!(normalize("1+1 等于 几？"), "11等于几");
        assert_eq!(normalize("中国的首都是（ ）。"), "中国的首都是");
    }

    #[test]
    fn test_normalize_fullwidth_equals_halfwidth() {
        assert_eq!(normalize("（A）"), normalize("(A)"));
        assert_eq!(normalize("1+1等于几？"), normalize("1+1等于几?"));
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ABC 123"), "abc123");
    }

    #[test]
    fn test_normalize_removes_underscores() {
        assert_eq!(normalize("北京是中国的____。"), "北京是中国的");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("光合作用需要（阳光）的参与，对吗？");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty_and_pure_punctuation() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("？！。，"), "");
    }
}
