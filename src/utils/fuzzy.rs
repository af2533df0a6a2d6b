//! 模糊相似度工具
//!
//! 最长公共块相似度：递归找出两段文本的全部最长公共子串，
//! ratio = 2 * 匹配字符总数 / 两串长度之和。对称，1.0 表示完全一致。

/// 计算两段文本的相似度，范围 [0, 1]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

/// 递归统计最长公共块覆盖的字符总数
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

/// 找出最长公共子串，返回 (a 起点, b 起点, 长度)；并列时取最靠前的
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // j2len[j+1]: 以 a[i]、b[j] 结尾的公共后缀长度
    let mut j2len = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut next = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = j2len[j] + 1;
                next[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        j2len = next;
    }
    best
}
