//! 题目检查上下文
//!
//! 封装"我正在检查哪个文件里的第几题"这一信息

use std::fmt::Display;

/// 题目检查上下文
#[derive(Debug, Clone)]
pub struct ReviewCtx {
    /// 来源文件名
    pub source: String,

    /// 题目序号（从1开始，仅用于日志显示）
    pub question_index: usize,
}

impl ReviewCtx {
    /// 创建新的检查上下文
    pub fn new(source: impl Into<String>, question_index: usize) -> Self {
        Self {
            source: source.into(),
            question_index,
        }
    }
}

impl Display for ReviewCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目#{} 来源#{}]", self.question_index, self.source)
    }
}
