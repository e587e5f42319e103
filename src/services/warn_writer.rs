//! 警告写入服务 - 业务能力层
//!
//! 只负责"把不合格题目写进 warn 文件"，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 追加一条警告
    ///
    /// # 参数
    /// - `source`: 题目来源（文件名）
    /// - `question_id`: 题目ID，新题目为 None
    /// - `reason`: 不合格原因
    pub fn write(&self, source: &str, question_id: Option<&str>, reason: &str) -> AppResult<()> {
        debug!("写入警告: {} | 题目 {:?} | {}", source, question_id, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        let warn_msg = format!(
            "来源 {} | 题目 {} | 原因: {}\n",
            source,
            question_id.unwrap_or("<new>"),
            reason
        );

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.warn_file_path, e))?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
