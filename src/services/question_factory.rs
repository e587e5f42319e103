//! 题目构造服务 - 业务能力层
//!
//! 两条创建路径：新建默认题目、从传输字典还原已有题目。
//! 构造时不做任何校验，校验由 `Question::validation_error` 负责。

use crate::models::question::{Question, QuestionBackendDict};
use crate::services::state_factory::StateFactory;
use tracing::debug;

/// 题目作为 State 使用时的状态名
pub const QUESTION_STATE_NAME: &str = "question";

/// 新题目的初始版本号
const INITIAL_VERSION: u32 = 1;

/// 题目工厂
pub struct QuestionObjectFactory<F: StateFactory> {
    state_factory: F,
    default_language_code: String,
}

impl<F: StateFactory> QuestionObjectFactory<F> {
    pub fn new(state_factory: F, default_language_code: impl Into<String>) -> Self {
        Self {
            state_factory,
            default_language_code: default_language_code.into(),
        }
    }

    pub fn default_language_code(&self) -> &str {
        &self.default_language_code
    }

    /// 创建一道关联到给定技能的空白题目
    pub fn create_default_question(&self, skill_ids: Vec<String>) -> Question {
        debug!("创建默认题目, 关联技能: {:?}", skill_ids);
        Question::new(
            None,
            self.state_factory.create_default_state(None),
            self.default_language_code.clone(),
            INITIAL_VERSION,
            skill_ids,
            Vec::new(),
        )
    }

    /// 从传输字典还原题目，字段原样保留
    pub fn create_from_backend_dict(&self, dict: &QuestionBackendDict) -> Question {
        debug!("还原题目: {:?} (版本 {})", dict.id, dict.version);
        Question::new(
            dict.id.clone(),
            self.state_factory
                .create_from_backend_dict(QUESTION_STATE_NAME, &dict.question_state_data),
            dict.language_code.clone(),
            dict.version,
            dict.linked_skill_ids.clone(),
            dict.inapplicable_misconception_ids.clone(),
        )
    }
}
