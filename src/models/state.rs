//! 题目所依附的 State（交互配置）
//!
//! 核心逻辑只关心 interaction 的几个字段，其余字段原样透传，
//! 保证 `from_backend_dict` → `to_backend_dict` 不丢数据。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// 带 content_id 的 HTML 片段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitledHtml {
    pub content_id: String,
    pub html: String,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

impl SubtitledHtml {
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            html: html.into(),
            other_fields: Map::new(),
        }
    }
}

/// 提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub hint_content: SubtitledHtml,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

impl Hint {
    pub fn new(hint_content: SubtitledHtml) -> Self {
        Self {
            hint_content,
            other_fields: Map::new(),
        }
    }
}

/// 参考答案
///
/// `answer_is_exclusive` 等字段不参与校验，留在 `other_fields` 中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub correct_answer: JsonValue,
    pub explanation: SubtitledHtml,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

impl Solution {
    pub fn new(correct_answer: JsonValue, explanation: SubtitledHtml) -> Self {
        Self {
            correct_answer,
            explanation,
            other_fields: Map::new(),
        }
    }
}

/// 答案组的结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    pub labelled_as_correct: bool,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

/// 答案组
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerGroup {
    pub outcome: Outcome,
    /// 形如 `"{skill_id}-{misconception_id}"`
    #[serde(default)]
    pub tagged_skill_misconception_id: Option<String>,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

impl AnswerGroup {
    pub fn new(labelled_as_correct: bool, tagged_skill_misconception_id: Option<String>) -> Self {
        Self {
            outcome: Outcome {
                labelled_as_correct,
                other_fields: Map::new(),
            },
            tagged_skill_misconception_id,
            other_fields: Map::new(),
        }
    }
}

/// 交互配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// 交互类型，未选择时为 None
    pub id: Option<String>,
    #[serde(default)]
    pub hints: Vec<Hint>,
    #[serde(default)]
    pub solution: Option<Solution>,
    #[serde(default)]
    pub answer_groups: Vec<AnswerGroup>,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

impl Interaction {
    /// 是否至少有一个答案组被标记为正确
    pub fn has_correct_answer_group(&self) -> bool {
        self.answer_groups
            .iter()
            .any(|group| group.outcome.labelled_as_correct)
    }
}

/// State 的传输字典
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateBackendDict {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SubtitledHtml>,
    pub interaction: Interaction,
    #[serde(flatten)]
    pub other_fields: Map<String, JsonValue>,
}

/// State 领域对象
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// 状态名，题目场景下固定为 "question"
    pub name: Option<String>,
    pub content: Option<SubtitledHtml>,
    pub interaction: Interaction,
    pub other_fields: Map<String, JsonValue>,
}

impl State {
    pub fn to_backend_dict(&self) -> StateBackendDict {
        StateBackendDict {
            content: self.content.clone(),
            interaction: self.interaction.clone(),
            other_fields: self.other_fields.clone(),
        }
    }
}
