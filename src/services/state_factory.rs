//! State 构造能力
//!
//! 题目工厂只依赖这个 trait，具体如何构造 State 由实现方决定。

use crate::models::state::{Interaction, State, StateBackendDict, SubtitledHtml};
use serde_json::{json, Map, Value as JsonValue};

/// State 工厂
pub trait StateFactory {
    /// 创建空白 State（未选择交互类型）
    fn create_default_state(&self, state_name: Option<&str>) -> State;

    /// 从传输字典还原 State
    fn create_from_backend_dict(&self, state_name: &str, dict: &StateBackendDict) -> State;
}

/// 默认实现
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStateFactory;

impl DefaultStateFactory {
    pub fn new() -> Self {
        Self
    }
}

fn object(value: JsonValue) -> Map<String, JsonValue> {
    match value {
        JsonValue::Object(map) => map,
        _ => Map::new(),
    }
}

impl StateFactory for DefaultStateFactory {
    fn create_default_state(&self, state_name: Option<&str>) -> State {
        let interaction_fields = object(json!({
            "customization_args": {},
            "confirmed_unclassified_answers": [],
            "default_outcome": {
                "dest": state_name,
                "feedback": {"content_id": "default_outcome", "html": ""},
                "labelled_as_correct": false,
                "param_changes": [],
                "refresher_exploration_id": null,
                "missing_prerequisite_skill_id": null
            }
        }));

        let state_fields = object(json!({
            "param_changes": [],
            "recorded_voiceovers": {
                "voiceovers_mapping": {"content": {}, "default_outcome": {}}
            },
            "written_translations": {
                "translations_mapping": {"content": {}, "default_outcome": {}}
            },
            "solicit_answer_details": false,
            "classifier_model_id": null
        }));

        State {
            name: state_name.map(str::to_string),
            content: Some(SubtitledHtml::new("content", "")),
            interaction: Interaction {
                id: None,
                hints: Vec::new(),
                solution: None,
                answer_groups: Vec::new(),
                other_fields: interaction_fields,
            },
            other_fields: state_fields,
        }
    }

    fn create_from_backend_dict(&self, state_name: &str, dict: &StateBackendDict) -> State {
        State {
            name: Some(state_name.to_string()),
            content: dict.content.clone(),
            interaction: dict.interaction.clone(),
            other_fields: dict.other_fields.clone(),
        }
    }
}
