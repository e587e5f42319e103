use crate::models::interaction_spec::InteractionSpecs;
use crate::models::state::{State, StateBackendDict};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 题目的传输字典
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBackendDict {
    pub id: Option<String>,
    pub question_state_data: StateBackendDict,
    pub language_code: String,
    pub version: u32,
    #[serde(default)]
    pub linked_skill_ids: Vec<String>,
    #[serde(default)]
    pub inapplicable_misconception_ids: Vec<String>,
}

/// 题目校验失败的原因，按检查顺序排列
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    #[error("An interaction must be specified")]
    MissingInteraction,
    #[error("At least 1 hint should be specified")]
    MissingHint,
    #[error("A solution must be specified")]
    MissingSolution,
    #[error("At least one answer should be marked correct")]
    NoCorrectAnswer,
    /// 交互类型不在规格表中
    #[error("Unknown interaction: {0}")]
    UnknownInteraction(String),
}

/// 题目领域对象
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: Option<String>,
    state_data: State,
    language_code: String,
    version: u32,
    linked_skill_ids: Vec<String>,
    inapplicable_misconception_ids: Vec<String>,
}

impl Question {
    pub fn new(
        id: Option<String>,
        state_data: State,
        language_code: impl Into<String>,
        version: u32,
        linked_skill_ids: Vec<String>,
        inapplicable_misconception_ids: Vec<String>,
    ) -> Self {
        Self {
            id,
            state_data,
            language_code: language_code.into(),
            version,
            linked_skill_ids,
            inapplicable_misconception_ids,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state_data(&self) -> &State {
        &self.state_data
    }

    /// 复制一份传入的 State，调用方之后的修改不会影响题目
    pub fn set_state_data(&mut self, new_state_data: &State) {
        self.state_data = new_state_data.clone();
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn set_language_code(&mut self, language_code: impl Into<String>) {
        self.language_code = language_code.into();
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn linked_skill_ids(&self) -> &[String] {
        &self.linked_skill_ids
    }

    pub fn set_linked_skill_ids(&mut self, linked_skill_ids: Vec<String>) {
        self.linked_skill_ids = linked_skill_ids;
    }

    pub fn inapplicable_misconception_ids(&self) -> &[String] {
        &self.inapplicable_misconception_ids
    }

    pub fn set_inapplicable_misconception_ids(&mut self, ids: Vec<String>) {
        self.inapplicable_misconception_ids = ids;
    }

    /// 返回第一条不满足的规则
    ///
    /// 检查顺序：交互类型 → 提示 → 参考答案 → 正确答案组
    pub fn validation_error(&self, specs: &InteractionSpecs) -> Option<QuestionValidationError> {
        let interaction = &self.state_data.interaction;

        let Some(interaction_id) = interaction.id.as_deref() else {
            return Some(QuestionValidationError::MissingInteraction);
        };
        if interaction.hints.is_empty() {
            return Some(QuestionValidationError::MissingHint);
        }
        if interaction.solution.is_none() {
            match specs.can_have_solution(interaction_id) {
                Some(true) => return Some(QuestionValidationError::MissingSolution),
                Some(false) => {}
                None => {
                    return Some(QuestionValidationError::UnknownInteraction(
                        interaction_id.to_string(),
                    ))
                }
            }
        }
        if !interaction.has_correct_answer_group() {
            return Some(QuestionValidationError::NoCorrectAnswer);
        }
        None
    }

    /// 校验失败时的提示文本，合法时返回 None
    pub fn validation_error_message(&self, specs: &InteractionSpecs) -> Option<String> {
        self.validation_error(specs).map(|e| e.to_string())
    }

    /// 找出没有被任何错误答案组覆盖的必选误解
    ///
    /// 结果顺序：技能按传入映射的迭代顺序，误解按列表顺序。
    pub fn unaddressed_misconception_names<'a, I, L>(&self, misconceptions_by_skill: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, L)>,
        L: IntoIterator<Item = &'a crate::models::Misconception>,
    {
        let tagged: HashSet<&str> = self
            .state_data
            .interaction
            .answer_groups
            .iter()
            .filter(|group| !group.outcome.labelled_as_correct)
            .filter_map(|group| group.tagged_skill_misconception_id.as_deref())
            .collect();

        let mut names = Vec::new();
        for (skill_id, misconceptions) in misconceptions_by_skill {
            for misconception in misconceptions {
                if !misconception.is_mandatory() {
                    continue;
                }
                let key = misconception.skill_misconception_id(skill_id);
                if !tagged.contains(key.as_str()) {
                    names.push(misconception.name().to_string());
                }
            }
        }
        names
    }

    /// 转为传输字典；新题目没有 id，版本号固定为 0
    pub fn to_backend_dict(&self, is_new_question: bool) -> QuestionBackendDict {
        let (id, version) = if is_new_question {
            (None, 0)
        } else {
            (self.id.clone(), self.version)
        };

        QuestionBackendDict {
            id,
            question_state_data: self.state_data.to_backend_dict(),
            language_code: self.language_code.clone(),
            version,
            linked_skill_ids: self.linked_skill_ids.clone(),
            inapplicable_misconception_ids: self.inapplicable_misconception_ids.clone(),
        }
    }
}
