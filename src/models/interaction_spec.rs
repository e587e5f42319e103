//! 交互类型规格表
//!
//! 内置一份标准交互类型的规格，也可以从 JSON 文件加载覆盖。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个交互类型的规格
///
/// JSON 文件中其余字段（名称、描述、customization_arg_specs 等）会被忽略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSpec {
    pub can_have_solution: bool,
}

impl InteractionSpec {
    const fn new(can_have_solution: bool) -> Self {
        Self { can_have_solution }
    }
}

static BUILTIN_SPECS: phf::Map<&'static str, InteractionSpec> = phf::phf_map! {
    "Continue" => InteractionSpec::new(false),
    "EndExploration" => InteractionSpec::new(false),
    "CodeRepl" => InteractionSpec::new(true),
    "DragAndDropSortInput" => InteractionSpec::new(true),
    "FractionInput" => InteractionSpec::new(true),
    "GraphInput" => InteractionSpec::new(true),
    "ImageClickInput" => InteractionSpec::new(false),
    "InteractiveMap" => InteractionSpec::new(false),
    "ItemSelectionInput" => InteractionSpec::new(true),
    "LogicProof" => InteractionSpec::new(true),
    "MathExpressionInput" => InteractionSpec::new(true),
    "MultipleChoiceInput" => InteractionSpec::new(true),
    "MusicNotesInput" => InteractionSpec::new(true),
    "NumberWithUnits" => InteractionSpec::new(true),
    "NumericInput" => InteractionSpec::new(true),
    "PencilCodeEditor" => InteractionSpec::new(true),
    "SetInput" => InteractionSpec::new(true),
    "TextInput" => InteractionSpec::new(true),
};

/// 交互规格注册表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionSpecs {
    specs: HashMap<String, InteractionSpec>,
}

impl InteractionSpecs {
    /// 内置标准交互类型
    pub fn builtin() -> Self {
        Self {
            specs: BUILTIN_SPECS
                .entries()
                .map(|(id, spec)| (id.to_string(), *spec))
                .collect(),
        }
    }

    /// 从 `interaction_specs.json` 格式的文本解析
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let specs: HashMap<String, InteractionSpec> = serde_json::from_str(content)?;
        Ok(Self { specs })
    }

    /// 用另一张表覆盖同名条目
    pub fn merge(&mut self, other: InteractionSpecs) {
        self.specs.extend(other.specs);
    }

    pub fn get(&self, interaction_id: &str) -> Option<&InteractionSpec> {
        self.specs.get(interaction_id)
    }

    /// 未登记的交互类型返回 None
    pub fn can_have_solution(&self, interaction_id: &str) -> Option<bool> {
        self.get(interaction_id).map(|spec| spec.can_have_solution)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_solution_flags() {
        let specs = InteractionSpecs::builtin();
        assert_eq!(specs.can_have_solution("TextInput"), Some(true));
        assert_eq!(specs.can_have_solution("Continue"), Some(false));
        assert_eq!(specs.can_have_solution("ImageClickInput"), Some(false));
        assert_eq!(specs.can_have_solution("NoSuchInteraction"), None);
        assert_eq!(specs.can_have_solution("EndExploration"), Some(false));
    }

    #[test]
    fn test_from_json_ignores_extra_fields_and_overrides_builtin() {
        let json = r#"{
            "TextInput": {"can_have_solution": false, "name": "Text Input", "display_mode": "inline"},
            "CustomInput": {"can_have_solution": true}
        }"#;
        let mut specs = InteractionSpecs::builtin();
        specs.merge(InteractionSpecs::from_json_str(json).unwrap());

        assert_eq!(specs.can_have_solution("TextInput"), Some(false));
        assert_eq!(specs.can_have_solution("CustomInput"), Some(true));
        assert_eq!(specs.can_have_solution("NumericInput"), Some(true));
    }

    #[test]
    fn test_from_json_allows_missing_extra_fields() {
        let specs = InteractionSpecs::from_json_str(r#"{"Continue": {"can_have_solution": false}}"#).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs.get("Continue"), Some(&InteractionSpec { can_have_solution: false }));
    }
}
