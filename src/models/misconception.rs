use serde::{Deserialize, Serialize};
use std::fmt;

/// 技能下的误解（misconception）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misconception {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default = "default_must_be_addressed")]
    pub must_be_addressed: bool,
}

fn default_must_be_addressed() -> bool {
    true
}

impl Misconception {
    pub fn new(id: i64, name: impl Into<String>, must_be_addressed: bool) -> Self {
        Self {
            id,
            name: name.into(),
            notes: String::new(),
            feedback: String::new(),
            must_be_addressed,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 是否必须被某个答案组覆盖
    pub fn is_mandatory(&self) -> bool {
        self.must_be_addressed
    }

    /// 答案组打标签时使用的组合键
    pub fn skill_misconception_id(&self, skill_id: &str) -> String {
        format!("{}-{}", skill_id, self.id)
    }
}

/// 按技能分组的误解列表，保持插入（文档）顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MisconceptionsBySkill {
    entries: Vec<(String, Vec<Misconception>)>,
}

impl MisconceptionsBySkill {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个技能；技能已存在时替换其误解列表，位置不变
    pub fn insert(&mut self, skill_id: impl Into<String>, misconceptions: Vec<Misconception>) {
        let skill_id = skill_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == skill_id) {
            Some((_, existing)) => *existing = misconceptions,
            None => self.entries.push((skill_id, misconceptions)),
        }
    }

    pub fn get(&self, skill_id: &str) -> Option<&[Misconception]> {
        self.entries
            .iter()
            .find(|(id, _)| id == skill_id)
            .map(|(_, list)| list.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Misconception])> {
        self.entries
            .iter()
            .map(|(id, list)| (id.as_str(), list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<Misconception>)> for MisconceptionsBySkill {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Misconception>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (skill_id, list) in iter {
            map.insert(skill_id, list);
        }
        map
    }
}

impl Serialize for MisconceptionsBySkill {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (skill_id, list) in &self.entries {
            map.serialize_entry(skill_id, list)?;
        }
        map.end()
    }
}

// 逐项读取 map，serde_json 默认的 Map 会按 key 排序，丢失文档顺序
impl<'de> Deserialize<'de> for MisconceptionsBySkill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct BySkillVisitor;

        impl<'de> Visitor<'de> for BySkillVisitor {
            type Value = MisconceptionsBySkill;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from skill id to a list of misconceptions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = MisconceptionsBySkill::new();
                while let Some((skill_id, list)) =
                    access.next_entry::<String, Vec<Misconception>>()?
                {
                    map.insert(skill_id, list);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(BySkillVisitor)
    }
}
