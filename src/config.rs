use crate::error::ConfigError;

/// 支持的题目语言
pub static SUPPORTED_LANGUAGE_CODES: phf::Set<&'static str> = phf::phf_set! {
    "en", "ar", "bn", "es", "fr", "hi", "id", "pt", "pt-br", "sw", "zh", "zh-hans",
};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 新建题目使用的默认语言
    pub default_language_code: String,
    /// 待检查题目存放目录
    pub question_folder: String,
    /// 合格题目传输字典的输出目录
    pub output_folder: String,
    /// 按技能分组的误解表（可选）
    pub misconceptions_file: Option<String>,
    /// 交互规格 JSON，覆盖内置表（可选）
    pub interaction_specs_file: Option<String>,
    /// 不合格题目写入的文件
    pub warn_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language_code: "en".to_string(),
            question_folder: "questions".to_string(),
            output_folder: "output_json".to_string(),
            misconceptions_file: None,
            interaction_specs_file: None,
            warn_file: "warn.txt".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取，缺失的值使用默认值，无法解析的值报错
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value,
                expected_type: "bool".to_string(),
            })?,
            None => default.verbose_logging,
        };
        Ok(Self {
            default_language_code: lookup("DEFAULT_LANGUAGE_CODE").unwrap_or(default.default_language_code),
            question_folder: lookup("QUESTION_FOLDER").unwrap_or(default.question_folder),
            output_folder: lookup("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            misconceptions_file: lookup("MISCONCEPTIONS_FILE").or(default.misconceptions_file),
            interaction_specs_file: lookup("INTERACTION_SPECS_FILE").or(default.interaction_specs_file),
            warn_file: lookup("WARN_FILE").unwrap_or(default.warn_file),
            verbose_logging,
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        })
    }

    /// 检查默认语言是否在支持范围内
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_LANGUAGE_CODES.contains(self.default_language_code.as_str()) {
            return Err(ConfigError::UnsupportedLanguageCode {
                code: self.default_language_code.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_overrides_and_defaults() {
        let vars: HashMap<&str, &str> = [
            ("DEFAULT_LANGUAGE_CODE", "fr"),
            ("MISCONCEPTIONS_FILE", "misconceptions.json"),
            ("VERBOSE_LOGGING", "true"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.default_language_code, "fr");
        assert_eq!(config.misconceptions_file.as_deref(), Some("misconceptions.json"));
        assert_eq!(config.interaction_specs_file, None);
        assert_eq!(config.question_folder, "questions");
        assert!(config.verbose_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_rejects_unparsable_bool() {
        let result = Config::from_lookup(|key| {
            (key == "VERBOSE_LOGGING").then(|| "not-a-bool".to_string())
        });

        match result {
            Err(ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            }) => {
                assert_eq!(var_name, "VERBOSE_LOGGING");
                assert_eq!(value, "not-a-bool");
                assert_eq!(expected_type, "bool");
            }
            other => panic!("expected EnvVarParseFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_all_missing_is_default() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(!config.verbose_logging);
        assert_eq!(config.default_language_code, "en");
        assert_eq!(config.output_folder, "output_json");
    }

    #[test]
    fn test_validate_rejects_unknown_language() {
        let config = Config {
            default_language_code: "klingon".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedLanguageCode { .. })
        ));
    }
}
