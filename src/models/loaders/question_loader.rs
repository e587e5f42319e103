use crate::error::{AppError, AppResult, FileError};
use crate::models::interaction_spec::InteractionSpecs;
use crate::models::misconception::MisconceptionsBySkill;
use crate::models::question::QuestionBackendDict;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 支持的题目文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// 按扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(FileFormat::Json),
            Some("toml") => Some(FileFormat::Toml),
            _ => None,
        }
    }
}

/// 按格式解析文本
pub fn parse_as<T: DeserializeOwned>(content: &str, format: FileFormat) -> AppResult<T> {
    match format {
        FileFormat::Json => Ok(serde_json::from_str(content)?),
        FileFormat::Toml => Ok(toml::from_str(content)?),
    }
}

async fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path).ok_or_else(|| {
        AppError::File(FileError::UnsupportedFormat {
            path: path.display().to_string(),
        })
    })?;

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取文件: {}", path.display()))?;

    let value = parse_as(&content, format)
        .with_context(|| format!("无法解析文件: {}", path.display()))?;

    Ok(value)
}

/// 加载单个题目文件（JSON 或 TOML）
pub async fn load_question_file(path: &Path) -> Result<QuestionBackendDict> {
    load_file(path).await
}

/// 加载文件夹中所有题目文件，按文件名排序
///
/// 解析失败的文件记录警告后跳过。
pub async fn load_all_question_files(
    folder_path: &str,
) -> Result<Vec<(PathBuf, QuestionBackendDict)>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if FileFormat::from_path(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut questions = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_question_file(&path).await {
            Ok(dict) => questions.push((path, dict)),
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(questions)
}

/// 加载按技能分组的误解表
pub async fn load_misconceptions(path: &Path) -> Result<MisconceptionsBySkill> {
    let map: MisconceptionsBySkill = load_file(path).await?;
    tracing::info!("成功加载 {} 个技能的误解", map.len());
    Ok(map)
}

/// 加载交互规格 JSON
pub async fn load_interaction_specs(path: &Path) -> Result<InteractionSpecs> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let specs = InteractionSpecs::from_json_str(&content)
        .map_err(AppError::from)
        .with_context(|| format!("无法解析交互规格文件: {}", path.display()))?;

    Ok(specs)
}
