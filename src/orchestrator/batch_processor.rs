//! 批量题目检查 - 编排层
//!
//! ## 职责
//!
//! 应用的组合根：启动时一次性构造配置、交互规格表、误解表、
//! 题目工厂和检查流程，然后逐个检查题目文件。
//!
//! 1. **应用初始化**：校验配置、初始化日志文件、装配各服务
//! 2. **批量加载**：扫描题目目录（JSON / TOML）
//! 3. **逐题检查**：委托 `QuestionReview`
//! 4. **结果输出**：合格题目的传输字典写入输出目录
//! 5. **全局统计**

use crate::config::Config;
use crate::error::AppError;
use crate::models::{self, InteractionSpecs, MisconceptionsBySkill, QuestionBackendDict};
use crate::services::{DefaultStateFactory, QuestionObjectFactory, WarnWriter};
use crate::utils::logging::{
    append_log_line, init_log_file, log_questions_loaded, log_startup, print_final_stats,
};
use crate::workflow::{QuestionReview, ReviewCtx, ReviewOutcome};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    review: QuestionReview<DefaultStateFactory>,
}

/// 检查统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReviewStats {
    pub valid: usize,
    pub invalid: usize,
    /// 合格但有未覆盖误解
    pub unaddressed: usize,
    pub total: usize,
}

impl ReviewStats {
    /// 存在不合格题目时返回错误，供命令行以非零状态退出
    pub fn ensure_all_valid(&self) -> Result<()> {
        if self.invalid > 0 {
            bail!("{} 道题目未通过校验", self.invalid);
        }
        Ok(())
    }
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate().map_err(AppError::from)?;

        init_log_file(&config.output_log_file)?;

        let specs = load_specs(&config).await?;
        log_startup(&config.default_language_code, specs.len());

        let misconceptions = match &config.misconceptions_file {
            Some(path) => models::load_misconceptions(Path::new(path)).await?,
            None => {
                info!("未配置误解表，跳过误解覆盖检查");
                MisconceptionsBySkill::new()
            }
        };

        let factory =
            QuestionObjectFactory::new(DefaultStateFactory::new(), &config.default_language_code);
        let review = QuestionReview::new(
            factory,
            specs,
            misconceptions,
            WarnWriter::with_path(&config.warn_file),
            config.verbose_logging,
        );

        Ok(Self { config, review })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ReviewStats> {
        info!("\n📁 正在扫描待检查的题目...");
        let questions = models::load_all_question_files(&self.config.question_folder).await?;

        if questions.is_empty() {
            warn!("⚠️ 没有找到待检查的题目文件，程序结束");
            return Ok(ReviewStats::default());
        }
        log_questions_loaded(questions.len());

        tokio::fs::create_dir_all(&self.config.output_folder)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.config.output_folder))?;

        let mut stats = ReviewStats {
            total: questions.len(),
            ..Default::default()
        };

        let mut written: HashSet<PathBuf> = HashSet::new();

        for (idx, (path, dict)) in questions.iter().enumerate() {
            let ctx = ReviewCtx::new(file_name(path), idx + 1);

            match self.review.run(dict, &ctx) {
                Ok(ReviewOutcome::Valid {
                    backend_dict,
                    unaddressed_misconceptions,
                }) => {
                    stats.valid += 1;
                    if !unaddressed_misconceptions.is_empty() {
                        stats.unaddressed += 1;
                    }
                    let output_path = self.output_path_for(path, &written)?;
                    self.write_output(&output_path, &backend_dict).await?;
                    written.insert(output_path);
                    append_log_line(&self.config.output_log_file, &format!("{} 合格", ctx))?;
                }
                Ok(ReviewOutcome::Invalid { reason }) => {
                    stats.invalid += 1;
                    append_log_line(
                        &self.config.output_log_file,
                        &format!("{} 不合格: {}", ctx, reason),
                    )?;
                }
                Err(e) => {
                    error!("{} ❌ 检查过程中发生错误: {}", ctx, e);
                    stats.invalid += 1;
                }
            }
        }

        print_final_stats(
            stats.valid,
            stats.invalid,
            stats.unaddressed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 合格题目的输出路径：默认 `<stem>.json`，与本次已写出的文件重名时改用 `<file_name>.json`
    fn output_path_for(&self, source_path: &Path, written: &HashSet<PathBuf>) -> Result<PathBuf> {
        let output_folder = Path::new(&self.config.output_folder);
        let stem = source_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "question".to_string());

        let by_stem = output_folder.join(format!("{}.json", stem));
        if !written.contains(&by_stem) {
            return Ok(by_stem);
        }

        let by_file_name = output_folder.join(format!("{}.json", file_name(source_path)));
        if written.contains(&by_file_name) {
            bail!(
                "输出文件名冲突: {} 与已写出的 {} 重名",
                source_path.display(),
                by_file_name.display()
            );
        }
        warn!(
            "⚠️ {} 已被其他题目占用，{} 改写到 {}",
            by_stem.display(),
            source_path.display(),
            by_file_name.display()
        );
        Ok(by_file_name)
    }

    /// 把合格题目的传输字典写到指定路径
    async fn write_output(&self, output_path: &Path, dict: &QuestionBackendDict) -> Result<()> {
        let content = serde_json::to_string_pretty(dict).map_err(AppError::from)?;
        tokio::fs::write(output_path, content)
            .await
            .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;

        info!("已写入: {}", output_path.display());
        Ok(())
    }
}

/// 内置规格表，配置了文件时用文件覆盖
async fn load_specs(config: &Config) -> Result<InteractionSpecs> {
    let mut specs = InteractionSpecs::builtin();
    if let Some(path) = &config.interaction_specs_file {
        let from_file = models::load_interaction_specs(Path::new(path)).await?;
        info!("从 {} 加载 {} 个交互规格", path, from_file.len());
        specs.merge(from_file);
    }
    Ok(specs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_all_valid() {
        let clean = ReviewStats {
            valid: 3,
            total: 3,
            ..Default::default()
        };
        assert!(clean.ensure_all_valid().is_ok());

        let failed = ReviewStats {
            valid: 1,
            invalid: 2,
            total: 3,
            ..Default::default()
        };
        let err = failed.ensure_all_valid().unwrap_err();
        assert!(err.to_string().contains('2'));
    }
}
