//! 题目检查流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整检查流程
//!
//! 流程顺序：
//! 1. 传输字典 → Question
//! 2. 校验（不合格写入 warn 文件）
//! 3. 检查关联技能的必选误解是否都有答案组覆盖
//! 4. 生成待提交的传输字典

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::{
    InteractionSpecs, Misconception, MisconceptionsBySkill, QuestionBackendDict,
    QuestionValidationError,
};
use crate::services::{QuestionObjectFactory, StateFactory, WarnWriter};
use crate::workflow::review_ctx::ReviewCtx;

/// 题目检查结果
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// 校验通过
    Valid {
        backend_dict: QuestionBackendDict,
        /// 未被覆盖的必选误解名称
        unaddressed_misconceptions: Vec<String>,
    },
    /// 校验失败
    Invalid { reason: QuestionValidationError },
}

/// 题目检查流程
///
/// - 不持有任何文件资源
/// - 只依赖 services 与 models
pub struct QuestionReview<F: StateFactory> {
    factory: QuestionObjectFactory<F>,
    specs: InteractionSpecs,
    misconceptions: MisconceptionsBySkill,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl<F: StateFactory> QuestionReview<F> {
    pub fn new(
        factory: QuestionObjectFactory<F>,
        specs: InteractionSpecs,
        misconceptions: MisconceptionsBySkill,
        warn_writer: WarnWriter,
        verbose_logging: bool,
    ) -> Self {
        Self {
            factory,
            specs,
            misconceptions,
            warn_writer,
            verbose_logging,
        }
    }

    /// 检查一道题
    pub fn run(&self, dict: &QuestionBackendDict, ctx: &ReviewCtx) -> AppResult<ReviewOutcome> {
        let question = self.factory.create_from_backend_dict(dict);
        info!(
            "{} 交互类型: {:?}, 提示 {} 个, 答案组 {} 个",
            ctx,
            question.state_data().interaction.id,
            question.state_data().interaction.hints.len(),
            question.state_data().interaction.answer_groups.len()
        );

        if let Some(reason) = question.validation_error(&self.specs) {
            warn!("{} ⚠️ 校验失败: {}", ctx, reason);
            self.warn_writer
                .write(&ctx.source, question.id(), &reason.to_string())?;
            return Ok(ReviewOutcome::Invalid { reason });
        }

        let linked = self.linked_misconceptions(question.linked_skill_ids());
        let unaddressed = question.unaddressed_misconception_names(
            linked.iter().map(|(skill_id, list)| (*skill_id, *list)),
        );
        if unaddressed.is_empty() {
            info!("{} ✓ 校验通过", ctx);
        } else {
            warn!(
                "{} ⚠️ 校验通过，但有 {} 个必选误解未被覆盖: {}",
                ctx,
                unaddressed.len(),
                unaddressed.join(", ")
            );
        }

        let backend_dict = question.to_backend_dict(question.id().is_none());
        if self.verbose_logging {
            debug!("{} 传输字典: {:?}", ctx, backend_dict);
        }

        Ok(ReviewOutcome::Valid {
            backend_dict,
            unaddressed_misconceptions: unaddressed,
        })
    }

    /// 误解表中属于题目关联技能的部分，顺序与误解表一致
    fn linked_misconceptions<'a>(
        &'a self,
        linked_skill_ids: &[String],
    ) -> Vec<(&'a str, &'a [Misconception])> {
        self.misconceptions
            .iter()
            .filter(|(skill_id, _)| linked_skill_ids.iter().any(|id| id == skill_id))
            .collect()
    }
}
