//! # Question Domain
//!
//! 题目编辑器的题目领域对象，以及一个批量检查题目文件的命令行工具
//!
//! ## 架构设计
//!
//! ### ① 领域层（Models）
//! - `models/` - `Question`、`State`、`Misconception`、交互规格表
//! - `models::loaders` - 从 JSON / TOML 文件读取传输字典
//!
//! ### ② 业务能力层（Services）
//! - `QuestionObjectFactory` - 新建默认题目 / 从传输字典还原题目
//! - `StateFactory` - State 构造能力，题目工厂通过构造函数注入
//! - `WarnWriter` - 写 warn 文件能力
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionReview` - 一道题的检查流程（还原 → 校验 → 误解覆盖 → 序列化）
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 组合根，启动时装配全部服务并批量检查
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    InteractionSpecs, Misconception, MisconceptionsBySkill, Question, QuestionBackendDict,
    QuestionValidationError, State, StateBackendDict,
};
pub use orchestrator::{App, ReviewStats};
pub use services::{DefaultStateFactory, QuestionObjectFactory, StateFactory};
pub use workflow::{QuestionReview, ReviewCtx, ReviewOutcome};
