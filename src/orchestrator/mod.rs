//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理题目目录，组合根)
//!     ↓
//! workflow::QuestionReview (处理单个题目)
//!     ↓
//! services (能力层：题目工厂 / State 工厂 / warn)
//!     ↓
//! models (领域对象与加载器)
//! ```
//!
//! 只有编排层读取配置、决定输出位置；下层不接触全局状态。

pub mod batch_processor;

pub use batch_processor::{App, ReviewStats};
