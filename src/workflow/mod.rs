pub mod question_review;
pub mod review_ctx;

pub use question_review::{QuestionReview, ReviewOutcome};
pub use review_ctx::ReviewCtx;
