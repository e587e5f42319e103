pub mod question_factory;
pub mod state_factory;
pub mod warn_writer;

pub use question_factory::{QuestionObjectFactory, QUESTION_STATE_NAME};
pub use state_factory::{DefaultStateFactory, StateFactory};
pub use warn_writer::WarnWriter;
