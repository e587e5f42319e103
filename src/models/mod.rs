pub mod interaction_spec;
pub mod loaders;
pub mod misconception;
pub mod question;
pub mod state;

pub use interaction_spec::{InteractionSpec, InteractionSpecs};
pub use loaders::{
    load_all_question_files, load_interaction_specs, load_misconceptions, load_question_file,
};
pub use misconception::{Misconception, MisconceptionsBySkill};
pub use question::{Question, QuestionBackendDict, QuestionValidationError};
pub use state::{
    AnswerGroup, Hint, Interaction, Outcome, Solution, State, StateBackendDict, SubtitledHtml,
};
