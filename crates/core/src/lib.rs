#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod progress;
pub mod recommend;
pub mod scoring;
pub mod time;

pub use catalog::{Category, FrameworkInfo, Question, QuestionBank};
pub use model::{Action, AssessmentState, FrameworkId, QuestionId, Step, reduce};
pub use time::Clock;
