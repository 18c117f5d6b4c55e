mod ids;
mod lead;
mod maturity;
mod profile;
mod state;
mod step;

pub use ids::{FrameworkId, ParseIdError, QuestionId};
pub use lead::{Concern, FieldErrors, LeadData, LeadField, LeadForm, LeadPatch, is_valid_email};
pub use maturity::{MaturityError, MaturityLevel};
pub use profile::{Country, Industry, ParseLabelError};
pub use state::{Action, AnswerMap, AssessmentState, ScoreMap, reduce};
pub use step::Step;
