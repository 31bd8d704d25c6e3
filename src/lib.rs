//! scorecard
//!
//! Scoring and gap-analysis engine for weighted compliance
//! self-assessments. Pure computation — no I/O: the caller supplies a
//! questionnaire definition and an answers map, and gets back a
//! [`ScoreResult`] with a traffic-light classification plus a gap register
//! of unsatisfied requirements.
//!
//! Two scoring modes share the same weighted-average mathematics:
//! - typed questions ([`score::score`]): yes/no, single-choice,
//!   multi-choice, linear scale, number, free text;
//! - the fixed `{Yes, Partial, No, N.A.}` vocabulary
//!   ([`fixed::score_fixed_vocabulary`]).
//!
//! Every entry point is a total function: malformed or missing inputs
//! resolve to neutral/zero values rather than raising. Questionnaire
//! ingestion, persistence and report templating live outside this crate.

pub mod classify;
pub mod error;
pub mod fixed;
pub mod gaps;
pub mod report;
pub mod score;
pub mod types;

pub use crate::classify::{classify, Thresholds};
pub use crate::error::{Result, ScorecardError};
pub use crate::fixed::{score_fixed_vocabulary, FixedAnswer, FixedRow, FixedScores};
pub use crate::gaps::{build_gap_register, fixed_gap_register};
pub use crate::score::{score, QuestionScore};
pub use crate::types::answer::{AnswerMap, AnswerValue};
pub use crate::types::question::{
    parse_options_spec, sections_from_questions, validate_sections, ChoiceOption, Question,
    QuestionType, Section,
};
pub use crate::types::result::{GapEntry, Score, ScoreColor, ScoreResult, SectionScores};
