pub mod answer;
pub mod cell;
pub mod question;

pub use answer::{AnswerKey, AnswerRecord, AnswerType, JudgeVerdict};
pub use cell::CellValue;
pub use question::{ExtractedQuestion, MatchOutcome, OptionPick, ResolvedAnswer};
