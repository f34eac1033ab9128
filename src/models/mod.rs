pub mod bank;
pub mod loaders;
pub mod outcome;
pub mod question;

pub use bank::{QuestionBank, TypeFilter};
pub use loaders::{load_question_bank, parse_question_bank};
pub use outcome::{result_label, total_label, SearchOutcome};
pub use question::{Question, QuestionIssue, QuestionType};
