pub mod bank_loader;

pub use bank_loader::{load_question_bank, parse_question_bank};
