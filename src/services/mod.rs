pub mod highlighter;
pub mod matcher;
pub mod result_writer;

pub use highlighter::highlight;
pub use matcher::{matches_keyword, search};
pub use result_writer::{ResultSink, ResultWriter};
