pub mod normalize;

pub use normalize::{format_inline_code, normalize_newlines, process_text, strip_tags};
