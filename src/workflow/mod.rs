pub mod debounce;
pub mod search_ctx;
pub mod search_flow;

pub use debounce::Debouncer;
pub use search_ctx::SearchContext;
pub use search_flow::{perform_search, SearchRequest};
