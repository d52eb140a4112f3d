pub mod types;
pub mod filter;
pub mod filter_where;
pub mod filter_order;
pub mod filter_update;
pub mod filter_keys;
pub mod error;

pub use types::*;
pub use filter::Filter;
pub use error::FilterError;
pub use filter_keys::{validate_filter_keys, ALLOWED_FILTER_KEYS};
pub use filter_update::compile_partial_update;
pub use filter_where::build_filter_query;
