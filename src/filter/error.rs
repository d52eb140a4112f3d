use thiserror::Error;

/// Errors raised while compiling query fragments. Both variants are
/// caller-correctable and surface as 400 Bad Request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("No data")]
    EmptyUpdate,

    #[error("The salary cannot be a negative number")]
    NegativeLowerBound,
}
