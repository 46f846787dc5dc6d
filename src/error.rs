//! Errors raised by list operations.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LazyListError {
    /// The operation named here needs at least one element.
    #[error("{0}: empty list")]
    EmptyList(&'static str),
    #[error("at: negative index {0}")]
    NegativeIndex(i64),
    #[error("at: index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}

impl LazyListError {
    pub(crate) fn empty_list(op: &'static str) -> Self {
        tracing::debug!(op, "empty list");
        LazyListError::EmptyList(op)
    }
    pub(crate) fn negative_index(index: i64) -> Self {
        tracing::debug!(index, "negative index");
        LazyListError::NegativeIndex(index)
    }
    pub(crate) fn out_of_range(index: i64, len: usize) -> Self {
        tracing::debug!(index, len, "index out of range");
        LazyListError::IndexOutOfRange { index, len }
    }
}
