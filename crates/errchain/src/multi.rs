//! An aggregate of independent errors.

use crate::Result;
use crate::error::{BoxError, ChainError, DynError};
use crate::records::to_records;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// An ordered list of unrelated errors.
///
/// The errors share no causal link, so `source()` is always `None`. The
/// list only grows; `Display` summarizes it by its count and first entry.
#[derive(Debug, Clone, Default)]
pub struct MultiError {
    errors: Vec<Arc<DynError>>,
}

impl MultiError {
    /// Create an aggregate holding `errors` in order.
    pub fn new<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<BoxError>,
    {
        Self {
            errors: errors.into_iter().map(|e| Arc::from(e.into())).collect(),
        }
    }

    /// Append one error at the end.
    pub fn push(&mut self, err: impl Into<BoxError>) {
        self.errors.push(Arc::from(err.into()));
    }

    /// Get the collected errors in insertion order.
    pub fn errors(&self) -> impl Iterator<Item = &DynError> {
        self.errors.iter().map(|e| &**e)
    }

    /// Get the number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check whether no error has been collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Append `err` to `multi`, which must be a [`MultiError`] behind a
/// type-erased reference.
///
/// Anything else is rejected with an
/// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error
/// and nothing is appended.
pub fn append(multi: &mut DynError, err: impl Into<BoxError>) -> Result<()> {
    let Some(m) = multi.downcast_mut::<MultiError>() else {
        tracing::trace!(error = %multi, "append rejected: not a MultiError");
        return Err(ChainError::invalid_argument(
            "the multi parameter is supposed to be given a MultiError value",
        ));
    };
    m.push(err);
    Ok(())
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) => write!(f, "first of {} errors: {}", self.errors.len(), first),
            None => Ok(()),
        }
    }
}

impl std::error::Error for MultiError {}

/// Serializes as a list holding each error's record list.
impl Serialize for MultiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.errors
                .iter()
                .map(|e| to_records(Some(&**e as &(dyn std::error::Error + 'static)))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_new_multi() {
        let multi = MultiError::new([
            ChainError::new("failed 1"),
            ChainError::new("failed 2"),
            ChainError::new("failed 3"),
        ]);
        assert_eq!(multi.to_string(), "first of 3 errors: failed 1");
        assert_eq!(multi.len(), 3);
    }

    #[test]
    fn test_empty_message() {
        let multi = MultiError::default();
        assert!(multi.is_empty());
        assert_eq!(multi.to_string(), "");
    }

    #[test]
    fn test_append_through_erased_reference() {
        let mut boxed: BoxError = Box::new(MultiError::default());
        append(boxed.as_mut(), ChainError::new("failed 1")).unwrap();
        assert_eq!(boxed.to_string(), "first of 1 errors: failed 1");

        append(boxed.as_mut(), "failed 2").unwrap();
        assert_eq!(boxed.to_string(), "first of 2 errors: failed 1");
    }

    #[test]
    fn test_append_rejects_other_errors() {
        let mut other = ChainError::new("not an aggregate");
        let err = append(&mut other, ChainError::new("lost")).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));
        assert_eq!(other.to_string(), "not an aggregate");
        assert!(other.cause().is_none());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut multi = MultiError::default();
        multi.push("b");
        multi.push("a");
        multi.push("b");
        let messages: Vec<String> = multi.errors().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["b", "a", "b"]);
    }
}
