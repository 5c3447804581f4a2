//! Flattening an error chain into records for structured export.

use crate::data::Data;
use crate::error::ChainError;
use crate::stack::Stack;
use serde::{Serialize, Serializer};

/// One link of a flattened chain.
///
/// A [`ChainError`] link carries its own message, its data when it has any,
/// and its stack. Any other error contributes only its `Display` text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
}

/// Walk `err` through every `source()` link, outermost first.
///
/// `None` yields an empty list; an error without a cause yields one record.
pub fn to_records(err: Option<&(dyn std::error::Error + 'static)>) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = err;

    while let Some(link) = current {
        let record = match link.downcast_ref::<ChainError>() {
            Some(e) => Record {
                message: e.message().to_string(),
                data: e.data().cloned(),
                stack: Some(e.stack().clone()),
            },
            None => Record {
                message: link.to_string(),
                data: None,
                stack: None,
            },
        };
        records.push(record);
        current = link.source();
    }

    records
}

/// Serializes as the record list, not as an object.
impl Serialize for ChainError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Wrapper {
        source: ChainError,
    }

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapper: {}", self.source)
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_none_is_empty() {
        assert!(to_records(None).is_empty());
    }

    #[test]
    fn test_single_link() {
        let err = ChainError::new("alone");
        let records = err.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "alone");
        assert_eq!(records[0].data, None);
        assert_eq!(records[0].stack.as_ref(), Some(err.stack()));
    }

    #[test]
    fn test_mixed_chain_walks_foreign_links() {
        let root = ChainError::new("context timeout");
        let middle = Wrapper { source: root };
        let outer = ChainError::wrap_with_data(middle, data! { "port" => 5432 }, "failed");

        let records = outer.records();
        let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["failed", "wrapper: context timeout", "context timeout"]
        );
        assert!(records[0].data.is_some());
        assert!(records[1].stack.is_none());
        assert!(records[2].stack.is_some());
    }

    #[test]
    fn test_foreign_root_record() {
        let err = std::io::Error::other("disk full");
        let records = to_records(Some(&err));
        assert_eq!(
            records,
            vec![Record {
                message: "disk full".to_string(),
                data: None,
                stack: None,
            }]
        );
    }
}
