//! Usage conditions reported by errchain itself.

use strum_macros::{Display, EnumString, IntoStaticStr};

/// The kind of misuse the library detected.
///
/// Chain errors built by callers carry no kind; this only tags the errors
/// errchain returns when one of its own operations is called incorrectly.
/// The kind travels in the error's data under the `"kind"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumString)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument had the wrong runtime type or shape
    InvalidArgument,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidArgument.to_string(), "InvalidArgument");
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "InvalidArgument");
        assert_eq!("InvalidArgument".parse(), Ok(ErrorKind::InvalidArgument));
        assert!("Timeout".parse::<ErrorKind>().is_err());
    }
}
