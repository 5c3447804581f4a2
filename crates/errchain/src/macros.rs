//! Formatting constructors.

/// Create a root [`ChainError`](crate::ChainError) from a format string.
///
/// ```rust
/// let id = 7;
/// let err = errchain::err!("record {id} not found");
/// assert_eq!(err.to_string(), "record 7 not found");
/// ```
#[macro_export]
macro_rules! err {
    ($($arg:tt)+) => {
        $crate::ChainError::new_fmt(::core::format_args!($($arg)+))
    };
}

/// Create a root [`ChainError`](crate::ChainError) with data from a format
/// string: `err_data!(data, "fmt", args..)`.
#[macro_export]
macro_rules! err_data {
    ($data:expr, $($arg:tt)+) => {
        $crate::ChainError::with_data_fmt($data, ::core::format_args!($($arg)+))
    };
}

/// Wrap an error under a formatted message: `wrap!(cause, "fmt", args..)`.
///
/// ```rust
/// let io = std::io::Error::other("connection reset");
/// let err = errchain::wrap!(io, "failed to reach {}", "db-server-01");
/// assert_eq!(err.to_string(), "failed to reach db-server-01: connection reset");
/// ```
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($arg:tt)+) => {
        $crate::ChainError::wrap_fmt($cause, ::core::format_args!($($arg)+))
    };
}

/// Wrap an error under data and a formatted message:
/// `wrap_data!(cause, data, "fmt", args..)`.
#[macro_export]
macro_rules! wrap_data {
    ($cause:expr, $data:expr, $($arg:tt)+) => {
        $crate::ChainError::wrap_with_data_fmt($cause, $data, ::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{ChainError, data};

    #[test]
    fn test_err_captures_inline_args() {
        let bank = "bank_123456";
        let err = crate::err!("failed to complete the transaction on {bank}");
        assert_eq!(err.message(), "failed to complete the transaction on bank_123456");
        assert!(err.data().is_none());
    }

    #[test]
    fn test_err_data() {
        let err = crate::err_data!(data! { "severity" => "high" }, "network {}", "unstable");
        assert_eq!(err.to_string(), "network unstable");
        assert_eq!(err.data().map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_wrap_macros() {
        let root = ChainError::new("timeout");
        let err = crate::wrap!(root, "attempt {}", 3);
        assert_eq!(err.to_string(), "attempt 3: timeout");

        let err = crate::wrap_data!(err, data! { "id" => "tx_1" }, "transaction {} failed", "tx_1");
        assert_eq!(err.to_string(), "transaction tx_1 failed: attempt 3: timeout");
        assert!(err.data().is_some());
    }
}
