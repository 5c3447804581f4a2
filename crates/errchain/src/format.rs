//! Detailed, indented rendering of an error chain.

use crate::error::ChainError;

const INDENT: &str = "\t";

/// Render `err` and its causes as an indented multi-line block.
///
/// Only [`ChainError`] links get the full layout:
///
/// ```text
/// message:
///     "failed to start the server"
/// data:
///     server: db-server-01
/// stack:
///     app::start @ src/app.rs:12
/// cause:
///     message:
///         "context timeout"
///     stack:
///         ...
/// ```
///
/// Any other error is rendered as a single tab-indented line holding its
/// `Display` text, and its own `source()` chain is not followed: the walk
/// stops at the first foreign link. Each nested cause is indented one level
/// deeper than its parent, and the whole block is indented by `level`.
pub fn format(err: &(dyn std::error::Error + 'static), level: usize) -> String {
    let Some(e) = err.downcast_ref::<ChainError>() else {
        return format!("{INDENT}{err}");
    };

    let mut out = format!("message:\n{INDENT}\"{}\"", e.message());

    if let Some(data) = e.data() {
        out.push_str("\ndata:");
        for (key, value) in data.iter() {
            out.push_str(&format!("\n{INDENT}{key}: {value}"));
        }
    }

    out.push_str("\nstack:");
    if !e.stack().is_empty() {
        out.push('\n');
        out.push_str(&indent(&e.stack().to_string(), 1));
    }

    if let Some(cause) = e.cause() {
        out.push_str("\ncause:\n");
        out.push_str(&format(cause, 1));
    }

    indent(&out, level)
}

/// Prefix every line of `s` with `times` indentation units.
pub(crate) fn indent(s: &str, times: usize) -> String {
    if times == 0 {
        return s.to_string();
    }
    let prefix = INDENT.repeat(times);
    s.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
