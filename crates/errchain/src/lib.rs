//! # errchain
//!
//! Error chains that keep their provenance: every link records a message,
//! optional structured data, the call stack at the point it was built, and
//! the error it supersedes.
//!
//! ## Design
//!
//! - **ChainError**: one link. `Display` joins the messages of the whole
//!   chain with `": "`; `{:#}` renders each link with its data and stack.
//! - **Causes**: any `std::error::Error + Send + Sync` can be wrapped, and
//!   `source()` exposes it, so standard chain walks see through every link.
//! - **Records**: serializing a `ChainError` produces a list with one object
//!   per link, outermost first.
//! - **Embeds**: custom error types holding a `ChainError` opt in to stack
//!   and cause replacement.
//!
//! ## Usage
//!
//! ```rust
//! use errchain::{ChainError, data};
//!
//! fn connect() -> errchain::Result<()> {
//!     Err(ChainError::new("context timeout"))
//! }
//!
//! fn start() -> errchain::Result<()> {
//!     connect().map_err(|e| {
//!         ChainError::wrap_with_data(e, data! { "server" => "db-server-01" }, "failed to start")
//!     })
//! }
//!
//! let err = start().unwrap_err();
//! assert_eq!(err.to_string(), "failed to start: context timeout");
//! assert_eq!(err.records().len(), 2);
//! ```

pub mod chain;
mod compose;
mod data;
mod error;
mod format;
mod kind;
mod macros;
mod multi;
mod records;
mod stack;

pub use compose::{Embeds, is_composition};
pub use data::{Data, Value};
pub use error::{BoxError, ChainError, DynError, attach_cause, attach_stack};
pub use format::format;
pub use kind::ErrorKind;
pub use multi::{MultiError, append};
pub use records::{Record, to_records};
pub use stack::{Frame, MAX_STACK_DEPTH, Stack};

/// Result type alias using [`ChainError`]
pub type Result<T> = std::result::Result<T, ChainError>;
