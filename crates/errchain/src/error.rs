//! The chain error type and its constructors.

use crate::compose::Embeds;
use crate::data::Data;
use crate::format::format;
use crate::kind::ErrorKind;
use crate::records::{Record, to_records};
use crate::stack::Stack;
use std::fmt;
use std::sync::Arc;

/// Any error that can sit in a chain.
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// Owned, type-erased error accepted wherever a cause is expected.
pub type BoxError = Box<DynError>;

/// One link of an error chain: a message, optional data, the stack at
/// construction time, and the error it supersedes.
///
/// `Display` renders the message followed by each cause's message, joined
/// with `": "`. The alternate form `{:#}` renders every link with its data
/// and stack, indented per nesting level. `Debug` uses the alternate form.
///
/// Causes are shared behind an `Arc`, so cloning a chain is cheap. Mutating
/// a value through [`attach_stack`] or [`attach_cause`] needs `&mut` access;
/// sharing one value across threads while mutating it is the caller's
/// responsibility.
#[derive(Clone)]
pub struct ChainError {
    message: String,
    data: Option<Data>,
    stack: Stack,
    cause: Option<Arc<DynError>>,
}

impl ChainError {
    fn build(message: String, data: Option<Data>, cause: Option<BoxError>, stack: Stack) -> Self {
        Self {
            message,
            data,
            stack,
            cause: cause.map(Arc::from),
        }
    }

    /// Create a root error with the given message.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::build(message.into(), None, None, Stack::capture())
    }

    /// Create a root error carrying data.
    #[inline(never)]
    pub fn with_data(data: Data, message: impl Into<String>) -> Self {
        Self::build(message.into(), Some(data), None, Stack::capture())
    }

    /// Wrap `cause`, which may be any error, under a new message.
    #[inline(never)]
    pub fn wrap(cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::build(message.into(), None, Some(cause.into()), Stack::capture())
    }

    /// Wrap `cause` under a new message and data.
    #[inline(never)]
    pub fn wrap_with_data(
        cause: impl Into<BoxError>,
        data: Data,
        message: impl Into<String>,
    ) -> Self {
        Self::build(
            message.into(),
            Some(data),
            Some(cause.into()),
            Stack::capture(),
        )
    }

    /// Create a root error from format arguments. See [`err!`](crate::err).
    #[inline(never)]
    pub fn new_fmt(args: fmt::Arguments<'_>) -> Self {
        Self::build(args.to_string(), None, None, Stack::capture())
    }

    /// Create a root error with data from format arguments.
    /// See [`err_data!`](crate::err_data).
    #[inline(never)]
    pub fn with_data_fmt(data: Data, args: fmt::Arguments<'_>) -> Self {
        Self::build(args.to_string(), Some(data), None, Stack::capture())
    }

    /// Wrap `cause` under a formatted message. See [`wrap!`](crate::wrap).
    #[inline(never)]
    pub fn wrap_fmt(cause: impl Into<BoxError>, args: fmt::Arguments<'_>) -> Self {
        Self::build(
            args.to_string(),
            None,
            Some(cause.into()),
            Stack::capture(),
        )
    }

    /// Wrap `cause` under a formatted message and data.
    /// See [`wrap_data!`](crate::wrap_data).
    #[inline(never)]
    pub fn wrap_with_data_fmt(
        cause: impl Into<BoxError>,
        data: Data,
        args: fmt::Arguments<'_>,
    ) -> Self {
        Self::build(
            args.to_string(),
            Some(data),
            Some(cause.into()),
            Stack::capture(),
        )
    }

    /// Create an InvalidArgument usage error.
    #[inline(never)]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        let data = Data::new().with("kind", ErrorKind::InvalidArgument.as_str());
        Self::build(message.into(), Some(data), None, Stack::capture())
    }

    /// This link's own message, without its causes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the data attached to this link, if any.
    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    /// Get the stack captured when this link was created.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Get the wrapped cause, if any.
    pub fn cause(&self) -> Option<&DynError> {
        self.cause.as_deref()
    }

    /// The [`ErrorKind`] of a usage error returned by errchain itself.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self.data.as_ref()?.get("kind")? {
            crate::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Replace the stack snapshot.
    pub fn set_stack(&mut self, stack: Stack) {
        self.stack = stack;
    }

    /// Replace the cause.
    pub fn set_cause(&mut self, cause: impl Into<BoxError>) {
        self.cause = Some(Arc::from(cause.into()));
    }

    /// Flatten this chain into one record per link, outermost first.
    pub fn records(&self) -> Vec<Record> {
        to_records(Some(self as &(dyn std::error::Error + 'static)))
    }
}

/// Replace the stack of `err` with a fresh snapshot if it is, or embeds, a
/// [`ChainError`]. Anything else is returned untouched.
#[inline(never)]
pub fn attach_stack<E: Embeds>(mut err: E) -> E {
    if let Some(inner) = err.embedded_mut() {
        inner.set_stack(Stack::capture());
    }
    err
}

/// Set the cause of `err` if it is, or embeds, a [`ChainError`]. Anything
/// else is returned untouched and `cause` is dropped.
pub fn attach_cause<E: Embeds>(mut err: E, cause: impl Into<BoxError>) -> E {
    if let Some(inner) = err.embedded_mut() {
        inner.set_cause(cause);
    }
    err
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{}", format(self, 0));
        }
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Debug for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(self, 0))
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
