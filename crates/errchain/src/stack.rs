//! Call-stack snapshots taken when a chain error is built.

use serde::{Serialize, Serializer};
use std::fmt;

/// Maximum number of frames recorded per snapshot.
pub const MAX_STACK_DEPTH: usize = 32;

/// Frames between the capture routine and the caller's call site. The
/// constructor that called [`Stack::capture`] is the only one.
const CALLER_FRAMES: usize = 1;

/// Headroom for the unwinder's own frames, which sit above the capture
/// routine and are discarded.
const WALK_SLACK: usize = 32;

/// One resolved frame of a [`Stack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Resolved {
        function: String,
        file: Option<String>,
        line: Option<u32>,
    },
    /// Symbol resolution failed for this frame.
    Unknown,
}

impl Frame {
    /// Get the function name, or `None` for an unresolved frame.
    pub fn function(&self) -> Option<&str> {
        match self {
            Frame::Resolved { function, .. } => Some(function),
            Frame::Unknown => None,
        }
    }

    /// Resolve a raw frame.
    ///
    /// A frame that had calls inlined into it reports one symbol per inlined
    /// function, innermost first. The last named symbol is kept, so the frame
    /// is labelled with the function that physically owns it.
    fn resolve(frame: &backtrace::Frame) -> Frame {
        let mut resolved = None;
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                resolved = Some(Frame::Resolved {
                    function: name.to_string(),
                    file: symbol.filename().map(|p| p.display().to_string()),
                    line: symbol.lineno(),
                });
            }
        });
        resolved.unwrap_or(Frame::Unknown)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Resolved {
                function,
                file: Some(file),
                line,
            } => write!(f, "{function} @ {file}:{}", line.unwrap_or(0)),
            Frame::Resolved { function, .. } => write!(f, "{function}"),
            Frame::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An ordered, outermost-call-last list of frames.
///
/// An empty stack is valid: it is what platforms without unwinding support
/// produce, and what [`Stack::empty`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stack(Vec<Frame>);

impl Stack {
    /// Get a stack with no frames.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current thread's call stack.
    ///
    /// The snapshot starts at the call site of whoever called the function
    /// that called `capture`: the capture routine and its direct caller are
    /// skipped. At most [`MAX_STACK_DEPTH`] frames are kept. If the capture
    /// routine cannot be located on the stack, the walk is kept unskipped.
    #[inline(never)]
    pub fn capture() -> Stack {
        let marker = Stack::capture as *const () as usize;
        let mut raw = Vec::new();
        let mut start = None;

        backtrace::trace(|frame| {
            if start.is_none() && frame.symbol_address() as usize == marker {
                start = Some(raw.len() + 1 + CALLER_FRAMES);
            }
            raw.push(frame.clone());
            match start {
                Some(start) => raw.len() < start + MAX_STACK_DEPTH,
                None => raw.len() < MAX_STACK_DEPTH + WALK_SLACK,
            }
        });

        let frames: Vec<Frame> = raw
            .iter()
            .skip(start.unwrap_or(0))
            .take(MAX_STACK_DEPTH)
            .map(Frame::resolve)
            .collect();

        let unknown = frames.iter().filter(|f| **f == Frame::Unknown).count();
        tracing::trace!(
            frames = frames.len(),
            unknown,
            located = start.is_some(),
            "captured stack"
        );
        Stack(frames)
    }

    /// Get the frames, innermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    /// Get the number of frames.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no frame was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the frames, innermost first.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.0.iter()
    }
}

impl From<Vec<Frame>> for Stack {
    fn from(frames: Vec<Frame>) -> Self {
        Stack(frames)
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One frame per line, no trailing newline.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}
