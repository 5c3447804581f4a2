//! Detecting chain errors embedded in other error types.
//!
//! Applications build their own error types by holding a [`ChainError`] in a
//! field and implementing [`Embeds`] for the outer type, usually through
//! [`embed_chain_error!`](crate::embed_chain_error). The stack and cause
//! helpers then reach the embedded value. Types that embed nothing opt in
//! with an empty impl and are passed through untouched.
//!
//! ```rust
//! use errchain::{ChainError, attach_stack, is_composition};
//!
//! #[derive(Debug)]
//! struct ConfigError {
//!     inner: Box<ChainError>,
//! }
//! errchain::embed_chain_error!(ConfigError, inner);
//!
//! let err = attach_stack(ConfigError {
//!     inner: Box::new(ChainError::new("missing key")),
//! });
//! assert!(is_composition(&err));
//! ```

use crate::error::{ChainError, DynError};
use crate::multi::MultiError;

/// Access to a [`ChainError`] that a value is or holds.
pub trait Embeds {
    fn embedded(&self) -> Option<&ChainError> {
        None
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        None
    }
}

impl Embeds for ChainError {
    fn embedded(&self) -> Option<&ChainError> {
        Some(self)
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        Some(self)
    }
}

impl<T: Embeds + ?Sized> Embeds for Box<T> {
    fn embedded(&self) -> Option<&ChainError> {
        (**self).embedded()
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        (**self).embedded_mut()
    }
}

impl<T: Embeds + ?Sized> Embeds for &mut T {
    fn embedded(&self) -> Option<&ChainError> {
        (**self).embedded()
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        (**self).embedded_mut()
    }
}

impl Embeds for DynError {
    fn embedded(&self) -> Option<&ChainError> {
        self.downcast_ref()
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        self.downcast_mut()
    }
}

impl Embeds for dyn std::error::Error + 'static {
    fn embedded(&self) -> Option<&ChainError> {
        self.downcast_ref()
    }

    fn embedded_mut(&mut self) -> Option<&mut ChainError> {
        self.downcast_mut()
    }
}

impl Embeds for MultiError {}
impl Embeds for std::io::Error {}
impl Embeds for std::fmt::Error {}

/// Whether `err` is a [`ChainError`] or holds one.
pub fn is_composition<E: Embeds + ?Sized>(err: &E) -> bool {
    err.embedded().is_some()
}

/// Implement [`Embeds`] for a type holding a [`ChainError`] in a field,
/// either by value or behind a `Box`.
#[macro_export]
macro_rules! embed_chain_error {
    ($ty:ty, $field:ident) => {
        impl $crate::Embeds for $ty {
            fn embedded(&self) -> Option<&$crate::ChainError> {
                Some(::core::borrow::Borrow::borrow(&self.$field))
            }

            fn embedded_mut(&mut self) -> Option<&mut $crate::ChainError> {
                Some(::core::borrow::BorrowMut::borrow_mut(&mut self.$field))
            }
        }
    };
}
