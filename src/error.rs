//! Error types.
//!
//! Formatting itself is infallible: every accepted input maps to
//! syntactically valid output, so there is no error taxonomy for the
//! serialization paths. The one recoverable failure in the whole surface is
//! reusing a consumed [`FieldSlot`](crate::FieldSlot).

use thiserror::Error;

/// Errors reported by the builder surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A single-use field slot was asked to assign a second time.
    #[error("field slot for key `{key}` has already been assigned")]
    SlotConsumed { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
