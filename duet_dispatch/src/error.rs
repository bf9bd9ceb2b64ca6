use std::io;

use thiserror::Error;

/// Alias for `Result<T, DispatchError>`.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Everything that can go wrong while assigning to or calling through a [`Handle`].
///
/// [`Handle`]: crate::class::Handle
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A method was called through a handle that holds no object.
    #[error("Operation on None")]
    OperationOnNone {
        /// Name of the empty handle.
        handle: String,
    },

    /// An object was assigned to a handle whose declared class it does not conform to.
    #[error("Cannot assign an object of class `{class}` to `{handle}` declared as `{declared}`")]
    NotConforming {
        handle: String,
        declared: String,
        class: String,
    },

    /// Writing the output of a call failed.
    #[error("Unable to write the output of a call")]
    Io(#[from] io::Error),
}

impl DispatchError {
    /// Process exit status for this error. An operation on `None` exits with `4`, anything
    /// else with `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::OperationOnNone { .. } => 4,
            DispatchError::NotConforming { .. } | DispatchError::Io(_) => 1,
        }
    }
}
