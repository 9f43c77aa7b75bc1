//! Widget effect types.
//!
//! Effects are returned by the reducer for the host to execute. The reducer
//! itself never invokes callbacks or performs I/O.

/// Effects returned by [`crate::update::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEffect {
    /// The buffer reached the configured length. Carries the full code.
    /// Emitted exactly once per transition into a full buffer.
    Completed(String),
}
