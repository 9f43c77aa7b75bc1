//! Widget event types.

/// Events consumed by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEvent {
    /// The hidden input's full current contents changed. Unbounded in length;
    /// over-length text is truncated on the next [`OtpEvent::Tick`].
    RawInputChanged(String),

    /// Next UI update cycle. Applies any deferred truncation.
    Tick,

    /// The widget was tapped; activates the hidden input. Idempotent.
    Tap,

    /// The host requested the input be dismissed (hide-keyboard affordance).
    Dismiss,
}
