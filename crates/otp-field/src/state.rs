//! Widget state.
//!
//! Owned exclusively by the widget instance; mutated only through
//! [`crate::update::update`].

use crate::config::OtpConfig;

/// Mutable widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpState {
    /// Accumulated characters. At most `config.length` chars, except
    /// transiently while an over-length raw input awaits deferred truncation.
    pub buffer: String,

    /// Whether the hidden input currently holds focus.
    pub input_active: bool,

    /// An over-length raw input was accepted verbatim and must be truncated
    /// on the next tick. The host framework forbids mutating bound state
    /// while an update pass is in flight.
    pub(crate) truncate_pending: bool,
}

impl OtpState {
    /// Initial state for a freshly mounted widget.
    pub fn new(config: &OtpConfig) -> Self {
        Self {
            buffer: String::new(),
            input_active: config.activate_on_mount,
            truncate_pending: false,
        }
    }

    /// Number of entered characters.
    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// True when the buffer holds exactly `config.length` characters.
    pub fn is_complete(&self, config: &OtpConfig) -> bool {
        self.char_count() == config.length.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OtpLength;

    #[test]
    fn mount_respects_activate_on_mount() {
        let inactive = OtpState::new(&OtpConfig::default());
        assert!(!inactive.input_active);
        assert!(inactive.buffer.is_empty());

        let active = OtpState::new(&OtpConfig::default().activate_on_mount(true));
        assert!(active.input_active);
    }

    #[test]
    fn completeness_is_char_based() {
        let config = OtpConfig::new(OtpLength::Four);
        let mut state = OtpState::new(&config);
        state.buffer = "1234".to_string();
        assert!(state.is_complete(&config));
        state.buffer = "123".to_string();
        assert!(!state.is_complete(&config));
    }
}
