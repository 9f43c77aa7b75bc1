//! The `OtpField` wrapper.
//!
//! Bundles config, state, the numeric input adapter, and the completion
//! callback behind the constructor-parameter API. Hosts with their own
//! reducer loop can skip this and drive [`crate::update::update`] directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::config::OtpConfig;
use crate::effects::OtpEffect;
use crate::events::OtpEvent;
use crate::render;
use crate::state::OtpState;
use crate::update::update;

/// Completion callback, invoked with the full code.
type CompletionCallback = Box<dyn FnMut(&str)>;

/// A one-time-passcode input field.
///
/// Owns its state exclusively: the buffer and focus flag are only mutated
/// through the event methods below.
pub struct OtpField {
    config: OtpConfig,
    state: OtpState,
    on_complete: Option<CompletionCallback>,
}

impl Default for OtpField {
    fn default() -> Self {
        Self::new(OtpConfig::default())
    }
}

impl OtpField {
    /// Creates a field with the given configuration.
    pub fn new(config: OtpConfig) -> Self {
        let state = OtpState::new(&config);
        Self {
            config,
            state,
            on_complete: None,
        }
    }

    /// Registers the completion callback. Invoked exactly once per
    /// transition into a full buffer, with the full code.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Feeds a key press to the hidden numeric input.
    ///
    /// This is the numeric-only input method surrogate: while the input is
    /// active, ASCII digits append to the raw text and `Backspace` removes
    /// the last character. Everything else is ignored here so the host can
    /// keep its own bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.kind, KeyEventKind::Release) {
            return;
        }
        if !self.state.input_active {
            return;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut raw = self.state.buffer.clone();
                raw.push(c);
                self.on_raw_input_change(raw);
            }
            KeyCode::Backspace => {
                let mut raw = self.state.buffer.clone();
                raw.pop();
                self.on_raw_input_change(raw);
            }
            _ => {}
        }
    }

    /// Feeds pasted text to the hidden input.
    ///
    /// Non-digits are stripped at this layer (the input method restricts the
    /// character set, not the reducer). The appended raw text may exceed the
    /// configured length; truncation is applied on the next [`Self::tick`].
    pub fn handle_paste(&mut self, text: &str) {
        if !self.state.input_active {
            return;
        }
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return;
        }
        let raw = format!("{}{digits}", self.state.buffer);
        self.on_raw_input_change(raw);
    }

    /// Replaces the hidden input's contents wholesale.
    ///
    /// Direct access for hosts that own their own text primitive. Unfiltered:
    /// the caller is responsible for the character set.
    pub fn on_raw_input_change(&mut self, new_text: String) {
        self.dispatch(OtpEvent::RawInputChanged(new_text));
    }

    /// Advances one UI update cycle, applying any deferred truncation.
    pub fn tick(&mut self) {
        self.dispatch(OtpEvent::Tick);
    }

    /// Activates the hidden input. Idempotent.
    pub fn tap(&mut self) {
        self.dispatch(OtpEvent::Tap);
    }

    /// Deactivates the hidden input without touching the buffer.
    pub fn dismiss(&mut self) {
        self.dispatch(OtpEvent::Dismiss);
    }

    /// The entered characters.
    pub fn value(&self) -> &str {
        &self.state.buffer
    }

    /// Whether the hidden input currently holds focus.
    pub fn is_input_active(&self) -> bool {
        self.state.input_active
    }

    /// Whether the buffer holds a full code.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.config)
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Read access to the raw state, for hosts with custom rendering.
    pub fn state(&self) -> &OtpState {
        &self.state
    }

    /// Renders the slot row into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render::render(&self.config, &self.state, frame, area);
    }

    fn dispatch(&mut self, event: OtpEvent) {
        let effects = update(&self.config, &mut self.state, event);
        for effect in effects {
            match effect {
                OtpEffect::Completed(code) => {
                    if let Some(callback) = self.on_complete.as_mut() {
                        callback(&code);
                    }
                }
            }
        }
    }
}
