//! Widget reducer (update function).
//!
//! All state mutations happen here. The host calls
//! `update(config, state, event)` and executes the returned effects.

use crate::config::OtpConfig;
use crate::effects::OtpEffect;
use crate::events::OtpEvent;
use crate::state::OtpState;

/// The reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the host to execute.
pub fn update(config: &OtpConfig, state: &mut OtpState, event: OtpEvent) -> Vec<OtpEffect> {
    match event {
        OtpEvent::RawInputChanged(new_text) => raw_input_changed(config, state, new_text),
        OtpEvent::Tick => apply_pending_truncation(config, state),
        OtpEvent::Tap => {
            state.input_active = true;
            vec![]
        }
        OtpEvent::Dismiss => {
            state.input_active = false;
            vec![]
        }
    }
}

/// Replaces the buffer with the hidden input's current contents.
///
/// Over-length text is accepted verbatim and truncated on the next tick;
/// no completion check runs while the buffer is over-length. The reducer
/// does not filter the character set - that is the input adapter's job.
fn raw_input_changed(config: &OtpConfig, state: &mut OtpState, new_text: String) -> Vec<OtpEffect> {
    if new_text == state.buffer {
        return vec![];
    }

    let over_length = new_text.chars().count() > config.length.as_usize();
    state.buffer = new_text;
    state.truncate_pending = over_length;

    if over_length {
        return vec![];
    }
    buffer_changed(config, state)
}

/// Truncates an over-length buffer to the first `config.length` characters.
///
/// The truncation itself counts as a buffer change, so it can complete the
/// code (e.g. a paste that overshoots the length).
fn apply_pending_truncation(config: &OtpConfig, state: &mut OtpState) -> Vec<OtpEffect> {
    if !state.truncate_pending {
        return vec![];
    }
    state.truncate_pending = false;

    if let Some((idx, _)) = state.buffer.char_indices().nth(config.length.as_usize()) {
        state.buffer.truncate(idx);
        return buffer_changed(config, state);
    }
    vec![]
}

/// Runs after every buffer change: deactivates the input and emits
/// [`OtpEffect::Completed`] when the buffer is exactly full.
fn buffer_changed(config: &OtpConfig, state: &mut OtpState) -> Vec<OtpEffect> {
    if state.is_complete(config) {
        state.input_active = false;
        return vec![OtpEffect::Completed(state.buffer.clone())];
    }
    vec![]
}
