//! Boxed one-time-passcode input widget for ratatui.
//!
//! Renders N character slots backed by a hidden numeric buffer: digits
//! accumulate up to a configured length, each slot mirrors one buffer
//! position, and a completion callback fires once the buffer fills.
//!
//! The widget follows a reducer/effect split: [`update`] is the single
//! mutation point and returns effects, [`render`] is a pure function of
//! `(state, config)`. Hosts that do not run their own reducer loop can use
//! the [`OtpField`] wrapper, which bundles config, state, key handling, and
//! the completion callback.

pub mod config;
pub mod effects;
pub mod events;
pub mod field;
pub mod render;
pub mod state;
pub mod update;

pub use config::{OtpConfig, OtpLength};
pub use effects::OtpEffect;
pub use events::OtpEvent;
pub use field::OtpField;
pub use render::{Slot, render, slots};
pub use state::OtpState;
pub use update::update;
