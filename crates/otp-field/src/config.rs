//! Widget configuration.
//!
//! Everything here is immutable once the widget is constructed; mutable
//! runtime data lives in [`crate::state::OtpState`].

use ratatui::style::{Color, Style};

/// Allowed passcode lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpLength {
    Four,
    Five,
    #[default]
    Six,
    Seven,
    Eight,
}

impl OtpLength {
    /// Number of slots for this length.
    pub fn as_usize(self) -> usize {
        match self {
            OtpLength::Four => 4,
            OtpLength::Five => 5,
            OtpLength::Six => 6,
            OtpLength::Seven => 7,
            OtpLength::Eight => 8,
        }
    }

    /// Returns the length for `n`, or `None` outside 4..=8.
    pub fn from_usize(n: usize) -> Option<Self> {
        match n {
            4 => Some(OtpLength::Four),
            5 => Some(OtpLength::Five),
            6 => Some(OtpLength::Six),
            7 => Some(OtpLength::Seven),
            8 => Some(OtpLength::Eight),
            _ => None,
        }
    }
}

/// Immutable widget configuration, supplied at construction.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Number of slots and the maximum buffer length.
    pub length: OtpLength,

    /// Character shown in unfilled slots. Whitespace renders as a plain space.
    pub placeholder: char,

    /// Outline style of the slot awaiting input while the input is active.
    pub selected_style: Style,

    /// Outline style of every other slot.
    pub unselected_style: Style,

    /// Whether the hidden input holds focus as soon as the widget mounts.
    pub activate_on_mount: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: OtpLength::default(),
            placeholder: ' ',
            selected_style: Style::default(),
            unselected_style: Style::default().fg(Color::DarkGray),
            activate_on_mount: false,
        }
    }
}

impl OtpConfig {
    /// Default configuration with the given length.
    pub fn new(length: OtpLength) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn length(mut self, length: OtpLength) -> Self {
        self.length = length;
        self
    }

    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    pub fn unselected_style(mut self, style: Style) -> Self {
        self.unselected_style = style;
        self
    }

    pub fn activate_on_mount(mut self, activate: bool) -> Self {
        self.activate_on_mount = activate;
        self
    }

    /// Number of visual slots.
    pub fn slot_count(&self) -> usize {
        self.length.as_usize()
    }
}
