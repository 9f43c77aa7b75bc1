//! Slot row rendering.
//!
//! Pure view functions: [`slots`] derives per-slot content from
//! `(buffer, input_active, config)`, [`render`] draws it. Identical inputs
//! produce identical output.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::config::OtpConfig;
use crate::state::OtpState;

/// Height of the slot row in terminal rows (one character plus borders).
pub const SLOT_HEIGHT: u16 = 3;

/// One visual slot derived from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Character to display: the entered digit, or the placeholder.
    pub ch: char,
    /// Whether this slot shows an entered character.
    pub filled: bool,
    /// Whether this is the slot awaiting input while the input is active.
    pub selected: bool,
}

/// Derives the slot row from the current state.
///
/// Slot `i` shows character `i` of the buffer when entered, otherwise the
/// placeholder (whitespace placeholders render as a plain space). A slot is
/// selected iff the input is active and the slot is the next to be filled.
pub fn slots(config: &OtpConfig, state: &OtpState) -> Vec<Slot> {
    let count = config.slot_count();
    let entered: Vec<char> = state.buffer.chars().take(count).collect();
    let placeholder = if config.placeholder.is_whitespace() {
        ' '
    } else {
        config.placeholder
    };

    (0..count)
        .map(|i| Slot {
            ch: entered.get(i).copied().unwrap_or(placeholder),
            filled: i < entered.len(),
            selected: state.input_active && state.char_count() == i,
        })
        .collect()
}

/// Minimum comfortable width for the slot row: each slot shows one character
/// plus its borders and one column of padding per side.
pub fn desired_width(config: &OtpConfig) -> u16 {
    let ch_width = UnicodeWidthChar::width(config.placeholder).unwrap_or(1).max(1) as u16;
    (ch_width + 4) * config.slot_count() as u16
}

/// Renders the slot row into `area`.
pub fn render(config: &OtpConfig, state: &OtpState, frame: &mut Frame, area: Rect) {
    let derived = slots(config, state);
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, derived.len() as u32); derived.len()])
            .split(area);

    for (slot, cell) in derived.iter().zip(columns.iter()) {
        render_slot(config, slot, frame, *cell);
    }
}

/// Renders one slot: a bordered box with the character bold-centered.
///
/// The selected slot gets a thick outline in the selected style; every other
/// slot gets the regular outline in the unselected style.
fn render_slot(config: &OtpConfig, slot: &Slot, frame: &mut Frame, area: Rect) {
    let (border_type, border_style) = if slot.selected {
        (BorderType::Thick, config.selected_style)
    } else {
        (BorderType::Rounded, config.unselected_style)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = Line::from(Span::styled(
        slot.ch.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OtpLength;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state_with(config: &OtpConfig, buffer: &str, input_active: bool) -> OtpState {
        let mut state = OtpState::new(config);
        state.buffer = buffer.to_string();
        state.input_active = input_active;
        state
    }

    #[test]
    fn slots_mirror_buffer_and_placeholder() {
        let config = OtpConfig::new(OtpLength::Four).placeholder('*');
        let state = state_with(&config, "12", false);

        let derived = slots(&config, &state);
        assert_eq!(derived.len(), 4);
        assert_eq!(derived[0].ch, '1');
        assert_eq!(derived[1].ch, '2');
        assert_eq!(derived[2].ch, '*');
        assert_eq!(derived[3].ch, '*');
        assert!(derived[0].filled && derived[1].filled);
        assert!(!derived[2].filled && !derived[3].filled);
    }

    #[test]
    fn whitespace_placeholder_renders_as_space() {
        let config = OtpConfig::default().placeholder('\t');
        let state = state_with(&config, "", false);
        assert!(slots(&config, &state).iter().all(|slot| slot.ch == ' '));
    }

    #[test]
    fn next_slot_selected_only_while_active() {
        let config = OtpConfig::new(OtpLength::Four);
        let active = state_with(&config, "12", true);
        let selected: Vec<bool> = slots(&config, &active).iter().map(|s| s.selected).collect();
        assert_eq!(selected, vec![false, false, true, false]);

        let inactive = state_with(&config, "12", false);
        assert!(slots(&config, &inactive).iter().all(|s| !s.selected));
    }

    #[test]
    fn no_slot_selected_when_full() {
        let config = OtpConfig::new(OtpLength::Four);
        let state = state_with(&config, "1234", true);
        assert!(slots(&config, &state).iter().all(|s| !s.selected));
    }

    #[test]
    fn empty_active_buffer_selects_slot_zero() {
        let config = OtpConfig::default();
        let state = state_with(&config, "", true);
        assert!(slots(&config, &state)[0].selected);
    }

    #[test]
    fn slots_is_pure() {
        let config = OtpConfig::default();
        let state = state_with(&config, "42", true);
        assert_eq!(slots(&config, &state), slots(&config, &state));
    }

    #[test]
    fn over_length_buffer_shows_first_length_chars() {
        // Transient state between an over-length paste and the next tick.
        let config = OtpConfig::new(OtpLength::Four);
        let state = state_with(&config, "98765", true);

        let derived = slots(&config, &state);
        let shown: String = derived.iter().map(|s| s.ch).collect();
        assert_eq!(shown, "9876");
        assert!(derived.iter().all(|s| !s.selected));
    }

    #[test]
    fn draws_digits_and_placeholders() {
        let config = OtpConfig::new(OtpLength::Four).placeholder('-');
        let state = state_with(&config, "12", true);

        let width = desired_width(&config);
        let backend = TestBackend::new(width, SLOT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(&config, &state, frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut content = String::new();
        for y in 0..SLOT_HEIGHT {
            for x in 0..width {
                content.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
            }
        }
        assert!(content.contains('1'));
        assert!(content.contains('2'));
        assert!(content.contains('-'));
    }
}
