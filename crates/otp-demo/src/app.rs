//! Demo event loop.
//!
//! A synchronous poll loop in the widget's reducer shape: terminal events
//! feed the field, a `Tick` each cycle applies deferred truncations, and
//! rendering happens at tick cadence.

use std::cell::RefCell;
use std::io::Stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use otp_field::{OtpConfig, OtpField, render as slot_render};
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use crate::terminal;

/// Tick cadence while input is arriving (60fps keeps deferred truncation
/// visually immediate).
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Runs the demo with the given widget configuration.
///
/// # Errors
/// Returns an error if terminal setup or the event loop fails.
pub fn run(config: OtpConfig) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::setup().context("Failed to setup terminal")?;

    let result = App::new(config).event_loop(&mut term);

    let restore = terminal::restore();
    result.and(restore)
}

/// Demo application state.
struct App {
    field: OtpField,
    /// Last submitted code, shared with the field's completion callback.
    submitted: Rc<RefCell<Option<String>>>,
    /// Slot row position from the last render, for click hit-testing.
    widget_area: Rect,
    should_quit: bool,
}

impl App {
    fn new(config: OtpConfig) -> Self {
        let submitted: Rc<RefCell<Option<String>>> = Rc::default();
        let sink = Rc::clone(&submitted);
        let field = OtpField::new(config).on_complete(move |code| {
            tracing::debug!(code, "code completed");
            *sink.borrow_mut() = Some(code.to_string());
        });

        Self {
            field,
            submitted,
            widget_area: Rect::default(),
            should_quit: false,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        let mut last_input = Instant::now();
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.should_quit {
            // Fast tick while keys are arriving so a deferred truncation
            // applies on the very next cycle; slow poll when idle.
            let tick_interval = if last_input.elapsed() < IDLE_POLL_DURATION {
                FRAME_DURATION
            } else {
                IDLE_POLL_DURATION
            };

            let poll_duration = tick_interval.saturating_sub(last_tick.elapsed());
            if event::poll(poll_duration).context("Failed to poll terminal events")? {
                last_input = Instant::now();
                self.handle_event(event::read().context("Failed to read terminal event")?);
                // Drain any remaining buffered events (non-blocking)
                while event::poll(Duration::ZERO)? {
                    self.handle_event(event::read()?);
                }
                dirty = true;
            }

            if last_tick.elapsed() >= tick_interval {
                self.field.tick();
                last_tick = Instant::now();
                dirty = true;
            }

            if dirty {
                terminal.draw(|frame| self.render(frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.field.handle_paste(&text),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.kind, KeyEventKind::Release) {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if !self.field.is_input_active() => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                tracing::debug!("input dismissed");
                self.field.dismiss();
            }
            KeyCode::Enter => {
                tracing::debug!("input activated");
                self.field.tap();
            }
            _ => self.field.handle_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && self
                .widget_area
                .contains(Position::new(mouse.column, mouse.row))
        {
            tracing::debug!("widget tapped");
            self.field.tap();
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(slot_render::SLOT_HEIGHT),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            " otp-demo - enter the code",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(title, rows[0]);

        // Center the slot row horizontally
        let width = slot_render::desired_width(self.field.config()).min(rows[2].width);
        let x = rows[2].x + (rows[2].width.saturating_sub(width)) / 2;
        self.widget_area = Rect::new(x, rows[2].y, width, rows[2].height);
        self.field.render(frame, self.widget_area);

        let status = self.status_line();
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[3]);

        let help = Paragraph::new(Line::from(Span::styled(
            " click/Enter focus · Esc dismiss · q/Ctrl+C quit",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )));
        frame.render_widget(help, rows[5]);
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(code) = self.submitted.borrow().as_ref() {
            return Line::from(vec![
                Span::raw("Submitted: "),
                Span::styled(
                    code.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]);
        }
        if self.field.is_input_active() {
            Line::from("Type the code")
        } else {
            Line::from("Click the boxes or press Enter to start")
        }
    }
}
