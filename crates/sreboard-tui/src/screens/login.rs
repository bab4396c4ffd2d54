//! Login screen. The dashboard is unreachable until the verifier accepts
//! the entered pair.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use sreboard_core::InputField;

use crate::action::Action;
use crate::app::Board;
use crate::component::Component;
use crate::theme;

pub struct LoginScreen {
    field: InputField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            field: InputField::Username,
        }
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            InputField::Username => InputField::Password,
            _ => InputField::Username,
        };
    }

    fn render_panel(frame: &mut Frame, area: Rect) -> Rect {
        let panel_w = 52u16.min(area.width.saturating_sub(4));
        let panel_h = 14u16.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(panel_w)) / 2;
        let y = (area.height.saturating_sub(panel_h)) / 2;
        let panel = Rect::new(area.x + x, area.y + y, panel_w, panel_h);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SRE Dashboard Login", theme::title_style()),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        inner
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, field: InputField, value: &str) {
        let active = self.field == field;
        let (label, display) = match field {
            InputField::Password => ("Password", "\u{25CF}".repeat(value.chars().count())),
            _ => ("Username", value.to_owned()),
        };
        let text = if active { format!("{display}\u{2588}") } else { display };

        let block = Block::default()
            .title(Span::styled(
                format!(" {label} "),
                if active { theme::title_style() } else { theme::text() },
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(theme::NEON_CYAN))).block(block),
            area,
        );
    }
}

impl Component for LoginScreen {
    fn handle_key_event(&mut self, key: KeyEvent, board: &Board) -> Result<Option<Action>> {
        let current = board.input(self.field);
        let action = match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.toggle_field();
                None
            }
            KeyCode::Enter => Some(Action::SubmitLogin),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Backspace => {
                let mut value = current.to_owned();
                value.pop();
                Some(Action::EditInput(self.field, value))
            }
            KeyCode::Char(c) => Some(Action::EditInput(self.field, format!("{current}{c}"))),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) {
        if matches!(action, Action::Logout) {
            self.field = InputField::Username;
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, board: &Board) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            area,
        );
        let inner = Self::render_panel(frame, area);

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

        self.render_input(frame, layout[1], InputField::Username, board.input(InputField::Username));
        self.render_input(frame, layout[2], InputField::Password, board.input(InputField::Password));

        if let Some(err) = board.login_error() {
            frame.render_widget(
                Paragraph::new(Span::styled(err.to_owned(), Style::default().fg(theme::ERROR_RED)))
                    .alignment(Alignment::Center),
                layout[3],
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", theme::key_hint_key()),
                Span::styled(" switch field  ", theme::key_hint()),
                Span::styled("Enter", theme::key_hint_key()),
                Span::styled(" log in  ", theme::key_hint()),
                Span::styled("Esc", theme::key_hint_key()),
                Span::styled(" quit", theme::key_hint()),
            ]))
            .alignment(Alignment::Center),
            layout[5],
        );
    }
}
