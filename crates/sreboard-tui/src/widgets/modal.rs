//! Result modal drawn over the dashboard.
//!
//! The overlay's rectangle is a pure function of the frame area, so the app
//! can hit-test mouse clicks against the same rectangle it rendered.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use sreboard_core::{Modal, ModalView};

use crate::theme;

/// Centered overlay: 70% of the width and height, never larger than the
/// frame minus a two-cell margin.
pub fn modal_area(area: Rect) -> Rect {
    let width = (area.width * 7 / 10).max(40).min(area.width.saturating_sub(4));
    let height = (area.height * 7 / 10).max(10).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Whether a click at (`column`, `row`) lands outside the overlay.
pub fn is_outside(area: Rect, column: u16, row: u16) -> bool {
    !modal_area(area).contains(Position::new(column, row))
}

/// Body text: question/answer for assistant replies, pretty JSON otherwise.
pub fn modal_lines(modal: &Modal) -> Vec<Line<'static>> {
    match modal.view() {
        ModalView::Answer { question, answer } => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Question: ", theme::title_style()),
                    Span::styled(question, theme::text()),
                ]),
                Line::from(""),
            ];
            lines.extend(
                answer
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_owned(), theme::text()))),
            );
            lines
        }
        ModalView::Raw(pretty) => pretty
            .lines()
            .map(|l| Line::from(Span::styled(l.to_owned(), theme::text())))
            .collect(),
    }
}

pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal, scroll: u16) {
    let overlay = modal_area(area);
    frame.render_widget(Clear, overlay);

    let border = if modal.error_message().is_some() {
        Style::default().fg(theme::ERROR_RED)
    } else {
        theme::border_focused()
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                modal.title().to_owned(),
                theme::title_style().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(Span::styled(
            " j/k scroll  Esc close ",
            theme::key_hint(),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(theme::BG_DARK));

    let body = Paragraph::new(modal_lines(modal))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, overlay);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn modal_area_is_centered_inside_frame() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = modal_area(area);
        assert_eq!(overlay, Rect::new(15, 6, 70, 28));
    }

    #[test]
    fn modal_area_fits_small_frames() {
        let area = Rect::new(0, 0, 30, 8);
        let overlay = modal_area(area);
        assert!(overlay.width <= 26);
        assert!(overlay.height <= 6);
        assert!(area.contains(Position::new(overlay.x, overlay.y)));
    }

    #[test]
    fn clicks_are_classified_against_the_overlay() {
        let area = Rect::new(0, 0, 100, 40);
        assert!(is_outside(area, 0, 0));
        assert!(is_outside(area, 99, 39));
        assert!(!is_outside(area, 50, 20));
        assert!(!is_outside(area, 15, 6));
    }

    #[test]
    fn answer_payload_renders_question_then_answer() {
        let modal = Modal::new(
            "AI Query Response",
            json!({ "question": "X", "answer": "line one\nline two" }),
        );
        assert_eq!(
            plain(&modal_lines(&modal)),
            ["Question: X", "", "line one", "line two"]
        );
    }

    #[test]
    fn other_payloads_render_as_pretty_json() {
        let modal = Modal::error("Active Users", "Failed to fetch users");
        assert_eq!(
            plain(&modal_lines(&modal)),
            ["{", "  \"error\": \"Failed to fetch users\"", "}"]
        );
    }
}
