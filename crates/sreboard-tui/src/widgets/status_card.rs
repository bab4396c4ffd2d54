//! Region status card.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use sreboard_core::{Region, StatusSnapshot};

use crate::theme;

fn row(label: &'static str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![Span::styled(format!("  {label:<16}"), theme::key_hint()), value])
}

pub fn status_lines(status: Option<&StatusSnapshot>) -> Vec<Line<'static>> {
    let Some(snap) = status else {
        return vec![Line::from(Span::styled("  Waiting for first status…", theme::key_hint()))];
    };

    vec![
        row(
            "Status",
            Span::styled(
                snap.status.clone(),
                Style::default().fg(theme::health_color(&snap.status)),
            ),
        ),
        row("Version", Span::styled(snap.version.clone(), theme::text())),
        row(
            "Active devices",
            Span::styled(snap.active_devices.to_string(), theme::text()),
        ),
        row(
            "Active users",
            Span::styled(snap.active_users.to_string(), theme::text()),
        ),
    ]
}

pub fn render_status_card(frame: &mut Frame, area: Rect, region: Region, status: Option<&StatusSnapshot>) {
    let block = Block::default()
        .title(Span::styled(format!(" {} Status ", region.label()), theme::title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    frame.render_widget(Paragraph::new(status_lines(status)).block(block), area);
}
