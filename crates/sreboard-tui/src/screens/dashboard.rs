//! Dashboard screen: region tabs, status card, action list, image search,
//! and quick queries.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs},
};

use sreboard_core::{DashboardAction, InputField, QuickQuery, Region};

use crate::action::Action;
use crate::app::Board;
use crate::component::Component;
use crate::theme;
use crate::widgets::status_card::render_status_card;

const REGIONS: [Region; 2] = [Region::Region1, Region::Region2];

/// Buttons in list order, with their hotkeys.
const BUTTONS: [(char, &str); 7] = [
    ('u', "Active Users"),
    ('d', "Active Devices"),
    ('v', "Deployment Version"),
    ('l', "Log Diagnostics"),
    ('r', "Refresh Status"),
    ('t', "Simulate High Traffic"),
    ('f', "Simulate Failover"),
];

fn button_action(index: usize) -> Option<DashboardAction> {
    Some(match index {
        0 => DashboardAction::ActiveUsers,
        1 => DashboardAction::ActiveDevices,
        2 => DashboardAction::DeploymentVersion,
        3 => DashboardAction::LogDiagnostics,
        4 => DashboardAction::RefreshStatus,
        5 => DashboardAction::SimulateHighTraffic,
        6 => DashboardAction::SimulateFailover,
        _ => return None,
    })
}

pub struct DashboardScreen {
    selected: usize,
    search_focused: bool,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            search_focused: false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, board: &Board) -> Option<Action> {
        let current = board.input(InputField::SearchQuery);
        match key.code {
            KeyCode::Esc => {
                self.search_focused = false;
                None
            }
            KeyCode::Enter if board.is_loading() => None,
            KeyCode::Enter => {
                self.search_focused = false;
                Some(Action::SearchImages)
            }
            KeyCode::Backspace => {
                let mut value = current.to_owned();
                value.pop();
                Some(Action::EditInput(InputField::SearchQuery, value))
            }
            KeyCode::Char(c) => Some(Action::EditInput(
                InputField::SearchQuery,
                format!("{current}{c}"),
            )),
            _ => None,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render_tabs(frame: &mut Frame, area: Rect, active: Region) {
        let titles: Vec<Line> = REGIONS
            .iter()
            .enumerate()
            .map(|(i, &region)| {
                let style = if region == active {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(format!(" {} {} ", i + 1, region.label()), style))
            })
            .collect();

        let selected = REGIONS.iter().position(|&r| r == active).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .divider(Span::styled("│", theme::key_hint()))
            .select(selected);
        frame.render_widget(tabs, area);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect, loading: bool) {
        let items: Vec<ListItem> = BUTTONS
            .iter()
            .enumerate()
            .map(|(i, (hotkey, label))| {
                let style = if loading {
                    theme::disabled()
                } else if i == self.selected && !self.search_focused {
                    theme::selected()
                } else {
                    theme::text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {hotkey} "), theme::key_hint_key()),
                    Span::styled((*label).to_owned(), style),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(" Actions ", theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.search_focused {
                theme::border_default()
            } else {
                theme::border_focused()
            });
        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, query: &str) {
        let text = if self.search_focused {
            format!("{query}\u{2588}")
        } else if query.is_empty() {
            "press / to search images".into()
        } else {
            query.to_owned()
        };
        let style = if self.search_focused || !query.is_empty() {
            Style::default().fg(theme::NEON_CYAN)
        } else {
            theme::key_hint()
        };

        let block = Block::default()
            .title(Span::styled(" Image Search ", theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.search_focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        frame.render_widget(Paragraph::new(Span::styled(text, style)).block(block), area);
    }

    fn render_quick_queries(frame: &mut Frame, area: Rect, loading: bool) {
        let label_style = if loading { theme::disabled() } else { theme::text() };
        let lines: Vec<Line> = QuickQuery::all()
            .enumerate()
            .map(|(i, q)| {
                Line::from(vec![
                    Span::styled(format!(" F{} ", i + 1), theme::key_hint_key()),
                    Span::styled(q.label(), label_style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(" Quick Queries ", theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for DashboardScreen {
    fn handle_key_event(&mut self, key: KeyEvent, board: &Board) -> Result<Option<Action>> {
        if self.search_focused {
            return Ok(self.handle_search_key(key, board));
        }

        let loading = board.is_loading();
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('x') => Some(Action::Logout),
            KeyCode::Char('1') => Some(Action::SelectRegion(Region::Region1)),
            KeyCode::Char('2') => Some(Action::SelectRegion(Region::Region2)),
            KeyCode::Char('/') => {
                self.search_focused = true;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(BUTTONS.len() - 1);
                None
            }
            _ if loading => None,
            KeyCode::Enter => button_action(self.selected).map(Action::Dispatch),
            KeyCode::F(n @ 1..=4) => QuickQuery::all()
                .nth(usize::from(n) - 1)
                .map(|q| Action::Dispatch(q.action())),
            KeyCode::Char(c) => BUTTONS
                .iter()
                .position(|(hotkey, _)| *hotkey == c)
                .and_then(|i| {
                    self.selected = i;
                    button_action(i)
                })
                .map(Action::Dispatch),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) {
        if matches!(action, Action::Logout) {
            self.search_focused = false;
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, board: &Board) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

        Self::render_tabs(frame, layout[0], board.region());
        render_status_card(frame, layout[1], board.region(), board.status());

        let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);
        self.render_actions(frame, body[0], board.is_loading());

        let side = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(body[1]);
        self.render_search(frame, side[0], board.input(InputField::SearchQuery));
        Self::render_quick_queries(frame, side[1], board.is_loading());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::tests::{board, logged_in_board};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn number_keys_select_region() {
        let board = logged_in_board();
        let mut screen = DashboardScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('2')), &board).unwrap(),
            Some(Action::SelectRegion(Region::Region2))
        );
    }

    #[tokio::test]
    async fn enter_activates_selected_button() {
        let board = logged_in_board();
        let mut screen = DashboardScreen::new();
        screen.handle_key_event(key(KeyCode::Down), &board).unwrap();
        screen.handle_key_event(key(KeyCode::Down), &board).unwrap();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter), &board).unwrap(),
            Some(Action::Dispatch(DashboardAction::DeploymentVersion))
        );
    }

    #[tokio::test]
    async fn function_keys_send_quick_queries() {
        let board = logged_in_board();
        let mut screen = DashboardScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::F(3)), &board).unwrap(),
            Some(Action::Dispatch(QuickQuery::Error400Sources.action()))
        );
    }

    #[test]
    fn hotkeys_match_buttons() {
        let board = board();
        let mut screen = DashboardScreen::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('f')), &board).unwrap(),
            Some(Action::Dispatch(DashboardAction::SimulateFailover))
        );
        assert_eq!(screen.selected, 6);
    }

    #[test]
    fn search_input_captures_typing() {
        let board = board();
        let mut screen = DashboardScreen::new();
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('/')), &board).unwrap(), None);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('q')), &board).unwrap(),
            Some(Action::EditInput(InputField::SearchQuery, "q".into()))
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter), &board).unwrap(),
            Some(Action::SearchImages)
        );
        assert!(!screen.search_focused);
    }

    #[tokio::test]
    async fn actions_are_disabled_while_loading() {
        let mut board = logged_in_board();
        board.dispatch(DashboardAction::ActiveUsers).unwrap();
        assert!(board.is_loading());

        let mut screen = DashboardScreen::new();
        assert_eq!(screen.handle_key_event(key(KeyCode::Enter), &board).unwrap(), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::F(1)), &board).unwrap(), None);
        assert_eq!(screen.handle_key_event(key(KeyCode::Char('u')), &board).unwrap(), None);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('x')), &board).unwrap(),
            Some(Action::Logout)
        );
    }
}
