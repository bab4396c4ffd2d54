//! Application core: event loop, screen selection, action processing.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc;
use tracing::{debug, info};

use sreboard_core::{Dashboard, HttpBackend};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader, RENDER_RATE, TICK_RATE};
use crate::screens::{DashboardScreen, LoginScreen};
use crate::theme;
use crate::tui::Tui;
use crate::widgets::modal::{is_outside, render_modal};

pub type Board = Dashboard<HttpBackend>;

pub struct App {
    board: Board,
    login: LoginScreen,
    dashboard: DashboardScreen,
    running: bool,
    modal_scroll: u16,
    throbber: ThrobberState,
    /// Last known terminal size, for mouse hit-testing.
    terminal_size: (u16, u16),
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(board: Board) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            board,
            login: LoginScreen::new(),
            dashboard: DashboardScreen::new(),
            running: true,
            modal_scroll: 0,
            throbber: ThrobberState::default(),
            terminal_size: (0, 0),
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));

        let mut events = EventReader::new(TICK_RATE, RENDER_RATE);
        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            let action = match event {
                Event::Key(key) => self.handle_key_event(key)?,
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                Event::Tick => Some(Action::Tick),
                Event::Render => Some(Action::Render),
            };
            if let Some(action) = action {
                self.action_tx.send(action)?;
            }

            while let Ok(action) = self.action_rx.try_recv() {
                if action == Action::Render {
                    tui.draw(|frame| self.render(frame))?;
                } else {
                    self.process_action(&action);
                }
            }
        }

        events.stop();
        self.board.logout();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Ctrl+C always quits. An open modal takes every other key; otherwise
    /// the active screen decides.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.board.modal().is_some() {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::CloseModal),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
                _ => None,
            });
        }

        let screen: &mut dyn Component = if self.board.is_logged_in() {
            &mut self.dashboard
        } else {
            &mut self.login
        };
        screen.handle_key_event(key, &self.board)
    }

    /// A left click outside the modal closes it; clicks inside are ignored.
    fn handle_mouse_event(&self, mouse: MouseEvent) -> Option<Action> {
        if self.board.modal().is_none() {
            return None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (w, h) = self.terminal_size;
                is_outside(Rect::new(0, 0, w, h), mouse.column, mouse.row).then_some(Action::CloseModal)
            }
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        }
    }

    fn process_action(&mut self, action: &Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Render => {}
            Action::Tick => {
                self.board.pump();
                if self.board.is_loading() {
                    self.throbber.calc_next();
                }
            }
            Action::Resize(w, h) => self.terminal_size = (*w, *h),
            Action::EditInput(field, value) => self.board.update_input(*field, value.clone()),
            Action::SubmitLogin => {
                if let Err(e) = self.board.submit_login() {
                    debug!(error = %e, "login rejected");
                }
            }
            Action::Logout => self.board.logout(),
            Action::SelectRegion(region) => self.board.select_region(*region),
            Action::Dispatch(request) => {
                self.modal_scroll = 0;
                if let Err(e) = self.board.dispatch(request.clone()) {
                    debug!(error = %e, "action not started");
                }
            }
            Action::SearchImages => {
                self.modal_scroll = 0;
                if let Err(e) = self.board.search_images() {
                    debug!(error = %e, "search not started");
                }
            }
            Action::CloseModal => {
                self.board.close_modal();
                self.modal_scroll = 0;
            }
            Action::ScrollDown => self.modal_scroll = self.modal_scroll.saturating_add(1),
            Action::ScrollUp => self.modal_scroll = self.modal_scroll.saturating_sub(1),
        }

        self.login.update(action);
        self.dashboard.update(action);
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        if self.board.is_logged_in() {
            self.dashboard.render(frame, layout[0], &self.board);
        } else {
            self.login.render(frame, layout[0], &self.board);
        }
        self.render_status_bar(frame, layout[1]);

        if let Some(modal) = self.board.modal() {
            render_modal(frame, area, modal, self.modal_scroll);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

        if self.board.is_loading() {
            let throbber = Throbber::default()
                .label(" loading…")
                .style(Style::default().fg(theme::NEON_CYAN))
                .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
            frame.render_stateful_widget(throbber, left, &mut self.throbber.clone());
        } else if self.board.is_polling() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" ● {}", self.board.region().label()),
                    Style::default().fg(theme::SUCCESS_GREEN),
                )),
                left,
            );
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled(" ○ logged out", theme::key_hint())),
                left,
            );
        }

        let hints: &[(&str, &str)] = if self.board.modal().is_some() {
            &[("j/k", "scroll"), ("Esc", "close")]
        } else if self.board.is_logged_in() {
            &[
                ("1/2", "region"),
                ("↑↓ Enter", "run"),
                ("/", "search"),
                ("F1-F4", "ask"),
                ("x", "logout"),
                ("q", "quit"),
            ]
        } else {
            &[("Ctrl+C", "quit")]
        };
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" {key}"), theme::key_hint_key()),
                    Span::styled(format!(" {desc} "), theme::key_hint()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), right);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sreboard_core::{DashboardAction, DashboardConfig, InputField, Region, StaticCredentials};

    use super::*;

    pub fn board() -> Board {
        let config = DashboardConfig::default();
        let backend = Arc::new(HttpBackend::new(&config).unwrap());
        Dashboard::new(config, backend, Arc::new(StaticCredentials::demo()))
    }

    /// Needs a tokio runtime: logging in starts the poller.
    pub fn logged_in_board() -> Board {
        let mut board = board();
        board.login("admin", "admin123").unwrap();
        board
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Feed a key through the same path the event loop uses.
    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            app.process_action(&action);
        }
    }

    fn with_modal() -> App {
        let mut app = App::new(logged_in_board());
        app.terminal_size = (100, 40);
        app.board.show_modal("Active Users", json!({ "users": [] }));
        app
    }

    // ── Login flow ──────────────────────────────────────────────────

    #[tokio::test]
    async fn typing_credentials_logs_in() {
        let mut app = App::new(board());
        for c in "admin".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "admin123".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.board.is_logged_in());
        assert!(app.board.is_polling());
    }

    #[tokio::test]
    async fn wrong_password_shows_hint_and_stays_on_login() {
        let mut app = App::new(board());
        app.process_action(&Action::EditInput(InputField::Username, "admin".into()));
        app.process_action(&Action::EditInput(InputField::Password, "nope".into()));
        app.process_action(&Action::SubmitLogin);

        assert!(!app.board.is_logged_in());
        assert_eq!(
            app.board.login_error(),
            Some("Invalid credentials. Use admin / admin123")
        );
    }

    #[test]
    fn q_on_login_screen_is_text_not_quit() {
        let mut app = App::new(board());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.board.input(InputField::Username), "q");
    }

    #[tokio::test]
    async fn logout_returns_to_login_screen() {
        let mut app = App::new(logged_in_board());
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.board.is_logged_in());
        assert!(!app.board.is_polling());
        assert_eq!(app.board.input(InputField::Username), "");
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::new(board());
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key_event(event).unwrap(), Some(Action::Quit));
    }

    // ── Dashboard ───────────────────────────────────────────────────

    #[tokio::test]
    async fn region_key_retargets_dashboard() {
        let mut app = App::new(logged_in_board());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.board.region(), Region::Region2);
        assert_eq!(app.board.base_url().as_str(), "http://localhost:8100/");
    }

    #[tokio::test]
    async fn blank_search_opens_error_modal() {
        let mut app = App::new(logged_in_board());
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Enter);

        let modal = app.board.modal().unwrap();
        assert_eq!(modal.title(), "Image Search");
        assert_eq!(modal.error_message(), Some("Please enter a search query"));
        assert!(!app.board.is_loading());
    }

    #[tokio::test]
    async fn dispatch_sets_loading() {
        let mut app = App::new(logged_in_board());
        app.process_action(&Action::Dispatch(DashboardAction::ActiveUsers));
        assert!(app.board.is_loading());
    }

    // ── Modal ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn modal_keys_close_and_scroll() {
        let mut app = with_modal();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.modal_scroll, 1);

        // Dashboard keys are swallowed while the modal is open.
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.board.region(), Region::Region1);

        press(&mut app, KeyCode::Esc);
        assert!(app.board.modal().is_none());
        assert_eq!(app.modal_scroll, 0);
    }

    #[tokio::test]
    async fn click_outside_modal_closes_it() {
        let app = with_modal();
        assert_eq!(app.handle_mouse_event(click(0, 0)), Some(Action::CloseModal));
    }

    #[tokio::test]
    async fn click_inside_modal_is_ignored() {
        let app = with_modal();
        assert_eq!(app.handle_mouse_event(click(50, 20)), None);
    }

    #[tokio::test]
    async fn clicks_without_modal_do_nothing() {
        let mut app = App::new(logged_in_board());
        app.terminal_size = (100, 40);
        assert_eq!(app.handle_mouse_event(click(0, 0)), None);
    }
}
