//! Component trait implemented by each screen.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::app::Board;

/// A screen reads dashboard state through `board` and never mutates it
/// directly; it returns an [`Action`] for the app loop to apply.
pub trait Component {
    /// Handle a key press. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, key: KeyEvent, board: &Board) -> Result<Option<Action>>;

    /// React to an action after the app has applied it.
    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, board: &Board);
}
