//! UI actions. Every state change in the TUI goes through one of these.

use sreboard_core::{DashboardAction, InputField, Region};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Session ───────────────────────────────────────────────────
    EditInput(InputField, String),
    SubmitLogin,
    Logout,

    // ── Dashboard ─────────────────────────────────────────────────
    SelectRegion(Region),
    Dispatch(DashboardAction),
    SearchImages,

    // ── Modal ─────────────────────────────────────────────────────
    CloseModal,
    ScrollUp,
    ScrollDown,
}
