pub mod modal;
pub mod status_card;
