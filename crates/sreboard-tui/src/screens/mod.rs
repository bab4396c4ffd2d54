//! Screens: the login gate and the dashboard behind it.

pub mod dashboard;
pub mod login;

pub use dashboard::DashboardScreen;
pub use login::LoginScreen;
