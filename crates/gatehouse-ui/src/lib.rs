//! Gatehouse UI - Auth form GUI.
//!
//! Renders the login and signup forms and wires them to the
//! [`gatehouse_core`] form interaction controller:
//!
//! - Password fields with visibility toggle triggers
//! - Client-side validation with dismissible error banners
//! - Entrance staggering and simulated submit feedback (presentation pack)
//!
//! # Usage
//!
//! ```no_run
//! use gatehouse_core::ControllerConfig;
//! use gatehouse_ui::run_app;
//!
//! run_app(ControllerConfig::default()).expect("Failed to run auth window");
//! ```

mod app;
pub mod error;
pub mod state;
pub mod theme;
pub mod views;

pub use app::AuthApp;
pub use error::{Result, UiError};
pub use state::{AppState, View};

use gatehouse_core::ControllerConfig;

/// Runs the auth window.
///
/// This is the main entry point for the GUI; it blocks until the window
/// closes.
pub fn run_app(config: ControllerConfig) -> Result<()> {
    let app = AuthApp::new(config);
    let options = AuthApp::window_options();

    eframe::run_native("Gatehouse", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| UiError::Gui(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_defaults_to_login_view() {
        let state = AppState::new(ControllerConfig::default());
        assert_eq!(state.view, View::Login);
    }

    #[test]
    fn view_labels() {
        assert_eq!(View::Login.as_str(), "Login");
        assert_eq!(View::Signup.as_str(), "Sign Up");
    }
}
