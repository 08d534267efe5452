//! Main application struct and eframe integration.

use std::time::Instant;

use eframe::egui;

use gatehouse_core::ControllerConfig;

use crate::state::{AppState, View};
use crate::views::{login, signup};

/// Main auth window application.
pub struct AuthApp {
    /// Application state.
    state: AppState,
}

impl AuthApp {
    /// Creates the application from a controller configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Returns the window options for eframe.
    pub fn window_options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([460.0, 640.0])
                .with_min_inner_size([400.0, 560.0])
                .with_title("Gatehouse"),
            ..Default::default()
        }
    }

    /// Read access to the state, for tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl eframe::App for AuthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // First frame after startup or a view switch starts the entrance.
        self.state.begin_entrance(now);
        self.state.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Login => login::render(ui, &mut self.state, now),
            View::Signup => signup::render(ui, &mut self.state, now),
        });

        // Wake up exactly when the next deadline (notice expiry, feedback
        // phase, animation frame) needs us; otherwise stay idle.
        if let Some(delay) = self.state.repaint_after(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
