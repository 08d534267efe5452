//! Login view.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::state::{AppState, View};
use crate::views::{field_group, password_input, render_notice, submitted_with_enter};

/// Renders the login screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.heading(RichText::new("Gatehouse").size(32.0).strong());
        ui.label(RichText::new("Sign in to continue").size(14.0).weak());

        ui.add_space(32.0);

        egui::Frame::none()
            .fill(ui.style().visuals.widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_min_width(300.0);
                render_notice(ui, state);
                render_form(ui, state, now);
            });
    });
}

/// Renders the login form fields and submit button.
fn render_form(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        field_group(ui, state.entrance_progress("email", now), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.login.email)
                    .hint_text("Email")
                    .desired_width(250.0),
            );
        });

        ui.add_space(8.0);

        let mut submit = false;
        field_group(ui, state.entrance_progress("password", now), |ui| {
            let response = password_input(
                ui,
                &mut *state,
                "login-password",
                |s| &mut s.login.password,
                "Password",
            );
            submit = submitted_with_enter(ui, &response);
        });

        ui.add_space(16.0);

        let busy = state.presentation_enabled() && state.feedback.is_busy();
        let label = if state.presentation_enabled() {
            state.feedback.label("Login")
        } else {
            "Login"
        };
        if ui
            .add_enabled(!busy, egui::Button::new(label).min_size([250.0, 36.0].into()))
            .clicked()
        {
            submit = true;
        }

        if submit {
            state.submit_login(now);
        }

        ui.add_space(12.0);
        if ui
            .link(RichText::new("Need an account? Sign up").size(12.0))
            .clicked()
        {
            state.switch_view(View::Signup, now);
        }
    });
}
