//! Signup view.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::state::{AppState, View};
use crate::views::{field_group, password_input, render_notice, submitted_with_enter};

/// Renders the signup screen.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        ui.heading(RichText::new("Create your account").size(24.0).strong());
        ui.label(RichText::new("A minute is all it takes").size(14.0).weak());

        ui.add_space(24.0);

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

/// Renders the signup form fields and submit button.
fn render_form(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        field_group(ui, state.entrance_progress("full-name", now), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.signup.full_name)
                    .hint_text("Full name")
                    .desired_width(250.0),
            );
        });

        ui.add_space(8.0);

        field_group(ui, state.entrance_progress("email", now), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.signup.email)
                    .hint_text("Email")
                    .desired_width(250.0),
            );
        });

        ui.add_space(8.0);

        field_group(ui, state.entrance_progress("phone", now), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.signup.phone)
                    .hint_text("Phone (10 digits)")
                    .desired_width(250.0),
            );
        });

        ui.add_space(8.0);

        field_group(ui, state.entrance_progress("password", now), |ui| {
            password_input(
                ui,
                &mut *state,
                "signup-password",
                |s| &mut s.signup.password,
                "Password",
            );
        });

        ui.add_space(8.0);

        let mut submit = false;
        field_group(ui, state.entrance_progress("confirm-password", now), |ui| {
            let response = password_input(
                ui,
                &mut *state,
                "signup-confirm-password",
                |s| &mut s.signup.confirm_password,
                "Confirm password",
            );
            submit = submitted_with_enter(ui, &response);
        });

        // Password requirements hint
        ui.add_space(8.0);
        ui.label(
            RichText::new("At least 8 characters, one uppercase letter, one number")
                .size(11.0)
                .weak(),
        );

        ui.add_space(16.0);

        let busy = state.presentation_enabled() && state.feedback.is_busy();
        let label = if state.presentation_enabled() {
            state.feedback.label("Sign Up")
        } else {
            "Sign Up"
        };
        if ui
            .add_enabled(!busy, egui::Button::new(label).min_size([250.0, 36.0].into()))
            .clicked()
        {
            submit = true;
        }

        if submit {
            state.submit_signup(now);
        }

        ui.add_space(12.0);
        if ui
            .link(RichText::new("Already registered? Login").size(12.0))
            .clicked()
        {
            state.switch_view(View::Login, now);
        }
    });
}
