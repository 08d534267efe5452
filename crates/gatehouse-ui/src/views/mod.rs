//! UI views for the auth window.

pub mod login;
pub mod signup;

use eframe::egui::{self, RichText};
use gatehouse_core::notice::Severity;
use gatehouse_core::visibility::PasswordVisibility;

use crate::state::AppState;
use crate::theme;

/// Wraps one form field group in its entrance animation: fade in while
/// sliding up. `progress` comes from [`AppState::entrance_progress`] for the
/// group's configured name; with the presentation pack off it is pinned at
/// 1.0 and this is a plain scope.
pub(crate) fn field_group(
    ui: &mut egui::Ui,
    progress: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.scope(|ui| {
        ui.set_opacity(progress);
        ui.add_space((1.0 - progress) * 12.0);
        add_contents(ui);
    });
}

/// Renders the active notice as a dismissible banner at the top of the form.
pub(crate) fn render_notice(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(notice) = state.notice() else {
        return;
    };

    let (bg, fg) = match notice.severity() {
        Severity::Error => (theme::notice::ERROR_BG, theme::status::ERROR),
        Severity::Success => (theme::notice::SUCCESS_BG, theme::status::SUCCESS),
    };
    let message = notice.message().to_owned();

    egui::Frame::none()
        .fill(bg)
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(fg, &message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("x").size(12.0))
                        .on_hover_text("Dismiss")
                        .clicked()
                    {
                        state.dismiss_notice();
                    }
                });
            });
        });
    ui.add_space(12.0);
}

/// Renders a password input with its visibility toggle trigger.
///
/// The trigger only appears if a toggle is bound to `field`; otherwise the
/// input renders alone (binding skipped, not an error).
pub(crate) fn password_input(
    ui: &mut egui::Ui,
    state: &mut AppState,
    field: &str,
    value_of: impl FnOnce(&mut AppState) -> &mut String,
    hint: &str,
) -> egui::Response {
    let masked = state
        .controller
        .visibility(field)
        .unwrap_or(PasswordVisibility::Masked)
        .is_masked();
    let toggle_bound = state.controller.visibility(field).is_some();

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(value_of(&mut *state))
                .password(masked)
                .hint_text(hint)
                .desired_width(214.0),
        );

        if toggle_bound {
            let label = state
                .controller
                .visibility(field)
                .map(|mode| mode.icon().action_label())
                .unwrap_or("Show");
            if ui.small_button(label).clicked() {
                state.controller.toggle_visibility(field);
            }
        }

        response
    })
    .inner
}

/// True if `response` just lost focus to an Enter press.
pub(crate) fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
