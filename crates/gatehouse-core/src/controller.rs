//! Form interaction controller.
//!
//! The controller is initialized exactly once by the hosting application,
//! after the relevant forms exist, with the set of form and field
//! identifiers as configuration - there is no global "page ready" hook and
//! no hard-coded lookups. Each binding attempt resolves to present or
//! absent; an absent target is a normal, logged branch and that binding is
//! simply skipped, never an error.
//!
//! Submissions are evaluated synchronously against the snapshot captured at
//! submit time. A passing attempt yields [`SubmitOutcome::Proceed`] - the
//! host forwards the form to wherever it is configured to go; this crate
//! never inspects that destination. A failing attempt yields
//! [`SubmitOutcome::Blocked`] with exactly one notice carrying the first
//! failing rule's message.

use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::validation::{self, LoginAttempt, SignupAttempt};
use crate::visibility::{PasswordVisibility, ToggleControl};

/// Message posted when a signup attempt passes validation.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Registration successful! Please login to continue.";

/// Identifiers and pack toggles handed to [`FormController::new`].
///
/// Serializable so the application can load it from a config file; defaults
/// match the stock page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Identifier of the signup form, or `None` if the page has none.
    pub signup_form: Option<String>,

    /// Identifier of the login form, or `None` if the page has none.
    pub login_form: Option<String>,

    /// Password fields that carry a visibility toggle trigger. Each field
    /// gets its own toggle, so identifiers are per form.
    pub toggle_fields: Vec<String>,

    /// Field groups, in page order, for entrance staggering.
    pub field_groups: Vec<String>,

    /// Enables the presentation pack (entrance animation, simulated submit).
    pub presentation: bool,

    /// Enables the validation pack (signup/login rule checks).
    pub validation: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            signup_form: Some("signup-form".into()),
            login_form: Some("login-form".into()),
            toggle_fields: vec![
                "login-password".into(),
                "signup-password".into(),
                "signup-confirm-password".into(),
            ],
            field_groups: vec![
                "full-name".into(),
                "email".into(),
                "phone".into(),
                "password".into(),
                "confirm-password".into(),
            ],
            presentation: true,
            validation: true,
        }
    }
}

/// Result of handling a form submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Validation passed (or was not in play); the native submission
    /// proceeds to the form's configured target.
    Proceed,

    /// Validation failed; the submission is cancelled and this notice is
    /// shown at the top of the form.
    Blocked(Notice),
}

impl SubmitOutcome {
    /// Returns true if the submission goes ahead.
    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Binds page behavior to the configured forms.
#[derive(Debug)]
pub struct FormController {
    config: ControllerConfig,
    toggles: Vec<ToggleControl>,
}

impl FormController {
    /// Binds against the configured identifiers.
    ///
    /// Called once by the host after the forms exist. Absent identifiers
    /// leave the corresponding behavior unbound.
    pub fn new(config: ControllerConfig) -> Self {
        match &config.signup_form {
            Some(id) => tracing::debug!(form = %id, "signup validation bound"),
            None => tracing::debug!("no signup form configured, binding skipped"),
        }
        match &config.login_form {
            Some(id) => tracing::debug!(form = %id, "login validation bound"),
            None => tracing::debug!("no login form configured, binding skipped"),
        }

        let toggles = config
            .toggle_fields
            .iter()
            .map(ToggleControl::new)
            .collect();

        Self { config, toggles }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// True if a signup submit handler was installed.
    pub fn has_signup_binding(&self) -> bool {
        self.config.signup_form.is_some()
    }

    /// True if a login submit handler was installed.
    pub fn has_login_binding(&self) -> bool {
        self.config.login_form.is_some()
    }

    // ==================== Field groups ====================

    /// Position of `group` among the configured field groups, which fixes
    /// its entrance stagger slot. `None` if the group is not configured -
    /// an unbound group simply does not animate.
    pub fn field_group_index(&self, group: &str) -> Option<usize> {
        self.config.field_groups.iter().position(|g| g == group)
    }

    /// Number of configured field groups.
    pub fn field_group_count(&self) -> usize {
        self.config.field_groups.len()
    }

    // ==================== Visibility toggles ====================

    /// Activates the toggle bound to `field`, returning the new mode, or
    /// `None` if no toggle was bound there (silent skip).
    pub fn toggle_visibility(&mut self, field: &str) -> Option<PasswordVisibility> {
        match self.toggles.iter_mut().find(|t| t.field() == field) {
            Some(toggle) => Some(toggle.activate()),
            None => {
                tracing::trace!(%field, "no visibility toggle bound");
                None
            }
        }
    }

    /// Current mode of the toggle bound to `field`.
    pub fn visibility(&self, field: &str) -> Option<PasswordVisibility> {
        self.toggles
            .iter()
            .find(|t| t.field() == field)
            .map(|t| t.mode())
    }

    // ==================== Submissions ====================

    /// Handles a signup submission.
    ///
    /// Unbound form or disabled validation pack: the submission proceeds
    /// untouched, exactly as if no handler had been installed.
    pub fn submit_signup(&self, attempt: &SignupAttempt) -> SubmitOutcome {
        if !self.has_signup_binding() || !self.config.validation {
            return SubmitOutcome::Proceed;
        }

        match validation::validate_signup(attempt) {
            Ok(()) => {
                tracing::info!("signup validation passed, submission proceeds");
                SubmitOutcome::Proceed
            }
            Err(err) => {
                tracing::debug!(rule = ?err, "signup validation failed");
                SubmitOutcome::Blocked(Notice::error(err.to_string()))
            }
        }
    }

    /// Handles a login submission. Same skip semantics as signup.
    pub fn submit_login(&self, attempt: &LoginAttempt) -> SubmitOutcome {
        if !self.has_login_binding() || !self.config.validation {
            return SubmitOutcome::Proceed;
        }

        match validation::validate_login(attempt) {
            Ok(()) => {
                tracing::info!("login validation passed, submission proceeds");
                SubmitOutcome::Proceed
            }
            Err(err) => {
                tracing::debug!(rule = ?err, "login validation failed");
                SubmitOutcome::Blocked(Notice::error(err.to_string()))
            }
        }
    }

    /// Notice to post after a successful signup.
    pub fn signup_success_notice(&self) -> Notice {
        Notice::success(SIGNUP_SUCCESS_MESSAGE)
    }
}
