//! Password visibility toggle.
//!
//! A strict two-state machine: a password field is either masked or revealed,
//! and each activation of its toggle control flips it to the other state. The
//! trigger's icon tracks the state - "open eye" while revealed, "closed eye"
//! while masked.
//!
//! ## Usage
//!
//! ```
//! use gatehouse_core::visibility::{PasswordVisibility, ToggleControl};
//!
//! let mut toggle = ToggleControl::new("password");
//! assert_eq!(toggle.mode(), PasswordVisibility::Masked);
//!
//! toggle.activate();
//! assert_eq!(toggle.mode(), PasswordVisibility::Revealed);
//! ```

use serde::{Deserialize, Serialize};

/// Display mode of a password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PasswordVisibility {
    /// Characters are obscured (the default for a password field).
    #[default]
    Masked,

    /// Characters are rendered as plain text.
    Revealed,
}

impl PasswordVisibility {
    /// Returns the opposite mode.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// Returns true if the field is currently obscured.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked)
    }

    /// Returns the icon state the toggle trigger should show.
    pub fn icon(&self) -> EyeIcon {
        match self {
            Self::Masked => EyeIcon::Closed,
            Self::Revealed => EyeIcon::Open,
        }
    }

    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masked => "masked",
            Self::Revealed => "revealed",
        }
    }
}

impl std::fmt::Display for PasswordVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Icon state of a visibility toggle trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeIcon {
    /// Closed eye - shown while the field is masked.
    #[default]
    Closed,

    /// Open eye - shown while the field is revealed.
    Open,
}

impl EyeIcon {
    /// Returns a human-readable name for this icon state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed eye",
            Self::Open => "open eye",
        }
    }

    /// Returns the action label for a trigger showing this icon.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Closed => "Show",
            Self::Open => "Hide",
        }
    }
}

/// Pairs a visibility toggle trigger with the password field it controls.
///
/// Created once at bind time, mutated on each activation, and discarded with
/// the rest of the form state. Nothing here persists across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    field: String,
    mode: PasswordVisibility,
}

impl ToggleControl {
    /// Creates a toggle control for the named field, starting masked.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            mode: PasswordVisibility::Masked,
        }
    }

    /// Returns the identifier of the controlled field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> PasswordVisibility {
        self.mode
    }

    /// Returns the icon the trigger should currently show.
    pub fn icon(&self) -> EyeIcon {
        self.mode.icon()
    }

    /// Flips the display mode and returns the new one.
    pub fn activate(&mut self) -> PasswordVisibility {
        self.mode = self.mode.toggled();
        tracing::trace!(field = %self.field, mode = %self.mode, "visibility toggled");
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_masked() {
        let toggle = ToggleControl::new("password");
        assert!(toggle.mode().is_masked());
        assert_eq!(toggle.icon(), EyeIcon::Closed);
    }

    #[test]
    fn toggling_alternates_deterministically() {
        let mut toggle = ToggleControl::new("password");

        assert_eq!(toggle.activate(), PasswordVisibility::Revealed);
        assert_eq!(toggle.activate(), PasswordVisibility::Masked);
        assert_eq!(toggle.activate(), PasswordVisibility::Revealed);
    }

    #[test]
    fn odd_activation_count_reveals_even_restores() {
        let mut toggle = ToggleControl::new("password");

        for _ in 0..7 {
            toggle.activate();
        }
        assert_eq!(toggle.mode(), PasswordVisibility::Revealed);

        toggle.activate();
        assert_eq!(toggle.mode(), PasswordVisibility::Masked);
    }

    #[test]
    fn icon_tracks_mode() {
        let mut toggle = ToggleControl::new("password");
        toggle.activate();
        assert_eq!(toggle.icon(), EyeIcon::Open);
        assert_eq!(toggle.icon().name(), "open eye");

        toggle.activate();
        assert_eq!(toggle.icon(), EyeIcon::Closed);
        assert_eq!(toggle.icon().name(), "closed eye");
    }

    #[test]
    fn action_labels() {
        assert_eq!(EyeIcon::Closed.action_label(), "Show");
        assert_eq!(EyeIcon::Open.action_label(), "Hide");
    }

    #[test]
    fn field_identifier_is_kept() {
        let toggle = ToggleControl::new("confirm-password");
        assert_eq!(toggle.field(), "confirm-password");
    }
}
