//! Gatehouse Core - Headless auth-form interaction logic.
//!
//! This crate provides everything the Gatehouse front end needs that does not
//! touch a screen: validation rules for the signup and login forms, the
//! password visibility toggle, dismissible notices with a fixed auto-dismiss
//! deadline, the simulated submit-feedback sequence, and entrance staggering
//! for form field groups.
//!
//! The behavior is split into two independently toggleable packs, composed by
//! [`controller::FormController`]:
//!
//! - **Presentation pack**: entrance animations and simulated submit feedback
//! - **Validation pack**: signup/login field validation with error notices
//!
//! None of this is a security layer. Validation here is a UX convenience;
//! authoritative input validation belongs to whatever receives the submitted
//! form.

pub mod controller;
pub mod entrance;
pub mod feedback;
pub mod notice;
pub mod validation;
pub mod visibility;

pub use controller::{ControllerConfig, FormController, SubmitOutcome};
pub use notice::{Notice, Severity, NOTICE_TTL};
pub use validation::{LoginAttempt, SignupAttempt, ValidationError};
pub use visibility::{EyeIcon, PasswordVisibility, ToggleControl};
