//! Dismissible notices.
//!
//! A notice is a transient banner carrying one human-readable message. It is
//! created when a submission fails (or, for success notices, when one goes
//! through), shown at the top of the form, and removed either by the user or
//! by a fixed 5-second deadline - whichever comes first. Both paths go
//! through [`Notice::dismiss`], and dismissing twice is harmless, so a manual
//! close followed by the deadline firing late never double-removes anything.
//!
//! Deadlines are polled, never blocked on: the host calls
//! [`Notice::expire_if_due`] from its event loop and drops the notice once it
//! reports dismissed. There is no cancellation token; a scheduled deadline
//! always fires, it just becomes a no-op after a manual dismissal.

use std::time::{Duration, Instant};

/// How long a notice stays up without user interaction.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// A validation failure or other problem.
    #[default]
    Error,

    /// A confirmation that something went through.
    Success,
}

impl Severity {
    /// Returns the severity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// A transient, dismissible message banner.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    severity: Severity,
    posted_at: Instant,
    dismissed: bool,
}

impl Notice {
    /// Creates an error notice, timestamped now.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(message, Severity::Error)
    }

    /// Creates a success notice, timestamped now.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_severity(message, Severity::Success)
    }

    fn with_severity(message: impl Into<String>, severity: Severity) -> Self {
        let message = message.into();
        tracing::debug!(severity = severity.as_str(), %message, "notice posted");
        Self {
            message,
            severity,
            posted_at: Instant::now(),
            dismissed: false,
        }
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns true once the notice has been dismissed by either path.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Dismisses the notice. Safe to call any number of times.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Time left until auto-dismissal, or `None` once dismissed or overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.dismissed {
            return None;
        }
        let deadline = self.posted_at + NOTICE_TTL;
        deadline.checked_duration_since(now)
    }

    /// Fires the auto-dismiss deadline if it has elapsed.
    ///
    /// Returns true if this call dismissed the notice. Uses the same
    /// mechanism as a manual close, so a user dismissal beforehand simply
    /// makes this a no-op.
    pub fn expire_if_due(&mut self, now: Instant) -> bool {
        if self.dismissed {
            return false;
        }
        if now.duration_since(self.posted_at) >= NOTICE_TTL {
            self.dismiss();
            return true;
        }
        false
    }

    /// Returns true while the notice should be rendered.
    pub fn is_visible(&self) -> bool {
        !self.dismissed
    }
}
