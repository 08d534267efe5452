//! Simulated submit feedback (presentation pack).
//!
//! Reproduces the decorative submit sequence: when the user submits, the
//! button label becomes "Processing..." and the button is disabled; after a
//! fixed delay it flips to "Success!"; after a further delay the original
//! label returns and the button is re-enabled. Nothing is ever forwarded
//! anywhere; this sequence is presentation only.
//!
//! The two delays are modeled as one-shot deadlines with no cancellation
//! token. The host polls [`SubmitFeedback::tick`] from its event loop;
//! a deadline that has passed always takes effect, however late the poll.

use std::time::{Duration, Instant};

/// How long the "Processing..." phase lasts.
pub const PROCESSING_DURATION: Duration = Duration::from_secs(2);

/// How long the "Success!" phase lasts before the button is restored.
pub const SUCCESS_DURATION: Duration = Duration::from_millis(1500);

/// Phase of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackPhase {
    /// Button shows its original label and accepts clicks.
    #[default]
    Idle,

    /// Button disabled, showing the processing indicator.
    Processing,

    /// Button disabled, showing the success indicator.
    Success,
}

impl FeedbackPhase {
    /// Returns the phase as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Success => "success",
        }
    }
}

/// State machine driving the simulated submit sequence.
#[derive(Debug, Clone, Default)]
pub struct SubmitFeedback {
    phase: FeedbackPhase,
    /// When the current phase ends. `None` while idle.
    deadline: Option<Instant>,
}

impl SubmitFeedback {
    /// Creates an idle feedback machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> FeedbackPhase {
        self.phase
    }

    /// Returns true while the button should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase != FeedbackPhase::Idle
    }

    /// Starts the sequence. A no-op while a sequence is already running
    /// (the button is disabled, so re-entry should not happen anyway).
    pub fn begin(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }
        self.phase = FeedbackPhase::Processing;
        self.deadline = Some(now + PROCESSING_DURATION);
        tracing::debug!("simulated submit started");
    }

    /// Advances past any deadlines that have elapsed by `now`.
    ///
    /// Chained so that a late poll still lands in the right phase: if both
    /// deadlines are already behind `now`, the machine goes straight back to
    /// idle. Returns the phase after advancing.
    pub fn tick(&mut self, now: Instant) -> FeedbackPhase {
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            match self.phase {
                FeedbackPhase::Processing => {
                    self.phase = FeedbackPhase::Success;
                    // Success runs from the moment processing ended, not
                    // from whenever the host got around to polling.
                    self.deadline = Some(deadline + SUCCESS_DURATION);
                }
                FeedbackPhase::Success => {
                    self.phase = FeedbackPhase::Idle;
                    self.deadline = None;
                    tracing::debug!("simulated submit finished, button restored");
                }
                FeedbackPhase::Idle => {
                    self.deadline = None;
                }
            }
        }
        self.phase
    }

    /// Label the submit button should show, given its original label.
    pub fn label<'a>(&self, original: &'a str) -> &'a str {
        match self.phase {
            FeedbackPhase::Idle => original,
            FeedbackPhase::Processing => "Processing...",
            FeedbackPhase::Success => "Success!",
        }
    }

    /// The next pending deadline, for repaint scheduling. `None` while idle.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_original_label() {
        let feedback = SubmitFeedback::new();
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
        assert!(!feedback.is_busy());
        assert_eq!(feedback.label("Sign Up"), "Sign Up");
        assert_eq!(feedback.next_deadline(), None);
    }

    #[test]
    fn begin_enters_processing_and_disables() {
        let mut feedback = SubmitFeedback::new();
        let now = Instant::now();

        feedback.begin(now);
        assert_eq!(feedback.phase(), FeedbackPhase::Processing);
        assert!(feedback.is_busy());
        assert_eq!(feedback.label("Sign Up"), "Processing...");
    }

    #[test]
    fn processing_flips_to_success_after_two_seconds() {
        let mut feedback = SubmitFeedback::new();
        let now = Instant::now();
        feedback.begin(now);

        assert_eq!(
            feedback.tick(now + Duration::from_millis(1_999)),
            FeedbackPhase::Processing
        );
        assert_eq!(
            feedback.tick(now + PROCESSING_DURATION),
            FeedbackPhase::Success
        );
        assert_eq!(feedback.label("Sign Up"), "Success!");
        assert!(feedback.is_busy());
    }

    #[test]
    fn success_restores_after_further_delay() {
        let mut feedback = SubmitFeedback::new();
        let now = Instant::now();
        feedback.begin(now);

        feedback.tick(now + PROCESSING_DURATION);
        let restored_at = now + PROCESSING_DURATION + SUCCESS_DURATION;

        assert_eq!(
            feedback.tick(restored_at - Duration::from_millis(1)),
            FeedbackPhase::Success
        );
        assert_eq!(feedback.tick(restored_at), FeedbackPhase::Idle);
        assert_eq!(feedback.label("Sign Up"), "Sign Up");
        assert!(!feedback.is_busy());
    }

    #[test]
    fn late_poll_lands_back_on_idle() {
        let mut feedback = SubmitFeedback::new();
        let now = Instant::now();
        feedback.begin(now);

        // Both deadlines long gone by the time anyone polls.
        assert_eq!(
            feedback.tick(now + Duration::from_secs(60)),
            FeedbackPhase::Idle
        );
        assert_eq!(feedback.next_deadline(), None);
    }

    #[test]
    fn begin_is_noop_while_busy() {
        let mut feedback = SubmitFeedback::new();
        let now = Instant::now();
        feedback.begin(now);

        let deadline = feedback.next_deadline();
        feedback.begin(now + Duration::from_millis(500));
        // Re-entry must not reschedule the running sequence.
        assert_eq!(feedback.next_deadline(), deadline);
    }

    #[test]
    fn phase_strings() {
        assert_eq!(FeedbackPhase::Idle.as_str(), "idle");
        assert_eq!(FeedbackPhase::Processing.as_str(), "processing");
        assert_eq!(FeedbackPhase::Success.as_str(), "success");
    }
}
