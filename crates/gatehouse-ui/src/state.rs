//! Application state for the auth forms.
//!
//! Everything here is plain data driven by the event loop - the views read
//! and mutate it, and the tests exercise it without a live window. All
//! handlers run to completion on the UI thread; the deferred pieces (notice
//! auto-dismiss, simulated submit phases, entrance staggering) are deadlines
//! polled once per frame via [`AppState::tick`], never background threads.

use std::time::{Duration, Instant};

use gatehouse_core::entrance::Entrance;
use gatehouse_core::feedback::SubmitFeedback;
use gatehouse_core::notice::Notice;
use gatehouse_core::validation::{LoginAttempt, SignupAttempt};
use gatehouse_core::{ControllerConfig, FormController, SubmitOutcome};

/// Current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Login form.
    #[default]
    Login,
    /// Signup form.
    Signup,
}

impl View {
    /// Returns display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }
}

/// Application state for the auth window.
pub struct AppState {
    /// Form interaction controller (bindings, toggles, validation).
    pub controller: FormController,

    /// Current view.
    pub view: View,

    /// Live input buffer for the signup form; cloned as the submission
    /// snapshot at submit time.
    pub signup: SignupAttempt,

    /// Live input buffer for the login form.
    pub login: LoginAttempt,

    /// The active notice, at most one. A new failure replaces the old
    /// notice rather than stacking banners.
    notice: Option<Notice>,

    /// Simulated submit feedback (presentation pack).
    pub feedback: SubmitFeedback,

    /// Entrance clock for the current view, when the presentation pack is
    /// active and the view has not settled yet.
    entrance: Option<Entrance>,
}

impl AppState {
    /// Creates state with the given controller configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            controller: FormController::new(config),
            view: View::default(),
            signup: SignupAttempt::default(),
            login: LoginAttempt::default(),
            notice: None,
            feedback: SubmitFeedback::new(),
            entrance: None,
        }
    }

    /// True if the presentation pack is active.
    pub fn presentation_enabled(&self) -> bool {
        self.controller.config().presentation
    }

    // ==================== View switching ====================

    /// Switches views, clearing the notice and restarting the entrance.
    pub fn switch_view(&mut self, view: View, now: Instant) {
        if self.view == view {
            return;
        }
        self.view = view;
        self.notice = None;
        self.entrance = None;
        self.begin_entrance(now);
        tracing::debug!(view = view.as_str(), "switched view");
    }

    /// Starts the entrance clock if the presentation pack wants one.
    pub fn begin_entrance(&mut self, now: Instant) {
        if self.presentation_enabled() && self.entrance.is_none() {
            self.entrance = Some(Entrance::begin(now));
        }
    }

    /// Entrance progress for the named field group. The group's stagger
    /// slot comes from its position in the configured `field_groups`; a
    /// group missing from the configuration does not animate. Pinned at
    /// 1.0 when the presentation pack is off (fields are simply there).
    pub fn entrance_progress(&self, group: &str, now: Instant) -> f32 {
        match (self.entrance, self.controller.field_group_index(group)) {
            (Some(entrance), Some(index)) => entrance.progress(index, now),
            _ => 1.0,
        }
    }

    /// True while the entrance is still animating any configured group.
    pub fn entrance_pending(&self, now: Instant) -> bool {
        match self.entrance {
            Some(entrance) => {
                !entrance.is_settled(self.controller.field_group_count(), now)
            }
            None => false,
        }
    }

    // ==================== Notices ====================

    /// The notice to render, if one is up.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replaces the active notice.
    pub fn post_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Manual close affordance.
    pub fn dismiss_notice(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.dismiss();
        }
    }

    // ==================== Submissions ====================

    /// Handles the signup form's submit action.
    pub fn submit_signup(&mut self, now: Instant) {
        if self.feedback.is_busy() {
            return;
        }

        match self.controller.submit_signup(&self.signup) {
            SubmitOutcome::Blocked(notice) => self.post_notice(notice),
            SubmitOutcome::Proceed => {
                self.signup.password.clear();
                self.signup.confirm_password.clear();

                if self.presentation_enabled() {
                    // The presentation pack plays its simulated sequence and
                    // deliberately forwards nothing.
                    self.feedback.begin(now);
                } else {
                    // Mirror the classic flow: back to login after signup.
                    self.switch_view(View::Login, now);
                }
                self.post_notice(self.controller.signup_success_notice());
            }
        }
    }

    /// Handles the login form's submit action.
    pub fn submit_login(&mut self, now: Instant) {
        if self.feedback.is_busy() {
            return;
        }

        match self.controller.submit_login(&self.login) {
            SubmitOutcome::Blocked(notice) => self.post_notice(notice),
            SubmitOutcome::Proceed => {
                if self.presentation_enabled() {
                    self.feedback.begin(now);
                }
                tracing::info!("login submission proceeds to its configured target");
            }
        }
    }

    // ==================== Frame tick ====================

    /// Polls all pending deadlines. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.feedback.tick(now);

        if let Some(notice) = &mut self.notice {
            notice.expire_if_due(now);
            if notice.is_dismissed() {
                self.notice = None;
            }
        }
    }

    /// How soon the host should repaint to hit the next deadline, or `None`
    /// when nothing is pending.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.entrance_pending(now) {
            // Animating: repaint continuously.
            return Some(Duration::ZERO);
        }

        let notice_deadline = self.notice.as_ref().and_then(|n| n.remaining(now));
        let feedback_deadline = self
            .feedback
            .next_deadline()
            .map(|d| d.saturating_duration_since(now));

        match (notice_deadline, feedback_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::feedback::FeedbackPhase;
    use gatehouse_core::notice::{Severity, NOTICE_TTL};

    fn validation_only() -> ControllerConfig {
        ControllerConfig {
            presentation: false,
            ..ControllerConfig::default()
        }
    }

    fn fill_good_signup(state: &mut AppState) {
        state.signup = SignupAttempt {
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "1234567890".into(),
            password: "Abcd1234".into(),
            confirm_password: "Abcd1234".into(),
        };
    }

    // ==================== Submissions ====================

    #[test]
    fn failed_signup_posts_error_notice() {
        let mut state = AppState::new(validation_only());
        state.switch_view(View::Signup, Instant::now());
        fill_good_signup(&mut state);
        state.signup.password = "short".into();

        state.submit_signup(Instant::now());

        let notice = state.notice().expect("failure posts a notice");
        assert_eq!(notice.severity(), Severity::Error);
        assert_eq!(
            notice.message(),
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn new_failure_replaces_the_previous_notice() {
        let mut state = AppState::new(validation_only());
        state.switch_view(View::Signup, Instant::now());
        fill_good_signup(&mut state);

        state.signup.password = "short".into();
        state.submit_signup(Instant::now());

        state.signup.password = "abcd1234".into();
        state.signup.confirm_password = "abcd1234".into();
        state.submit_signup(Instant::now());

        assert_eq!(
            state.notice().unwrap().message(),
            "Password must contain at least one uppercase letter."
        );
    }

    #[test]
    fn passing_signup_without_presentation_returns_to_login() {
        let now = Instant::now();
        let mut state = AppState::new(validation_only());
        state.switch_view(View::Signup, now);
        fill_good_signup(&mut state);

        state.submit_signup(now);

        assert_eq!(state.view, View::Login);
        let notice = state.notice().expect("success posts a notice");
        assert_eq!(notice.severity(), Severity::Success);
        assert!(state.signup.password.is_empty());
        assert!(state.signup.confirm_password.is_empty());
    }

    #[test]
    fn passing_signup_with_presentation_plays_feedback() {
        let now = Instant::now();
        let mut state = AppState::new(ControllerConfig::default());
        state.switch_view(View::Signup, now);
        fill_good_signup(&mut state);

        state.submit_signup(now);

        assert_eq!(state.view, View::Signup);
        assert_eq!(state.feedback.phase(), FeedbackPhase::Processing);
    }

    #[test]
    fn submit_is_ignored_while_feedback_runs() {
        let now = Instant::now();
        let mut state = AppState::new(ControllerConfig::default());
        state.switch_view(View::Signup, now);
        fill_good_signup(&mut state);
        state.submit_signup(now);

        // Break the form and mash submit: the running sequence wins.
        state.signup.password = "short".into();
        state.submit_signup(now);
        assert_eq!(state.notice().unwrap().severity(), Severity::Success);
    }

    #[test]
    fn failed_login_posts_fill_in_all_fields() {
        let mut state = AppState::new(validation_only());
        state.login.email = "user@example.com".into();

        state.submit_login(Instant::now());

        assert_eq!(state.notice().unwrap().message(), "Please fill in all fields.");
    }

    #[test]
    fn passing_login_posts_no_notice() {
        let mut state = AppState::new(validation_only());
        state.login.email = "user@example.com".into();
        state.login.password = "secret".into();

        state.submit_login(Instant::now());

        assert!(state.notice().is_none());
    }

    // ==================== Notice lifecycle ====================

    #[test]
    fn notice_auto_dismisses_on_tick_after_ttl() {
        let now = Instant::now();
        let mut state = AppState::new(validation_only());
        state.submit_login(now); // empty fields -> error notice

        state.tick(now + Duration::from_secs(2));
        assert!(state.notice().is_some());

        state.tick(now + NOTICE_TTL + Duration::from_millis(50));
        assert!(state.notice().is_none());
    }

    #[test]
    fn manual_dismissal_removes_on_next_tick() {
        let now = Instant::now();
        let mut state = AppState::new(validation_only());
        state.submit_login(now);

        state.dismiss_notice();
        state.tick(now);
        assert!(state.notice().is_none());

        // The stale deadline firing later must not resurrect anything.
        state.tick(now + NOTICE_TTL + Duration::from_secs(1));
        assert!(state.notice().is_none());
    }

    // ==================== View switching & entrance ====================

    #[test]
    fn switching_views_clears_notice_and_restarts_entrance() {
        let now = Instant::now();
        let mut state = AppState::new(ControllerConfig::default());
        state.begin_entrance(now);
        state.submit_login(now); // error notice up

        let later = now + Duration::from_secs(10);
        state.switch_view(View::Signup, later);

        assert!(state.notice().is_none());
        // Fresh entrance: first configured group just started again.
        assert!(state.entrance_progress("full-name", later) < 1.0);
        assert!(state.entrance_pending(later));
    }

    #[test]
    fn entrance_is_skipped_without_presentation_pack() {
        let now = Instant::now();
        let mut state = AppState::new(validation_only());
        state.begin_entrance(now);

        assert_eq!(state.entrance_progress("confirm-password", now), 1.0);
        assert!(!state.entrance_pending(now));
    }

    #[test]
    fn entrance_staggering_follows_configured_field_groups() {
        let now = Instant::now();
        let config = ControllerConfig {
            field_groups: vec!["email".into(), "password".into()],
            ..ControllerConfig::default()
        };
        let mut state = AppState::new(config);
        state.begin_entrance(now);

        // Configured groups stagger by list position: the later slot lags.
        let later = now + Duration::from_millis(150);
        assert!(
            state.entrance_progress("email", later)
                > state.entrance_progress("password", later)
        );

        // A group absent from the configuration does not animate at all.
        assert_eq!(state.entrance_progress("phone", now), 1.0);

        // Settling tracks the configured count, not a per-view constant:
        // two groups are done at 100ms + 500ms, well before five would be.
        assert!(state.entrance_pending(now + Duration::from_millis(599)));
        assert!(!state.entrance_pending(now + Duration::from_millis(601)));
    }

    // ==================== Repaint scheduling ====================

    #[test]
    fn repaint_is_idle_when_nothing_pends() {
        let state = AppState::new(validation_only());
        assert_eq!(state.repaint_after(Instant::now()), None);
    }

    #[test]
    fn repaint_tracks_notice_deadline() {
        let mut state = AppState::new(validation_only());
        state.submit_login(Instant::now());

        // Polling after the notice was posted: the wait never exceeds the TTL.
        let wait = state.repaint_after(Instant::now()).expect("notice pending");
        assert!(wait <= NOTICE_TTL);
    }

    #[test]
    fn repaint_is_continuous_while_animating() {
        let now = Instant::now();
        let mut state = AppState::new(ControllerConfig::default());
        state.begin_entrance(now);

        assert_eq!(state.repaint_after(now), Some(Duration::ZERO));
    }
}
