// SPDX-License-Identifier: MPL-2.0
//! The snackbar entity and its presentation state machine.
//!
//! A [`Snackbar`] is single-use: `Created → Showing → Dismissing → Dismissed`,
//! never backwards. `Dismissing` covers the exit animation and is skipped when
//! dismissal is not animated. Every lifecycle method is total over the states;
//! calls that don't apply in the current state do nothing.
//!
//! Time is passed in explicitly so the host decides what "now" is (the Iced
//! tick in production, a synthetic clock in tests).

use super::duration::{AnimationDuration, DisplayDuration};
use super::executor::Executor;
use super::style::{ActionState, SnackbarStyle};
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Unique identifier for a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackbarId(u64);

impl SnackbarId {
    /// Creates a new unique snackbar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for SnackbarId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnackbarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snackbar-{}", self.0)
    }
}

/// Where a snackbar is in its single-use lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    #[default]
    Created,
    Showing,
    Dismissing,
    Dismissed,
}

/// Why a snackbar left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-dismiss timer expired.
    Timeout,
    /// The host asked for it.
    Explicit,
    /// The user tapped the body.
    Tapped,
    /// Another snackbar took its place in the container.
    Replaced,
    /// The user pressed a short-running action.
    Action,
}

impl DismissReason {
    /// The dismissal callback fires for every reason except a short-running
    /// action press, which claims the terminal event for the action callback.
    #[must_use]
    pub fn fires_dismissal_callback(self) -> bool {
        !matches!(self, DismissReason::Action)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DismissReason::Timeout => "timeout",
            DismissReason::Explicit => "explicit",
            DismissReason::Tapped => "tapped",
            DismissReason::Replaced => "replaced",
            DismissReason::Action => "action",
        }
    }
}

/// What pressing the action button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing happened: no action, not showing, or already pressed.
    Ignored,
    /// The callback was handed to the executor; the snackbar stays up.
    Dispatched,
    /// The callback ran and the snackbar started dismissing.
    InvokedAndDismissed,
}

/// Read-only view of a snackbar handed to its callbacks.
///
/// Owned and `Send` so long-running callbacks can take it to another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackbarInfo {
    pub id: SnackbarId,
    pub message: String,
    pub action_text: Option<String>,
}

/// Callback invoked with the snackbar that triggered it.
pub type Callback = Arc<dyn Fn(&SnackbarInfo) + Send + Sync>;

/// A transient notification with an optional action.
pub struct Snackbar {
    id: SnackbarId,
    message: String,
    action_text: Option<String>,
    duration: DisplayDuration,
    action_is_long_running: bool,
    can_tap_to_dismiss: bool,
    action_callback: Option<Callback>,
    dismissal_callback: Option<Callback>,
    state: PresentationState,
    action_was_invoked: bool,
    shown_at: Option<Instant>,
    /// Pending auto-dismiss deadline. `None` once fired or invalidated.
    deadline: Option<Instant>,
    dismiss_started_at: Option<Instant>,
    dismiss_reason: Option<DismissReason>,
    style: SnackbarStyle,
}

impl fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snackbar")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("action_text", &self.action_text)
            .field("duration", &self.duration)
            .field("state", &self.state)
            .field("action_was_invoked", &self.action_was_invoked)
            .field("dismiss_reason", &self.dismiss_reason)
            .finish_non_exhaustive()
    }
}

impl Snackbar {
    /// Creates a snackbar in the `Created` state.
    ///
    /// An empty or absent `action_text` means no action button is shown.
    /// A zero `duration` keeps the snackbar up until it is dismissed.
    pub fn new(
        message: impl Into<String>,
        action_text: Option<&str>,
        duration: impl Into<DisplayDuration>,
        action_callback: Option<Callback>,
        dismissal_callback: Option<Callback>,
    ) -> Self {
        Self {
            id: SnackbarId::new(),
            message: message.into(),
            action_text: action_text
                .filter(|text| !text.is_empty())
                .map(str::to_owned),
            duration: duration.into(),
            action_is_long_running: false,
            can_tap_to_dismiss: false,
            action_callback,
            dismissal_callback,
            state: PresentationState::Created,
            action_was_invoked: false,
            shown_at: None,
            deadline: None,
            dismiss_started_at: None,
            dismiss_reason: None,
            style: SnackbarStyle::default(),
        }
    }

    /// Creates a message-only snackbar; configure the rest with the builder methods.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new(message, None, DisplayDuration::INDEFINITE, None, None)
    }

    // ----------------------------------------------------------------------
    // Builder
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn action(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.action_text = (!text.is_empty()).then_some(text);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<DisplayDuration>) -> Self {
        self.set_duration(duration);
        self
    }

    #[must_use]
    pub fn long_running(mut self, long_running: bool) -> Self {
        self.action_is_long_running = long_running;
        self
    }

    #[must_use]
    pub fn tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.set_can_tap_to_dismiss(enabled);
        self
    }

    #[must_use]
    pub fn on_action(mut self, callback: impl Fn(&SnackbarInfo) + Send + Sync + 'static) -> Self {
        self.action_callback = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn on_dismiss(
        mut self,
        callback: impl Fn(&SnackbarInfo) + Send + Sync + 'static,
    ) -> Self {
        self.dismissal_callback = Some(Arc::new(callback));
        self
    }

    // ----------------------------------------------------------------------
    // Mutable properties
    // ----------------------------------------------------------------------

    /// Changes the on-screen duration. Ignored once the snackbar has been shown.
    pub fn set_duration(&mut self, duration: impl Into<DisplayDuration>) {
        if self.state == PresentationState::Created {
            self.duration = duration.into();
        }
    }

    /// Changes tap-to-dismiss. Ignored once the snackbar has been shown.
    pub fn set_can_tap_to_dismiss(&mut self, enabled: bool) {
        if self.state == PresentationState::Created {
            self.can_tap_to_dismiss = enabled;
        }
    }

    /// Takes effect on the next action press.
    pub fn set_action_is_long_running(&mut self, long_running: bool) {
        self.action_is_long_running = long_running;
    }

    pub fn set_action_callback(&mut self, callback: Option<Callback>) {
        self.action_callback = callback;
    }

    pub fn set_dismissal_callback(&mut self, callback: Option<Callback>) {
        self.dismissal_callback = callback;
    }

    pub fn set_message_text_color(&mut self, color: Color) {
        self.style.set_message_color(color);
    }

    pub fn set_action_text_color(&mut self, color: Color, state: ActionState) {
        self.style.set_action_color(color, state);
    }

    pub(crate) fn style_mut(&mut self) -> &mut SnackbarStyle {
        &mut self.style
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn action_text(&self) -> Option<&str> {
        self.action_text.as_deref()
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action_text.is_some()
    }

    #[must_use]
    pub fn display_duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn action_is_long_running(&self) -> bool {
        self.action_is_long_running
    }

    #[must_use]
    pub fn can_tap_to_dismiss(&self) -> bool {
        self.can_tap_to_dismiss
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.state == PresentationState::Showing
    }

    #[must_use]
    pub fn action_was_invoked(&self) -> bool {
        self.action_was_invoked
    }

    #[must_use]
    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        self.dismiss_reason
    }

    #[must_use]
    pub fn style(&self) -> &SnackbarStyle {
        &self.style
    }

    /// Snapshot passed to callbacks.
    #[must_use]
    pub fn info(&self) -> SnackbarInfo {
        SnackbarInfo {
            id: self.id,
            message: self.message.clone(),
            action_text: self.action_text.clone(),
        }
    }

    /// How visible the snackbar is at `now`, from 0.0 (off screen) to 1.0.
    #[must_use]
    pub fn visibility(
        &self,
        now: Instant,
        enter: AnimationDuration,
        exit: AnimationDuration,
    ) -> f32 {
        match (self.state, self.shown_at, self.dismiss_started_at) {
            (PresentationState::Showing, Some(shown_at), _) => {
                enter.fraction(now.saturating_duration_since(shown_at))
            }
            (PresentationState::Dismissing, _, Some(started)) => {
                1.0 - exit.fraction(now.saturating_duration_since(started))
            }
            _ => 0.0,
        }
    }

    // ----------------------------------------------------------------------
    // Lifecycle
    // ----------------------------------------------------------------------

    /// Presents the snackbar and arms its timer.
    ///
    /// Returns `false` (and does nothing) unless the snackbar is `Created`.
    /// Hosts normally go through `Container::show`, which also enforces a
    /// single snackbar per container.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.state != PresentationState::Created {
            return false;
        }
        self.state = PresentationState::Showing;
        self.shown_at = Some(now);
        self.deadline = self.duration.as_duration().map(|delay| now + delay);
        true
    }

    /// Animated dismissal.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        self.dismiss_animated(now, true)
    }

    /// Removes the snackbar from the screen.
    ///
    /// Only acts while `Showing`; returns whether anything happened. The
    /// dismissal callback fires when the snackbar reaches `Dismissed`, right
    /// away when `animated` is false, after the exit animation otherwise.
    pub fn dismiss_animated(&mut self, now: Instant, animated: bool) -> bool {
        self.dismiss_with(now, DismissReason::Explicit, animated)
    }

    /// Handles a press on the action button.
    ///
    /// A long-running action is submitted to `executor` and the snackbar
    /// stays up. Any other action runs inline and the snackbar dismisses
    /// itself without firing the dismissal callback.
    pub fn press_action(&mut self, now: Instant, executor: &dyn Executor) -> ActionOutcome {
        if self.state != PresentationState::Showing
            || !self.has_action()
            || self.action_was_invoked
        {
            return ActionOutcome::Ignored;
        }
        self.action_was_invoked = true;

        if self.action_is_long_running {
            if let Some(callback) = &self.action_callback {
                let callback = Arc::clone(callback);
                let info = self.info();
                executor.spawn(Box::new(move || callback(&info)));
            }
            return ActionOutcome::Dispatched;
        }

        if let Some(callback) = &self.action_callback {
            callback(&self.info());
        }
        self.begin_dismissal(now, DismissReason::Action, true);
        ActionOutcome::InvokedAndDismissed
    }

    /// Handles a tap on the body, outside the action button.
    ///
    /// Dismisses (animated) when tap-to-dismiss is enabled; never runs the action.
    pub fn tap_body(&mut self, now: Instant) -> bool {
        if !self.can_tap_to_dismiss {
            return false;
        }
        self.dismiss_with(now, DismissReason::Tapped, true)
    }

    /// Advances timers and animations to `now`.
    ///
    /// Fires an expired auto-dismiss timer and finishes an exit animation that
    /// has run its course. Returns true if the state changed.
    pub fn tick(&mut self, now: Instant, exit: AnimationDuration) -> bool {
        let before = self.state;

        if self.state == PresentationState::Showing
            && self.deadline.is_some_and(|deadline| now >= deadline)
        {
            self.begin_dismissal(now, DismissReason::Timeout, true);
        }

        if self.state == PresentationState::Dismissing {
            let started = self.dismiss_started_at.unwrap_or(now);
            if now.saturating_duration_since(started) >= exit.as_duration() {
                self.finish();
            }
        }

        self.state != before
    }

    /// Whether anything changes with time after `now`: the enter animation,
    /// a pending auto-dismiss deadline, or the exit animation.
    #[must_use]
    pub fn needs_ticks(&self, now: Instant, enter: AnimationDuration) -> bool {
        match self.state {
            PresentationState::Showing => {
                let entering = self.shown_at.is_some_and(|shown_at| {
                    now.saturating_duration_since(shown_at) < enter.as_duration()
                });
                entering || self.deadline.is_some()
            }
            PresentationState::Dismissing => true,
            PresentationState::Created | PresentationState::Dismissed => false,
        }
    }

    pub(crate) fn dismiss_with(&mut self, now: Instant, reason: DismissReason, animated: bool) -> bool {
        if self.state != PresentationState::Showing {
            return false;
        }
        self.begin_dismissal(now, reason, animated);
        true
    }

    /// Cuts an exit animation short.
    pub(crate) fn finish_now(&mut self) -> bool {
        if self.state != PresentationState::Dismissing {
            return false;
        }
        self.finish();
        true
    }

    fn begin_dismissal(&mut self, now: Instant, reason: DismissReason, animated: bool) {
        self.deadline = None;
        self.dismiss_reason = Some(reason);
        if animated {
            self.state = PresentationState::Dismissing;
            self.dismiss_started_at = Some(now);
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.state = PresentationState::Dismissed;
        let fires = self
            .dismiss_reason
            .is_some_and(DismissReason::fires_dismissal_callback);
        if fires {
            if let Some(callback) = &self.dismissal_callback {
                callback(&self.info());
            }
        }
    }
}
