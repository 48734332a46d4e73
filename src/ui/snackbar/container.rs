// SPDX-License-Identifier: MPL-2.0
//! Single-occupancy host for snackbars.
//!
//! A `Container` is owned by whatever part of the application state renders
//! the snackbar layer. It holds at most one snackbar; showing a new one
//! dismisses the current occupant first, without animation, so two snackbars
//! are never `Showing` in the same container.

use super::duration::AnimationDuration;
use super::executor::Executor;
use super::model::{ActionOutcome, DismissReason, PresentationState, Snackbar, SnackbarId};
use super::style::SnackbarStyle;
use crate::config::{Config, DEFAULT_ENTER_ANIMATION_MS, DEFAULT_EXIT_ANIMATION_MS, TICK_INTERVAL_MS};
use crate::diagnostics::{DiagnosticsHandle, SnackbarEvent};
use iced::{time, Element, Subscription};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Messages produced by the snackbar layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// The action button was pressed.
    ActionPressed(SnackbarId),
    /// The body (outside the action button) was tapped.
    BodyTapped(SnackbarId),
    /// Dismiss a specific snackbar, animated.
    Dismiss(SnackbarId),
    /// Periodic tick driving timers and animations.
    Tick(Instant),
}

pub struct Container {
    occupant: Option<Snackbar>,
    executor: Arc<dyn Executor>,
    enter_animation: AnimationDuration,
    exit_animation: AnimationDuration,
    /// Time of the last lifecycle event or tick, used for rendering.
    now: Instant,
    diagnostics: Option<DiagnosticsHandle>,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("occupant", &self.occupant)
            .field("enter_animation", &self.enter_animation)
            .field("exit_animation", &self.exit_animation)
            .finish_non_exhaustive()
    }
}

impl Container {
    /// Creates an empty container that runs long-running actions on `executor`.
    #[must_use]
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self {
            occupant: None,
            executor,
            enter_animation: AnimationDuration::from_millis(DEFAULT_ENTER_ANIMATION_MS),
            exit_animation: AnimationDuration::from_millis(DEFAULT_EXIT_ANIMATION_MS),
            now: Instant::now(),
            diagnostics: None,
        }
    }

    /// Creates an empty container with animation lengths taken from `config`.
    #[must_use]
    pub fn with_config(executor: Arc<dyn Executor>, config: &Config) -> Self {
        Self::new(executor).animations(config.enter_animation(), config.exit_animation())
    }

    #[must_use]
    pub fn animations(mut self, enter: AnimationDuration, exit: AnimationDuration) -> Self {
        self.enter_animation = enter;
        self.exit_animation = exit;
        self
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    // ----------------------------------------------------------------------
    // Lifecycle
    // ----------------------------------------------------------------------

    /// Presents `snackbar`, replacing whatever is on screen.
    ///
    /// Returns `false` if the snackbar was already past `Created`; the
    /// current occupant is left alone in that case.
    pub fn show(&mut self, snackbar: Snackbar) -> bool {
        self.show_at(snackbar, Instant::now())
    }

    pub fn show_at(&mut self, mut snackbar: Snackbar, now: Instant) -> bool {
        if snackbar.state() != PresentationState::Created {
            return false;
        }
        self.now = now;

        if let Some(mut previous) = self.occupant.take() {
            let replaced = previous.dismiss_with(now, DismissReason::Replaced, false);
            previous.finish_now();
            if replaced {
                self.log(SnackbarEvent::Replaced {
                    previous: previous.id(),
                    next: snackbar.id(),
                });
            }
            self.log_dismissal(&previous);
        }

        snackbar.show(now);
        self.log(SnackbarEvent::Shown {
            id: snackbar.id(),
            duration_secs: snackbar.display_duration().as_secs_f64(),
            has_action: snackbar.has_action(),
        });
        self.occupant = Some(snackbar);
        true
    }

    /// Animated dismissal of the snackbar with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: SnackbarId) -> bool {
        self.dismiss_animated_at(id, true, Instant::now())
    }

    pub fn dismiss_animated(&mut self, id: SnackbarId, animated: bool) -> bool {
        self.dismiss_animated_at(id, animated, Instant::now())
    }

    pub fn dismiss_animated_at(&mut self, id: SnackbarId, animated: bool, now: Instant) -> bool {
        self.now = now;
        let dismissed = match self.occupant_mut(id) {
            Some(snackbar) => snackbar.dismiss_animated(now, animated),
            None => false,
        };
        self.settle();
        dismissed
    }

    /// Dismisses whatever is showing.
    pub fn dismiss_current(&mut self, animated: bool) -> bool {
        match self.occupant.as_ref().map(Snackbar::id) {
            Some(id) => self.dismiss_animated(id, animated),
            None => false,
        }
    }

    pub fn press_action_at(&mut self, id: SnackbarId, now: Instant) -> ActionOutcome {
        self.now = now;
        let executor = Arc::clone(&self.executor);
        let Some(snackbar) = self.occupant_mut(id) else {
            return ActionOutcome::Ignored;
        };
        let outcome = snackbar.press_action(now, executor.as_ref());
        let long_running = snackbar.action_is_long_running();
        if outcome != ActionOutcome::Ignored {
            self.log(SnackbarEvent::ActionInvoked { id, long_running });
        }
        self.settle();
        outcome
    }

    pub fn tap_body_at(&mut self, id: SnackbarId, now: Instant) -> bool {
        self.now = now;
        let tapped = match self.occupant_mut(id) {
            Some(snackbar) => snackbar.tap_body(now),
            None => false,
        };
        self.settle();
        tapped
    }

    /// Advances timers and animations.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        let exit = self.exit_animation;
        if let Some(snackbar) = self.occupant.as_mut() {
            snackbar.tick(now, exit);
        }
        self.settle();
    }

    /// Routes a snackbar message. Messages for stale snackbars are ignored.
    pub fn update(&mut self, message: &Message) {
        match message {
            Message::ActionPressed(id) => {
                self.press_action_at(*id, Instant::now());
            }
            Message::BodyTapped(id) => {
                self.tap_body_at(*id, Instant::now());
            }
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    // ----------------------------------------------------------------------
    // Rendering
    // ----------------------------------------------------------------------

    /// Ticks only while an animation or a timer is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.wants_ticks() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the snackbar layer, meant to sit on top of the app content.
    pub fn view(&self) -> Element<'_, Message> {
        super::view::overlay(self)
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    /// The snackbar on screen, including one that is animating out.
    #[must_use]
    pub fn current(&self) -> Option<&Snackbar> {
        self.occupant.as_ref()
    }

    /// Colors of the snackbar on screen, which can change at any stage.
    ///
    /// Lifecycle changes go through the container so it can detach and log.
    pub fn current_style_mut(&mut self) -> Option<&mut SnackbarStyle> {
        self.occupant.as_mut().map(Snackbar::style_mut)
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Returns the id of the snackbar in the `Showing` state, if any.
    #[must_use]
    pub fn showing(&self) -> Option<SnackbarId> {
        self.occupant
            .as_ref()
            .filter(|snackbar| snackbar.is_showing())
            .map(Snackbar::id)
    }

    /// Whether the occupant still changes with time, as of the last event.
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.occupant
            .as_ref()
            .is_some_and(|snackbar| snackbar.needs_ticks(self.now, self.enter_animation))
    }

    /// Visibility of the occupant at the last tick, from 0.0 to 1.0.
    #[must_use]
    pub fn visibility(&self) -> f32 {
        self.occupant.as_ref().map_or(0.0, |snackbar| {
            snackbar.visibility(self.now, self.enter_animation, self.exit_animation)
        })
    }

    fn occupant_mut(&mut self, id: SnackbarId) -> Option<&mut Snackbar> {
        self.occupant
            .as_mut()
            .filter(|snackbar| snackbar.id() == id)
    }

    /// Detaches an occupant that reached `Dismissed`.
    fn settle(&mut self) {
        let finished = self
            .occupant
            .as_ref()
            .is_some_and(|snackbar| snackbar.state() == PresentationState::Dismissed);
        if finished {
            if let Some(snackbar) = self.occupant.take() {
                self.log_dismissal(&snackbar);
            }
        }
    }

    fn log_dismissal(&self, snackbar: &Snackbar) {
        if let Some(reason) = snackbar.dismiss_reason() {
            self.log(SnackbarEvent::Dismissed {
                id: snackbar.id(),
                reason,
            });
        }
    }

    fn log(&self, event: SnackbarEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::ui::snackbar::executor::InlineExecutor;
    use crate::ui::snackbar::{DisplayDuration, SnackbarInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn container() -> Container {
        Container::new(Arc::new(InlineExecutor))
            .animations(AnimationDuration::NONE, AnimationDuration::from_millis(100))
    }

    fn counting(message: &str, secs: f64) -> (Snackbar, Arc<AtomicUsize>) {
        let dismissals = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&dismissals);
        let snackbar = Snackbar::with_message(message)
            .action("Undo")
            .duration(DisplayDuration::from_secs_f64(secs))
            .on_dismiss(move |_: &SnackbarInfo| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        (snackbar, dismissals)
    }

    #[test]
    fn new_container_is_empty() {
        let container = container();
        assert!(!container.is_occupied());
        assert!(container.showing().is_none());
        assert_eq!(container.visibility(), 0.0);
    }

    #[test]
    fn show_installs_occupant() {
        let now = Instant::now();
        let mut container = container();
        let (snackbar, _) = counting("hello", 5.0);
        let id = snackbar.id();

        assert!(container.show_at(snackbar, now));
        assert_eq!(container.showing(), Some(id));
    }

    #[test]
    fn show_rejects_already_presented_snackbar() {
        let now = Instant::now();
        let mut container = container();
        let mut used = Snackbar::with_message("used");
        used.show(now);
        assert!(!container.show_at(used, now));
        assert!(!container.is_occupied());
    }

    #[test]
    fn replacement_dismisses_previous_first() {
        let now = Instant::now();
        let mut container = container();
        let (first, first_dismissals) = counting("first", 0.0);
        let (second, second_dismissals) = counting("second", 0.0);
        let second_id = second.id();

        container.show_at(first, now);
        container.show_at(second, now + Duration::from_secs(1));

        assert_eq!(first_dismissals.load(Ordering::SeqCst), 1);
        assert_eq!(second_dismissals.load(Ordering::SeqCst), 0);
        assert_eq!(container.showing(), Some(second_id));
    }

    #[test]
    fn replacement_cuts_exit_animation_short() {
        let now = Instant::now();
        let mut container = container();
        let (first, first_dismissals) = counting("first", 0.0);
        let first_id = first.id();
        let (second, _) = counting("second", 0.0);

        container.show_at(first, now);
        container.dismiss_animated_at(first_id, true, now);
        assert_eq!(first_dismissals.load(Ordering::SeqCst), 0, "still animating");

        container.show_at(second, now + Duration::from_millis(10));
        assert_eq!(first_dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn animated_dismiss_detaches_after_exit_animation() {
        let now = Instant::now();
        let mut container = container();
        let (snackbar, dismissals) = counting("bye", 0.0);
        let id = snackbar.id();
        container.show_at(snackbar, now);

        assert!(container.dismiss_animated_at(id, true, now));
        assert!(container.is_occupied());
        assert!(container.showing().is_none());

        container.tick(now + Duration::from_millis(100));
        assert!(!container.is_occupied());
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stale_ids_are_ignored() {
        let now = Instant::now();
        let mut container = container();
        let (old, old_dismissals) = counting("old", 0.0);
        let old_id = old.id();
        let (new, new_dismissals) = counting("new", 0.0);
        container.show_at(old, now);
        container.show_at(new, now);

        assert!(!container.dismiss_animated_at(old_id, false, now));
        assert_eq!(
            container.press_action_at(old_id, now),
            ActionOutcome::Ignored
        );
        assert!(!container.tap_body_at(old_id, now));
        assert_eq!(old_dismissals.load(Ordering::SeqCst), 1);
        assert_eq!(new_dismissals.load(Ordering::SeqCst), 0);
        assert!(container.showing().is_some());
    }

    #[test]
    fn timer_expiry_empties_container() {
        let now = Instant::now();
        let mut container = container();
        let (snackbar, dismissals) = counting("timed", 5.0);
        container.show_at(snackbar, now);

        container.tick(now + Duration::from_secs(5));
        assert!(container.showing().is_none());
        container.tick(now + Duration::from_millis(5_100));
        assert!(!container.is_occupied());
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_routes_tick_messages() {
        let now = Instant::now();
        let mut container = container();
        let (snackbar, _) = counting("timed", 1.0);
        container.show_at(snackbar, now);
        container.update(&Message::Tick(now + Duration::from_secs(1)));
        assert!(container.showing().is_none());
    }

    #[test]
    fn indefinite_snackbar_stops_ticking_once_entered() {
        let now = Instant::now();
        let mut container = Container::new(Arc::new(InlineExecutor)).animations(
            AnimationDuration::from_millis(100),
            AnimationDuration::from_millis(100),
        );
        let snackbar = Snackbar::with_message("offline");
        let id = snackbar.id();
        assert!(!container.wants_ticks());

        container.show_at(snackbar, now);
        assert!(container.wants_ticks(), "enter animation running");

        container.tick(now + Duration::from_millis(100));
        assert!(!container.wants_ticks());
        assert_eq!(container.showing(), Some(id));

        container.dismiss_animated_at(id, true, now + Duration::from_secs(60));
        assert!(container.wants_ticks(), "exit animation running");

        container.tick(now + Duration::from_millis(60_100));
        assert!(!container.wants_ticks());
        assert!(!container.is_occupied());
    }

    #[test]
    fn timed_snackbar_ticks_until_its_deadline() {
        let now = Instant::now();
        let mut container = container();
        let (snackbar, _) = counting("timed", 2.0);
        container.show_at(snackbar, now);

        container.tick(now + Duration::from_secs(1));
        assert!(container.wants_ticks());
        container.tick(now + Duration::from_secs(2));
        assert!(container.wants_ticks(), "exit animation running");
        container.tick(now + Duration::from_millis(2_100));
        assert!(!container.wants_ticks());
    }

    #[test]
    fn dismiss_current_on_empty_container_is_noop() {
        let mut container = container();
        assert!(!container.dismiss_current(false));
    }

    #[test]
    fn current_style_can_change_while_showing() {
        let now = Instant::now();
        let mut container = container();
        container.show_at(Snackbar::with_message("styled"), now);
        if let Some(style) = container.current_style_mut() {
            style.set_message_color(iced::Color::WHITE);
        }
        let color = container
            .current()
            .and_then(|snackbar| snackbar.style().message_color());
        assert_eq!(color, Some(iced::Color::WHITE));
    }

    #[test]
    fn lifecycle_is_logged_to_diagnostics() {
        let now = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut container = container();
        container.set_diagnostics(collector.handle());

        let (first, _) = counting("first", 0.0);
        let (second, _) = counting("second", 0.0);
        let second_id = second.id();
        container.show_at(first, now);
        container.show_at(second, now);
        container.press_action_at(second_id, now);
        container.tick(now + Duration::from_secs(1));

        collector.process_pending();
        let summary = collector.summary();
        assert_eq!(summary.shown, 2);
        assert_eq!(summary.replacements, 1);
        assert_eq!(summary.replaced_dismissals, 1);
        assert_eq!(summary.actions, 1);
        assert_eq!(summary.action_dismissals, 1);
    }
}
