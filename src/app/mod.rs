// SPDX-License-Identifier: MPL-2.0
//! Demo application showing snackbars inside an Iced window.
//!
//! The `App` owns one snackbar [`Container`] and wires its messages,
//! subscription and overlay into the Iced loop. Snackbar callbacks report to
//! a shared activity log so both callback paths are visible on screen.

mod message;
mod view;

pub use message::{Demo, Flags, Message};

use crate::config::{self, Config, DEFAULT_CAN_TAP_TO_DISMISS};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use crate::ui::snackbar::{
    default_executor, ActionState, Container, DisplayDuration, Snackbar, SnackbarInfo,
};
use chrono::Local;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Most recent lines kept in the activity log.
const ACTIVITY_LIMIT: usize = 8;

/// How long the fake background sync takes.
const SYNC_WORK: Duration = Duration::from_secs(2);

/// Activity log shared with snackbar callbacks, which may run on other threads.
#[derive(Debug, Clone, Default)]
struct Activity(Arc<Mutex<Vec<String>>>);

impl Activity {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push(line);
            let overflow = lines.len().saturating_sub(ACTIVITY_LIMIT);
            lines.drain(..overflow);
        }
    }

    fn lines(&self) -> Vec<String> {
        self.0.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

pub struct App {
    i18n: I18n,
    config: Config,
    snackbars: Container,
    diagnostics: DiagnosticsCollector,
    activity: Activity,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("snackbars", &self.snackbars)
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings, using defaults: {err}");
            Config::default()
        });
        (Self::with_config(flags, config), Task::none())
    }

    fn with_config(flags: Flags, config: Config) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();
        let mut snackbars = Container::with_config(default_executor(), &config);
        snackbars.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            config,
            snackbars,
            diagnostics,
            activity: Activity::default(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snackbars.subscription().map(Message::Snackbar)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(demo) => {
                let snackbar = self.build(demo);
                self.snackbars.show(snackbar);
            }
            Message::DismissCurrent => {
                self.snackbars.dismiss_current(true);
            }
            Message::ClearDiagnostics => {
                self.diagnostics.process_pending();
                self.diagnostics.clear();
            }
            Message::Snackbar(message) => {
                self.snackbars.update(&message);
            }
        }
        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snackbars: &self.snackbars,
            activity: self.activity.lines(),
            diagnostics: self.diagnostics_line(),
        })
    }

    /// One-line digest of the lifecycle counters, with the local start time.
    fn diagnostics_line(&self) -> String {
        let summary = self.diagnostics.summary();
        let since = self
            .diagnostics
            .collection_started_at()
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();
        self.i18n.tr_with_args(
            "diagnostics-summary",
            &[
                ("shown", summary.shown.to_string().as_str()),
                ("actions", summary.actions.to_string().as_str()),
                ("dismissed", summary.dismissals().to_string().as_str()),
                ("since", since.as_str()),
            ],
        )
    }

    /// Builds the snackbar for a demo button, with callbacks feeding the activity log.
    fn build(&self, demo: Demo) -> Snackbar {
        let tap_default = self
            .config
            .can_tap_to_dismiss
            .unwrap_or(DEFAULT_CAN_TAP_TO_DISMISS);

        let snackbar = match demo {
            Demo::Delete => Snackbar::new(
                self.i18n
                    .tr_with_args("snackbar-deleted", &[("name", "Invoice.pdf")]),
                Some(self.i18n.tr("snackbar-undo").as_str()),
                self.config.default_duration(),
                None,
                None,
            ),
            Demo::Indefinite => {
                let mut snackbar = Snackbar::new(
                    self.i18n.tr("snackbar-offline"),
                    Some(self.i18n.tr("snackbar-retry").as_str()),
                    DisplayDuration::INDEFINITE,
                    None,
                    None,
                );
                snackbar.set_action_text_color(palette::PRIMARY_400, ActionState::Hovered);
                snackbar
            }
            Demo::LongRunning => {
                let activity = self.activity.clone();
                let finished = self.i18n.tr("activity-sync-finished");
                Snackbar::with_message(self.i18n.tr("snackbar-sync"))
                    .action(self.i18n.tr("snackbar-sync-now"))
                    .duration(Duration::from_secs(6))
                    .long_running(true)
                    .on_action(move |_: &SnackbarInfo| {
                        std::thread::sleep(SYNC_WORK);
                        activity.push(finished.clone());
                    })
            }
            Demo::TapToDismiss => Snackbar::with_message(self.i18n.tr("snackbar-tap"))
                .duration(self.config.default_duration())
                .tap_to_dismiss(true),
        };

        self.with_logging(snackbar.tap_to_dismiss(tap_default || demo == Demo::TapToDismiss))
    }

    /// Adds activity-log callbacks where the demo didn't set its own.
    fn with_logging(&self, mut snackbar: Snackbar) -> Snackbar {
        let message = snackbar.message().to_string();
        let action_line = self
            .i18n
            .tr_with_args("activity-action", &[("message", message.as_str())]);
        let dismissed_line = self
            .i18n
            .tr_with_args("activity-dismissed", &[("message", message.as_str())]);

        if !snackbar.action_is_long_running() {
            let activity = self.activity.clone();
            snackbar.set_action_callback(Some(Arc::new(move |_: &SnackbarInfo| {
                activity.push(action_line.clone());
            })));
        }
        let activity = self.activity.clone();
        snackbar.set_dismissal_callback(Some(Arc::new(move |_: &SnackbarInfo| {
            activity.push(dismissed_line.clone());
        })));
        snackbar
    }

    #[cfg(test)]
    fn snackbars(&self) -> &Container {
        &self.snackbars
    }
}
