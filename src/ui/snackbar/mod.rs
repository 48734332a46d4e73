// SPDX-License-Identifier: MPL-2.0
//! Snackbar: a transient notification with an optional action.
//!
//! A snackbar slides in at the bottom of its container, shows a message and
//! optionally an action button, then leaves after its duration (or stays
//! until dismissed when the duration is zero). The action callback reports a
//! press on the action; the dismissal callback reports every other way off
//! the screen.
//!
//! # Components
//!
//! - `model` - `Snackbar` entity and its lifecycle state machine
//! - `container` - `Container`, the single-occupancy host, and its `Message`
//! - `executor` - Where long-running action callbacks run
//! - `style` / `view` - Colors and Iced rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::ui::snackbar::{Container, Snackbar, default_executor};
//!
//! let mut snackbars = Container::new(default_executor());
//!
//! snackbars.show(
//!     Snackbar::with_message("Conversation archived")
//!         .action("Undo")
//!         .duration(Duration::from_secs(4))
//!         .on_action(|_| restore_conversation())
//!         .on_dismiss(|_| delete_conversation()),
//! );
//!
//! // In update: snackbars.update(&message)
//! // In view:   stack![content, snackbars.view().map(Message::Snackbar)]
//! // In subscription: snackbars.subscription().map(Message::Snackbar)
//! ```
//!
//! # Callback rules
//!
//! - The action callback runs at most once, only while the snackbar is showing.
//! - A regular action runs inline and dismisses the snackbar; the dismissal
//!   callback does not fire for that dismissal.
//! - A long-running action runs on the executor and the snackbar stays up.
//!   Its eventual dismissal (timer, tap, explicit, replacement) fires the
//!   dismissal callback.
//! - The dismissal callback fires exactly once for every other removal path.

mod container;
mod duration;
mod executor;
mod model;
mod style;
mod view;

pub use container::{Container, Message};
pub use duration::{AnimationDuration, DisplayDuration};
pub use executor::{default_executor, Executor, InlineExecutor, Job, ThreadExecutor, TokioExecutor};
pub use model::{
    ActionOutcome, Callback, DismissReason, PresentationState, Snackbar, SnackbarId, SnackbarInfo,
};
pub use style::{ActionState, SnackbarStyle};
