// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::snackbar;

/// Which demo snackbar to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Undo-style snackbar with the configured duration.
    Delete,
    /// Stays until dismissed or replaced.
    Indefinite,
    /// Action runs in the background; the snackbar stays up.
    LongRunning,
    /// No action; tap the body to close it.
    TapToDismiss,
}

#[derive(Debug, Clone)]
pub enum Message {
    Show(Demo),
    DismissCurrent,
    ClearDiagnostics,
    Snackbar(snackbar::Message),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
}
