// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for snackbar lifecycle tracking.

use crate::ui::snackbar::{DismissReason, SnackbarId};
use std::time::Instant;

/// Lifecycle transitions worth recording.
#[derive(Debug, Clone, PartialEq)]
pub enum SnackbarEvent {
    /// A snackbar was presented in a container.
    Shown {
        id: SnackbarId,
        /// Zero when indefinite.
        duration_secs: f64,
        has_action: bool,
    },
    /// The action button was pressed and its callback ran or was dispatched.
    ActionInvoked { id: SnackbarId, long_running: bool },
    /// A snackbar reached the end of its lifecycle.
    Dismissed {
        id: SnackbarId,
        reason: DismissReason,
    },
    /// A showing snackbar was pushed out by a new one.
    Replaced {
        previous: SnackbarId,
        next: SnackbarId,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: SnackbarEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: SnackbarEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
