// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording snackbar lifecycle activity.
//!
//! Events are sent through a bounded channel so logging never blocks the UI
//! thread (or the worker running a long-running action), then stored in a
//! memory-bounded circular buffer.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`SnackbarEvent`]: What happened to which snackbar
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Receiving and sending ends

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, DiagnosticsSummary};
pub use events::{DiagnosticEvent, SnackbarEvent};
