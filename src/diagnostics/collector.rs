// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Producers hold a cheap [`DiagnosticsHandle`]; the collector drains the
//! channel into a circular buffer whenever the host calls
//! [`DiagnosticsCollector::process_pending`].

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, SnackbarEvent};
use crate::ui::snackbar::DismissReason;
use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Sends never block: when the
/// channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: SnackbarEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Like [`DiagnosticsHandle::log`] but reports a full or closed channel.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: SnackbarEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Counts of collected events, by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsSummary {
    pub shown: usize,
    pub actions: usize,
    pub replacements: usize,
    pub timeouts: usize,
    pub explicit_dismissals: usize,
    pub taps: usize,
    pub action_dismissals: usize,
    pub replaced_dismissals: usize,
}

impl DiagnosticsSummary {
    /// Dismissals of every kind.
    #[must_use]
    pub fn dismissals(&self) -> usize {
        self.timeouts
            + self.explicit_dismissals
            + self.taps
            + self.action_dismissals
            + self.replaced_dismissals
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Wall clock start, for display.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all queued events into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn collection_started_at(&self) -> DateTime<Utc> {
        self.collection_started_at_utc
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.collection_started_at_utc = Utc::now();
    }

    #[must_use]
    pub fn summary(&self) -> DiagnosticsSummary {
        let mut summary = DiagnosticsSummary::default();
        for event in self.buffer.iter() {
            match &event.kind {
                SnackbarEvent::Shown { .. } => summary.shown += 1,
                SnackbarEvent::ActionInvoked { .. } => summary.actions += 1,
                SnackbarEvent::Replaced { .. } => summary.replacements += 1,
                SnackbarEvent::Dismissed { reason, .. } => match reason {
                    DismissReason::Timeout => summary.timeouts += 1,
                    DismissReason::Explicit => summary.explicit_dismissals += 1,
                    DismissReason::Tapped => summary.taps += 1,
                    DismissReason::Action => summary.action_dismissals += 1,
                    DismissReason::Replaced => summary.replaced_dismissals += 1,
                },
            }
        }
        summary
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::SnackbarId;

    #[test]
    fn events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let id = SnackbarId::new();

        handle.log(SnackbarEvent::ActionInvoked {
            id,
            long_running: true,
        });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.summary().actions, 1);
    }

    #[test]
    fn handle_works_from_other_threads() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let worker = std::thread::spawn(move || {
            handle.log(SnackbarEvent::Dismissed {
                id: SnackbarId::new(),
                reason: DismissReason::Timeout,
            });
        });
        worker.join().expect("worker panicked");

        collector.process_pending();
        assert_eq!(collector.summary().timeouts, 1);
    }

    #[test]
    fn full_channel_drops_events() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let id = SnackbarId::new();
        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle
                .try_log(SnackbarEvent::ActionInvoked {
                    id,
                    long_running: false,
                })
                .expect("room left in channel");
        }
        let overflow = handle.try_log(SnackbarEvent::ActionInvoked {
            id,
            long_running: false,
        });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn summary_counts_by_kind() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let first = SnackbarId::new();
        let second = SnackbarId::new();

        handle.log(SnackbarEvent::Shown {
            id: first,
            duration_secs: 0.0,
            has_action: true,
        });
        handle.log(SnackbarEvent::Dismissed {
            id: first,
            reason: DismissReason::Replaced,
        });
        handle.log(SnackbarEvent::Replaced {
            previous: first,
            next: second,
        });
        handle.log(SnackbarEvent::Dismissed {
            id: second,
            reason: DismissReason::Action,
        });
        collector.process_pending();

        let summary = collector.summary();
        assert_eq!(summary.shown, 1);
        assert_eq!(summary.replacements, 1);
        assert_eq!(summary.replaced_dismissals, 1);
        assert_eq!(summary.action_dismissals, 1);
        assert_eq!(summary.timeouts, 0);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log(SnackbarEvent::Dismissed {
            id: SnackbarId::new(),
            reason: DismissReason::Tapped,
        });
        collector.process_pending();
        let started = collector.collection_started_at();
        collector.clear();
        assert!(collector.is_empty());
        assert_eq!(collector.summary(), DiagnosticsSummary::default());
        assert!(collector.collection_started_at() >= started);
    }

    #[test]
    fn summary_totals_dismissals() {
        let summary = DiagnosticsSummary {
            timeouts: 2,
            taps: 1,
            replaced_dismissals: 3,
            ..DiagnosticsSummary::default()
        };
        assert_eq!(summary.dismissals(), 6);
    }
}
