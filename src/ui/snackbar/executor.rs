// SPDX-License-Identifier: MPL-2.0
//! Background execution for long-running action callbacks.
//!
//! A snackbar whose action is flagged as long-running hands its callback to an
//! [`Executor`] instead of running it inside `update`. The widget never waits
//! for the job and has no way to cancel it once submitted.

use std::fmt;

/// A unit of work submitted to an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Runs jobs somewhere other than the caller's stack frame.
pub trait Executor: Send + Sync {
    /// Submits a job. Must not block the caller.
    fn spawn(&self, job: Job);
}

/// Runs jobs on Tokio's blocking thread pool.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

impl TokioExecutor {
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime of the calling context, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl fmt::Debug for TokioExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioExecutor").finish_non_exhaustive()
    }
}

impl Executor for TokioExecutor {
    fn spawn(&self, job: Job) {
        // Detached: dropping the JoinHandle does not cancel the job.
        drop(self.handle.spawn_blocking(job));
    }
}

/// Runs every job on a fresh OS thread.
///
/// Fallback for hosts that do not run inside a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn spawn(&self, job: Job) {
        if let Err(err) = std::thread::Builder::new()
            .name("snackbar-action".to_string())
            .spawn(job)
        {
            eprintln!("Failed to spawn snackbar action thread: {err}");
        }
    }
}

/// Runs jobs immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn spawn(&self, job: Job) {
        job();
    }
}

/// Picks the Tokio runtime when available, otherwise plain threads.
#[must_use]
pub fn default_executor() -> std::sync::Arc<dyn Executor> {
    match TokioExecutor::current() {
        Some(executor) => std::sync::Arc::new(executor),
        None => std::sync::Arc::new(ThreadExecutor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    #[test]
    fn inline_executor_runs_synchronously() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        InlineExecutor.spawn(Box::new(move || flag.store(true, Ordering::SeqCst)));
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn thread_executor_runs_off_the_calling_thread() {
        let (tx, rx) = mpsc::channel();
        ThreadExecutor.spawn(Box::new(move || {
            let _ = tx.send(std::thread::current().id());
        }));
        let worker = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("job should run");
        assert_ne!(worker, std::thread::current().id());
    }

    #[test]
    fn tokio_executor_is_unavailable_outside_a_runtime() {
        assert!(TokioExecutor::current().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn tokio_executor_runs_off_the_calling_thread() {
        let executor = TokioExecutor::current().expect("inside a runtime");
        let (tx, rx) = tokio::sync::oneshot::channel();
        let caller = std::thread::current().id();
        executor.spawn(Box::new(move || {
            let _ = tx.send(std::thread::current().id());
        }));
        let worker = tokio::time::timeout(Duration::from_secs(5), rx)
            .await
            .expect("job should run in time")
            .expect("sender kept alive");
        assert_ne!(worker, caller);
    }
}
