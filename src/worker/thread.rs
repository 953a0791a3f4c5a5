//! Background thread that answers path requests off the caller's thread.

use super::{PathRequest, PathResponse, dispatch};
use crate::errors::WorkerError;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::task::{Context, Poll};
use std::thread;

/// Identifier handed out per submitted request, unique within one worker.
pub type RequestId = u64;

/// A response together with the id of the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub id: RequestId,
    pub response: PathResponse,
}

struct Job {
    id: RequestId,
    request: PathRequest,
    reply: oneshot::Sender<Completed>,
}

/// Future resolving to the answer of one submitted request.
#[must_use = "the response is lost if the pending path is dropped"]
pub struct PendingPath {
    id: RequestId,
    receiver: oneshot::Receiver<Completed>,
}

impl PendingPath {
    pub const fn id(&self) -> RequestId {
        self.id
    }
}

impl Future for PendingPath {
    type Output = Result<Completed, WorkerError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| WorkerError::Disconnected))
    }
}

/// Runs the tracer on a dedicated thread.
///
/// Requests are answered in submission order, one at a time. There is no
/// cancellation: when a newer request supersedes an older one, the older one
/// still runs, and the caller drops its answer after checking
/// [`PathWorker::is_current`].
pub struct PathWorker {
    jobs: Option<mpsc::Sender<Job>>,
    handle: Option<thread::JoinHandle<()>>,
    next_id: AtomicU64,
    latest: AtomicU64,
}

impl PathWorker {
    pub fn spawn() -> Result<Self, WorkerError> {
        let (jobs, queue) = mpsc::channel::<Job>();
        let handle = thread::Builder::new()
            .name("superellipse-worker".into())
            .spawn(move || {
                tracing::debug!("path worker started");
                for Job { id, request, reply } in queue {
                    let response = dispatch(&request);
                    // The caller may have dropped its PendingPath; that is not an error here.
                    let _ = reply.send(Completed { id, response });
                }
                tracing::debug!("path worker stopped");
            })?;

        Ok(Self {
            jobs: Some(jobs),
            handle: Some(handle),
            next_id: AtomicU64::new(1),
            latest: AtomicU64::new(0),
        })
    }

    /// Queues a request and returns a future for its answer.
    ///
    /// The new request becomes the latest one, making every earlier id stale.
    pub fn submit(&self, request: PathRequest) -> Result<PendingPath, WorkerError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (reply, receiver) = oneshot::channel();
        let jobs = self.jobs.as_ref().ok_or(WorkerError::Disconnected)?;
        jobs.send(Job { id, request, reply })
            .map_err(|_| WorkerError::Disconnected)?;
        self.latest.fetch_max(id, Ordering::AcqRel);
        Ok(PendingPath { id, receiver })
    }

    /// `true` if no request was submitted after `id`.
    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::Acquire) == id
    }

    /// Closes the queue and waits for queued requests to finish.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("path worker thread panicked");
            }
        }
    }
}

impl Drop for PathWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
