use crate::Candidate;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Mutex;

/// Shared work queue of primality candidates
///
/// Filled exactly once before any worker starts: the full range is sent
/// into an unbounded channel and the sender is dropped, so the channel
/// itself guarantees each candidate is delivered to exactly one caller.
/// Workers drain it through `try_dequeue` until it reports empty.
pub struct WorkQueue {
    receiver: Mutex<UnboundedReceiver<Candidate>>,
}

impl WorkQueue {
    /// Creates a queue pre-populated with `count` consecutive candidates
    /// starting at `start`
    pub fn fill(start: Candidate, count: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        for candidate in start..start + count as Candidate {
            // Send only fails if the receiver is gone, and we hold it
            let _ = tx.send(candidate);
        }
        // Dropping the sender closes the channel: once the buffer is
        // drained, try_recv reports disconnected rather than empty
        drop(tx);

        Self {
            receiver: Mutex::new(rx),
        }
    }

    /// Removes and returns one candidate, or None once the queue is drained
    ///
    /// The emptiness check and the removal happen inside a single lock of
    /// the receiver, so no two workers can claim the same candidate and
    /// no candidate is ever re-delivered. Never waits for new work.
    pub async fn try_dequeue(&self) -> Option<Candidate> {
        self.receiver.lock().await.try_recv().ok()
    }
}
