/*!
 * Lazy Sequence Generator
 * Dedicated worker advancing a two-term recurrence one step per request
 */

use log::{debug, warn};
use std::thread::{self, JoinHandle};

/// Pull-based generator for a two-term recurrence
///
/// A dedicated worker thread holds `(prev1, prev2)` and advances one step
/// per request. Terms cross a rendezvous channel, so the worker sits blocked
/// between requests and its state is never visible or mutable from outside
/// the hand-off. The sequence has no exhausted state; callers request as
/// many terms as they want and stop.
///
/// The worker is bound to the generator's lifetime: dropping the handle
/// disconnects the hand-off, the worker's blocked send fails, and the
/// thread is joined.
pub struct LazyGenerator<T> {
    terms: Option<flume::Receiver<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + 'static> LazyGenerator<T> {
    /// Spawn the worker with the given seed and recurrence
    ///
    /// The worker computes `next = recurrence(&prev1, &prev2)`, shifts
    /// `(prev1, prev2) <- (prev2, next)`, then blocks handing the term over
    /// until the next request.
    pub fn spawn<F>(seed: (T, T), mut recurrence: F) -> Self
    where
        F: FnMut(&T, &T) -> T + Send + 'static,
    {
        let (tx, rx) = flume::bounded(0);

        let worker = thread::spawn(move || {
            let (mut prev1, mut prev2) = seed;
            debug!("Generator worker started");

            loop {
                let next = recurrence(&prev1, &prev2);
                prev1 = std::mem::replace(&mut prev2, next.clone());

                // Send fails only once the handle is gone
                if tx.send(next).is_err() {
                    break;
                }
            }

            debug!("Generator worker exiting");
        });

        Self {
            terms: Some(rx),
            worker: Some(worker),
        }
    }

    /// Block until the worker hands over the next term
    ///
    /// The k-th call returns the k-th term of the sequence for the seed and
    /// recurrence; a later call continues from where the previous one left
    /// off, never restarting.
    pub fn next(&self) -> T {
        // The receiver lives until drop, and the worker only exits after
        // the receiver is gone - recv fails only if the recurrence panicked
        self.terms
            .as_ref()
            .and_then(|rx| rx.recv().ok())
            .expect("generator worker terminated")
    }

    /// Request the next `n` terms
    pub fn take(&self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.next()).collect()
    }
}

impl<T> Drop for LazyGenerator<T> {
    fn drop(&mut self) {
        // Disconnect the hand-off first so the worker's blocked send fails
        drop(self.terms.take());

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Generator worker panicked");
            }
        }
    }
}

/// The `n`-th term (1-indexed) of the reference recurrence
///
/// Seed is `(0, 0)`; a term with either operand zero is `1`, otherwise the
/// operands are summed. The zero-operand rule is a documented special case
/// of this sequence, not general Fibonacci - it is what makes the first two
/// terms `1, 1`, so the sequence runs `1, 1, 2, 3, 5, ...`.
pub fn fibonacci(n: usize) -> u64 {
    let generator = LazyGenerator::spawn((0u64, 0u64), |a, b| {
        if *a == 0 || *b == 0 {
            1
        } else {
            a + b
        }
    });

    let mut term = generator.next();
    for _ in 1..n {
        term = generator.next();
    }
    term
}
