/*!
 * Relay Queue
 * Blocking hand-off between one producer and one consumer
 */

use super::types::{RelayError, RelayResult};
use log::debug;

/// Create a relay with the given capacity
///
/// Capacity 0 is a rendezvous: every `send` blocks until the matching
/// `receive`. Capacity `n > 0` buffers up to `n` values before `send`
/// blocks. The queue is the sole synchronization point between the two
/// endpoints.
pub fn relay<T>(capacity: usize) -> (RelaySender<T>, RelayReceiver<T>) {
    let (tx, rx) = flume::bounded(capacity);
    (RelaySender { tx }, RelayReceiver { rx })
}

/// Producer endpoint
///
/// Not cloneable: the relay pairs exactly one producer with one consumer.
pub struct RelaySender<T> {
    tx: flume::Sender<T>,
}

impl<T> RelaySender<T> {
    /// Block until the queue accepts the value
    ///
    /// Fails with `Disconnected` only if the consumer endpoint was dropped,
    /// leaving nowhere for the value to go.
    pub fn send(&self, value: T) -> RelayResult<()> {
        self.tx.send(value).map_err(|_| RelayError::Disconnected)
    }

    /// Signal end-of-stream
    ///
    /// Consumes the endpoint, so sending after close and closing twice do
    /// not compile. The consumer drains any buffered values and then
    /// observes end-of-stream.
    pub fn close(self) {
        debug!("Relay closed by producer");
    }
}

/// Consumer endpoint
pub struct RelayReceiver<T> {
    rx: flume::Receiver<T>,
}

impl<T> RelayReceiver<T> {
    /// Block until a value arrives
    ///
    /// Values arrive strictly in send order. Returns `None` exactly once
    /// the relay is closed and drained.
    pub fn receive(&self) -> Option<T> {
        self.rx.recv().ok()
    }

    /// Number of values currently buffered
    pub fn buffered(&self) -> usize {
        self.rx.len()
    }

    /// Blocking iterator over incoming values, ending at end-of-stream
    pub fn iter(&self) -> flume::Iter<'_, T> {
        self.rx.iter()
    }
}

impl<T> IntoIterator for RelayReceiver<T> {
    type Item = T;
    type IntoIter = flume::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rx.into_iter()
    }
}
