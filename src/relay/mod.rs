/*!
 * Relay Module
 * Bounded single-producer/single-consumer queue with an explicit close
 */

pub mod queue;
pub mod types;

// Re-export public API
pub use queue::{relay, RelayReceiver, RelaySender};
pub use types::{RelayError, RelayResult};
