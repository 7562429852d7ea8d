/*!
 * Generator Module
 * Pull-based lazy sequence generation over a blocking hand-off
 */

pub mod lazy;

// Re-export public API
pub use lazy::{fibonacci, LazyGenerator};
