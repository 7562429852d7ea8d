/*!
 * Relay Types
 * Errors shared by the relay endpoints
 */

use thiserror::Error;

/// Relay operation result
pub type RelayResult<T> = Result<T, RelayError>;

/// Relay errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay disconnected: consumer endpoint dropped")]
    Disconnected,
}
