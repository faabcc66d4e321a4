//! Todo Toggle Core
//!
//! Platform-agnostic logic for flipping a to-do item's completion state through
//! the server's toggle endpoint. This crate knows nothing about the browser: the
//! DOM and the network are reached through the [`TaskElement`] and
//! [`ToggleTransport`] traits so the same rules run in wasm and in native tests.

pub mod config;
pub mod cookie;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod in_flight;
pub mod response;
pub mod task;
pub mod transport;

// Re-export commonly used types
pub use config::{ConfigError, ToggleConfig};
pub use cookie::cookie_value;
pub use endpoint::toggle_path;
pub use error::ToggleError;
pub use handler::{ToggleHandler, ToggleOutcome};
pub use in_flight::{InFlightGuard, InFlightPolicy, InFlightRegistry};
pub use response::{RawToggleResponse, SUCCESS_STATUS, ToggleReply};
pub use task::{TaskElement, apply_completion};
pub use transport::{ToggleRequest, ToggleTransport, TransportError, TransportResponse};
