//! Observability module
//!
//! Logging infrastructure for `docsteward` maintenance runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
