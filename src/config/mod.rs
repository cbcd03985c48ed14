//! Configuration structures and loading utilities.
//!
//! Every structure loads from environment variables and falls back to
//! defaults when a variable is missing or unparsable.

pub mod http_client;
pub mod logging;
pub mod server;
pub mod upstream;

pub use http_client::*;
pub use logging::*;
pub use server::*;
pub use upstream::*;

// Serializes tests that modify environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
