//! Shared application state for request handlers.

use std::ffi::OsString;
use std::io;

/// Function used to look up the host identifier on each greeting request.
pub type HostnameResolver = fn() -> io::Result<OsString>;

/// Shared application state, cheap to clone into every handler.
///
/// Only holds the host identifier lookup; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub hostname: HostnameResolver,
}

impl AppState {
    /// Creates state that resolves the hostname from the operating system.
    pub fn new() -> Self {
        Self::with_resolver(hostname::get)
    }

    /// Creates state with a custom hostname lookup.
    pub fn with_resolver(hostname: HostnameResolver) -> Self {
        Self { hostname }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
