//! Unified error type.

use std::fmt;
use std::net::SocketAddr;

/// The error type returned by salute's fallible operations.
///
/// The greeting itself cannot fail — unset configuration resolves to a
/// default and every request gets a response. What can fail is startup:
/// binding the listener to a port that is taken or privileged.
#[derive(Debug)]
pub enum Error {
    /// The TCP listener could not be bound.
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind { addr, source } => write!(f, "failed to bind {addr}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind { source, .. } => Some(source),
        }
    }
}
