//! Error types for the bot.
//!
//! Line parsing never fails, so everything here is about the connection:
//! setting it up, reading from it, and writing to it. Any of these errors
//! ends the session.

use thiserror::Error;

/// Convenience type alias for Results using [`ClientError`].
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Fatal conditions that end a bot session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Could not resolve or connect to the server.
    #[error("could not connect to {addr}: {source}")]
    Connect {
        /// The `host:port` pair the connection was aimed at.
        addr: String,
        /// The underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading from the server.
    #[error("error reading from server: {0}")]
    Read(#[source] std::io::Error),

    /// I/O error while sending a line to the server.
    #[error("error sending to server: {0}")]
    Write(#[source] std::io::Error),

    /// The server closed the connection.
    #[error("server closed the connection")]
    Closed,
}
