//! Run configuration.
//!
//! Built once from the command line before the connection opens, then only
//! ever handed out by shared reference. Handlers read it, nobody writes it.

use crate::util::{truncate_chars, MAX_NAME_LEN};

/// Realname sent in the registration line.
pub const DEFAULT_REALNAME: &str = "slirc bot";

/// Immutable bot identity and connection target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Server hostname or address, as given on the command line.
    pub server: String,
    /// TCP port on the server.
    pub port: u16,
    /// Nickname the bot registers and answers to, at most
    /// [`MAX_NAME_LEN`] characters.
    pub nickname: String,
    /// Channel to join after the MOTD, without the leading `#`, at most
    /// [`MAX_NAME_LEN`] characters.
    pub channel: String,
    /// Realname sent during registration.
    pub realname: String,
}

impl Config {
    /// Builds a config from the four positional command-line arguments.
    ///
    /// Over-long nickname and channel arguments are silently cut down to
    /// [`MAX_NAME_LEN`] characters. A port that does not parse becomes 0,
    /// which then fails at connect time like any other unreachable target.
    ///
    /// # Examples
    ///
    /// ```
    /// use slirc_bot::config::Config;
    ///
    /// let config = Config::from_args("irc.example.org", "6667", "bot", "rust");
    /// assert_eq!(config.port, 6667);
    /// assert_eq!(config.nickname, "bot");
    /// ```
    pub fn from_args(server: &str, port: &str, nickname: &str, channel: &str) -> Self {
        Self {
            server: server.to_string(),
            port: port.parse().unwrap_or(0),
            nickname: truncate_chars(nickname, MAX_NAME_LEN).to_string(),
            channel: truncate_chars(channel, MAX_NAME_LEN).to_string(),
            realname: DEFAULT_REALNAME.to_string(),
        }
    }

    /// The `host:port` pair used for connecting and in error messages.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}
