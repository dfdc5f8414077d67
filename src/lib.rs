//! # slirc-bot
//!
//! A minimal IRC bot built around a permissive message parser, a command
//! registry, and three built-in reactions: answering PING, joining a
//! channel after the MOTD, and greeting people who mention its nickname.
//!
//! ## Features
//!
//! - Total, zero-copy line parsing: any input maps to a [`Message`]
//! - Case-sensitive command dispatch through a pluggable [`Registry`]
//! - Strictly sequential session loop: read, parse, react, repeat
//! - Line framing that truncates over-long input instead of erroring

#![deny(clippy::all)]

//! ## Quick Start
//!
//! ```rust
//! use slirc_bot::{handlers, parse, Config};
//!
//! let config = Config::from_args("irc.example.org", "6667", "bot", "rust");
//! let registry = handlers::builtin();
//!
//! let msg = parse("PING :irc.example.org");
//! let reply = registry.dispatch(&config, &msg);
//! assert_eq!(reply.as_deref(), Some("PONG :irc.example.org"));
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod message;
pub mod transport;
pub mod util;

pub use self::client::Client;
pub use self::config::Config;
pub use self::dispatch::{Handler, Registry};
pub use self::error::ClientError;
pub use self::message::{parse, Message, Origin};
pub use self::transport::{LineCodec, Transport, MAX_LINE_LEN};
