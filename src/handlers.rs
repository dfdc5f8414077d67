//! The bot's built-in command handlers.
//!
//! Three reactions cover the whole protocol surface this bot cares about:
//! answer keepalives, join the configured channel once the MOTD is over,
//! and greet anyone whose channel message opens with the bot's nickname.

use crate::config::Config;
use crate::dispatch::{Handler, Registry};
use crate::message::Message;

/// End-of-MOTD numeric. Servers send it when registration output is done,
/// which is the earliest safe moment to join a channel.
pub const RPL_ENDOFMOTD: &str = "376";

/// Answers server keepalive probes.
///
/// The reply echoes the probe's trailing token back; a probe without one
/// gets an empty echo rather than no answer.
pub struct PingHandler;

impl Handler for PingHandler {
    fn react(&self, _config: &Config, msg: &Message<'_>) -> Option<String> {
        let token = msg.trailing.unwrap_or("");
        Some(format!("PONG :{token}"))
    }
}

/// Joins the configured channel when the end-of-MOTD numeric arrives.
pub struct MotdEndHandler;

impl Handler for MotdEndHandler {
    fn react(&self, config: &Config, _msg: &Message<'_>) -> Option<String> {
        let channel = &config.channel;
        Some(format!("JOIN #{channel}"))
    }
}

/// Greets whoever opens a channel message with the bot's nickname.
///
/// The match is a case-sensitive prefix check on the message text, so
/// `bot: hi` and `bothering you` both count as mentions for a bot named
/// `bot`. The greeting goes to the message target and names the sender's
/// nick, user, and host, substituting empty strings for absent fields.
pub struct MentionHandler;

impl Handler for MentionHandler {
    fn react(&self, config: &Config, msg: &Message<'_>) -> Option<String> {
        let text = msg.trailing.unwrap_or("");
        if !text.starts_with(config.nickname.as_str()) {
            return None;
        }
        let target = msg.param(1).unwrap_or("");
        let (nick, user, host) = match &msg.origin {
            Some(origin) => (
                origin.nick,
                origin.user.unwrap_or(""),
                origin.host.unwrap_or(""),
            ),
            None => ("", "", ""),
        };
        Some(format!(
            "PRIVMSG {target} :Hello {nick}! Your user@host is {user}@{host}!"
        ))
    }
}

/// Builds the bot's standard reaction table.
pub fn builtin() -> Registry {
    let mut registry = Registry::new();
    registry.register("PING", PingHandler);
    registry.register(RPL_ENDOFMOTD, MotdEndHandler);
    registry.register("PRIVMSG", MentionHandler);
    registry
}
