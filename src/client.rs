//! The bot session: connect, register, then react line by line.
//!
//! The loop is strictly sequential. One line is read, parsed, dispatched,
//! and its reply (if any) written before the next read starts. There is no
//! concurrent state to guard and no send queue to drain.

use tracing::{debug, info};

use crate::config::Config;
use crate::dispatch::Registry;
use crate::error::ClientError;
use crate::handlers;
use crate::message::parse;
use crate::transport::Transport;

/// A connected bot.
pub struct Client {
    config: Config,
    registry: Registry,
    transport: Transport,
}

impl Client {
    /// Connects to the configured server with the built-in reaction table.
    pub async fn connect(config: Config) -> Result<Self, ClientError> {
        let transport = Transport::connect(&config.address()).await?;
        info!(server = %config.server, port = config.port, "connected");
        Ok(Self {
            config,
            registry: handlers::builtin(),
            transport,
        })
    }

    /// Registers with the server, then reacts to incoming lines until the
    /// connection fails or the server closes it. This function only ever
    /// returns an error; a healthy session runs forever.
    pub async fn run(mut self) -> Result<(), ClientError> {
        for line in registration_lines(&self.config) {
            self.send(&line).await?;
        }

        loop {
            let line = self.transport.read_line().await?;
            println!("< {line}");
            let msg = parse(&line);
            match self.registry.dispatch(&self.config, &msg) {
                Some(reply) => self.send(&reply).await?,
                None => debug!(command = msg.command().unwrap_or(""), "no reaction"),
            }
        }
    }

    /// Echoes and writes one outbound line.
    async fn send(&mut self, line: &str) -> Result<(), ClientError> {
        println!("> {line}");
        self.transport.send_line(line).await
    }
}

/// The registration sequence, in send order: the USER line announcing
/// identity first, then the nickname claim.
fn registration_lines(config: &Config) -> [String; 2] {
    let user = format!(
        "USER {nick} {nick} {server} :{realname}",
        nick = config.nickname,
        server = config.server,
        realname = config.realname,
    );
    let nick = format!("NICK :{}", config.nickname);
    [user, nick]
}
