//! Line framing over TCP.
//!
//! The codec turns the byte stream into whole lines and back. Inbound
//! framing is as forgiving as the parser above it: over-long runs are cut
//! at the size bound instead of killing the connection, and invalid UTF-8
//! decodes lossily instead of erroring.

use std::io;

use bytes::BytesMut;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Decoder, Encoder, Framed};

use crate::error::ClientError;

/// Upper bound on one raw inbound line, in bytes.
pub const MAX_LINE_LEN: usize = 1024;

/// Codec for `\n`-terminated protocol lines.
///
/// Decoding splits on `\n` and strips one trailing `\r`. Anything longer
/// than [`MAX_LINE_LEN`] is cut at the bound, whether or not its terminator
/// has arrived yet; the tail is framed as the following line(s). Encoding
/// appends `\r\n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineCodec;

impl Decoder for LineCodec {
    type Item = String;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, io::Error> {
        let mut line = match src.iter().position(|&b| b == b'\n') {
            // The bound applies even when the terminator is already buffered.
            Some(pos) if pos > MAX_LINE_LEN => src.split_to(MAX_LINE_LEN),
            Some(pos) => {
                let mut line = src.split_to(pos + 1);
                line.truncate(pos);
                line
            }
            None if src.len() > MAX_LINE_LEN => src.split_to(MAX_LINE_LEN),
            None => return Ok(None),
        };
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

impl<'a> Encoder<&'a str> for LineCodec {
    type Error = io::Error;

    fn encode(&mut self, line: &'a str, dst: &mut BytesMut) -> Result<(), io::Error> {
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}

/// Owns the socket and exchanges whole lines over it.
pub struct Transport {
    framed: Framed<TcpStream, LineCodec>,
}

impl Transport {
    /// Opens the TCP connection to `addr`, a `host:port` pair.
    pub async fn connect(addr: &str) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| ClientError::Connect {
                addr: addr.to_string(),
                source,
            })?;
        Ok(Self {
            framed: Framed::new(stream, LineCodec),
        })
    }

    /// Reads the next line. The peer closing the stream is an error here
    /// because this client has nothing left to do without it.
    pub async fn read_line(&mut self) -> Result<String, ClientError> {
        match self.framed.next().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(ClientError::Read(e)),
            None => Err(ClientError::Closed),
        }
    }

    /// Writes one line; the codec appends the terminator.
    pub async fn send_line(&mut self, line: &str) -> Result<(), ClientError> {
        self.framed.send(line).await.map_err(ClientError::Write)
    }
}
