//! OSC-over-UDP chatbox client.

use std::net::{SocketAddr, UdpSocket};

use rosc::{OscMessage, OscPacket, OscType};

use crate::core::chatbox::{ChatboxSink, SendRequest};
use crate::error::{ChatboxError, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;
pub const CHATBOX_INPUT_ADDRESS: &str = "/chatbox/input";

/// Build the `/chatbox/input` message: `(text, save_to_history, play_notification)`
pub fn to_packet(request: &SendRequest) -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: CHATBOX_INPUT_ADDRESS.to_string(),
        args: vec![
            OscType::String(request.text().to_string()),
            OscType::Bool(request.save_to_history()),
            OscType::Bool(request.play_notification()),
        ],
    })
}

pub fn encode_request(request: &SendRequest) -> Result<Vec<u8>> {
    rosc::encoder::encode(&to_packet(request))
        .map_err(|e| ChatboxError::osc(format!("{:?}", e)))
}

/// Decode a chatbox datagram back into its text and flags.
pub fn decode_chatbox_datagram(bytes: &[u8]) -> Result<(String, bool, bool)> {
    let (_, packet) =
        rosc::decoder::decode_udp(bytes).map_err(|e| ChatboxError::osc(format!("{:?}", e)))?;

    let message = match packet {
        OscPacket::Message(message) => message,
        OscPacket::Bundle(_) => return Err(ChatboxError::osc("unexpected OSC bundle")),
    };

    if message.addr != CHATBOX_INPUT_ADDRESS {
        return Err(ChatboxError::osc(format!(
            "unexpected address {}",
            message.addr
        )));
    }

    match message.args.as_slice() {
        [OscType::String(text), OscType::Bool(save), OscType::Bool(notify)] => {
            Ok((text.clone(), *save, *notify))
        }
        other => Err(ChatboxError::osc(format!("unexpected arguments {:?}", other))),
    }
}

/// Sends chatbox messages to one OSC endpoint
#[derive(Debug)]
pub struct OscChatboxClient {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscChatboxClient {
    /// Bind an ephemeral local socket for sending to `target`.
    pub fn connect(target: SocketAddr) -> Result<Self> {
        let bind_addr: SocketAddr = if target.is_ipv6() {
            SocketAddr::from(([0u16; 8], 0))
        } else {
            SocketAddr::from(([0u8; 4], 0))
        };

        let socket = UdpSocket::bind(bind_addr)?;
        log::debug!(
            "OSC client bound to {:?}, sending to {}",
            socket.local_addr().ok(),
            target
        );

        Ok(Self { socket, target })
    }
}

impl ChatboxSink for OscChatboxClient {
    fn send(&self, request: &SendRequest) -> Result<()> {
        let bytes = encode_request(request)?;

        self.socket
            .send_to(&bytes, self.target)
            .map_err(|e| ChatboxError::send(format!("{}: {}", self.target, e)))?;

        log::trace!("Sent {} bytes to {}", bytes.len(), self.target);
        Ok(())
    }
}
