use chatbox_stats::core::{OneShotOutcome, OneShotSender};
use chatbox_stats::platform::osc::decode_chatbox_datagram;
use chatbox_stats::platform::OscChatboxClient;
use std::net::UdpSocket;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn listener() -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    socket
}

#[test]
fn test_message_arrives_and_caller_is_held() {
    let listener = listener();
    let client = OscChatboxClient::connect(listener.local_addr().unwrap()).unwrap();
    let sender = OneShotSender::new(Arc::new(client));

    let started = Instant::now();
    let outcome = sender.send("  brb  ", "1");

    assert_eq!(
        outcome,
        OneShotOutcome::Sent {
            delivered: true,
            held_for: Duration::from_secs(1),
        }
    );
    assert!(started.elapsed() >= Duration::from_secs(1));

    let mut buf = [0u8; 1024];
    let (len, _) = listener.recv_from(&mut buf).unwrap();
    let (text, save, notify) = decode_chatbox_datagram(&buf[..len]).unwrap();
    assert_eq!(text, "brb");
    assert!(save);
    assert!(!notify);
}

#[test]
fn test_blank_text_sends_nothing() {
    let listener = listener();
    listener
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let client = OscChatboxClient::connect(listener.local_addr().unwrap()).unwrap();
    let sender = OneShotSender::new(Arc::new(client));

    assert_eq!(sender.send("   ", "5"), OneShotOutcome::Skipped);

    let mut buf = [0u8; 64];
    assert!(listener.recv_from(&mut buf).is_err());
}
