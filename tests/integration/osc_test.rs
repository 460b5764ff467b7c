use chatbox_stats::core::{ChatboxSink, SendRequest};
use chatbox_stats::platform::osc::{decode_chatbox_datagram, encode_request, CHATBOX_INPUT_ADDRESS};
use chatbox_stats::platform::OscChatboxClient;
use std::net::UdpSocket;
use std::time::Duration;

#[test]
fn test_datagram_is_decodable_osc() {
    let bytes = encode_request(&SendRequest::new("hello")).unwrap();

    // OSC strings are NUL padded to a 4-byte boundary
    assert_eq!(bytes.len() % 4, 0);
    assert!(bytes.starts_with(CHATBOX_INPUT_ADDRESS.as_bytes()));

    let (text, save, notify) = decode_chatbox_datagram(&bytes).unwrap();
    assert_eq!(text, "hello");
    assert!(save);
    assert!(!notify);
}

#[test]
fn test_unicode_text_is_sent_intact() {
    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    listener
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();

    let client = OscChatboxClient::connect(listener.local_addr().unwrap()).unwrap();
    let text = "🐧 Arch Linux\n⏰ 21:05:09\n";
    client.send(&SendRequest::new(text)).unwrap();

    let mut buf = [0u8; 1024];
    let (len, _) = listener.recv_from(&mut buf).unwrap();
    let (received, _, _) = decode_chatbox_datagram(&buf[..len]).unwrap();
    assert_eq!(received, text);
}

#[test]
fn test_empty_message_is_still_a_valid_datagram() {
    let bytes = encode_request(&SendRequest::new("")).unwrap();
    let (text, _, _) = decode_chatbox_datagram(&bytes).unwrap();
    assert_eq!(text, "");
}
