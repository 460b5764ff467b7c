// Transmission loop against a real UDP listener

use chatbox_stats::core::sensors::Sensors;
use chatbox_stats::core::{LoopState, Source, SystemUsage, Toggles, Transmitter};
use chatbox_stats::platform::osc::decode_chatbox_datagram;
use chatbox_stats::platform::OscChatboxClient;
use std::net::UdpSocket;
use std::sync::Arc;
use std::time::Duration;

struct StaticSensors;

impl Sensors for StaticSensors {
    fn os_identity(&self) -> String {
        "🐧 Test Linux".to_string()
    }
    fn clock(&self, _use_24h: bool) -> String {
        "⏰ 12:00:00".to_string()
    }
    fn media(&self) -> String {
        "🎵 No media playing".to_string()
    }
    fn system_usage(&self) -> SystemUsage {
        SystemUsage::new("23", "3.2", "7.5", "16.0")
    }
    fn nvidia_gpu(&self) -> String {
        "🎮 No GPU or error retrieving GPU stats".to_string()
    }
    fn amd_gpu(&self) -> String {
        String::new()
    }
}

fn receive_text(listener: &UdpSocket) -> String {
    let mut buf = [0u8; 1024];
    let (len, _) = listener.recv_from(&mut buf).unwrap();
    decode_chatbox_datagram(&buf[..len]).unwrap().0
}

#[test]
fn test_loop_sends_until_stopped() {
    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    listener
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let client = OscChatboxClient::connect(listener.local_addr().unwrap()).unwrap();

    let transmitter = Transmitter::new(
        Arc::new(StaticSensors),
        Arc::new(client),
        Toggles::only(&[Source::Cpu, Source::Ram]),
        Duration::from_millis(20),
    )
    .unwrap();

    assert!(transmitter.start());
    assert_eq!(transmitter.state(), LoopState::Active);

    assert_eq!(receive_text(&listener), "💻 23% @ 3.2GHz\n💾 7.5GB / 16.0GB\n");
    assert_eq!(receive_text(&listener), "💻 23% @ 3.2GHz\n💾 7.5GB / 16.0GB\n");

    transmitter.update_toggles(Toggles::only(&[Source::Os]));
    let mut saw_new_toggles = false;
    for _ in 0..20 {
        if receive_text(&listener) == "🐧 Test Linux\n" {
            saw_new_toggles = true;
            break;
        }
    }
    assert!(saw_new_toggles);

    assert!(transmitter.stop_and_wait(Duration::from_secs(2)));
    assert_eq!(transmitter.state(), LoopState::Idle);

    // Drain anything sent before the stop landed, then expect silence
    listener
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buf = [0u8; 1024];
    while listener.recv_from(&mut buf).is_ok() {}
    assert!(listener.recv_from(&mut buf).is_err());
}

#[test]
fn test_restart_after_stop() {
    let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
    listener
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let client = OscChatboxClient::connect(listener.local_addr().unwrap()).unwrap();

    let transmitter = Transmitter::new(
        Arc::new(StaticSensors),
        Arc::new(client),
        Toggles::only(&[Source::Clock]),
        Duration::from_millis(20),
    )
    .unwrap();

    assert!(transmitter.start());
    assert!(!transmitter.start());
    assert_eq!(receive_text(&listener), "⏰ 12:00:00\n");
    assert!(transmitter.stop_and_wait(Duration::from_secs(2)));

    assert!(transmitter.start());
    assert_eq!(receive_text(&listener), "⏰ 12:00:00\n");
    assert!(transmitter.stop_and_wait(Duration::from_secs(2)));
}
