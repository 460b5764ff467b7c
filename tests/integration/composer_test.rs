// End-to-end message assembly through the public API

use chatbox_stats::core::composer::message_length;
use chatbox_stats::core::sensors::Sensors;
use chatbox_stats::core::{compose, sample, Source, SystemUsage, Toggles, MAX_MESSAGE_LENGTH};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct MockSensors {
    system_calls: AtomicUsize,
}

impl Sensors for MockSensors {
    fn os_identity(&self) -> String {
        "🐧 Arch Linux".to_string()
    }

    fn clock(&self, use_24h: bool) -> String {
        if use_24h {
            "⏰ 21:05:09".to_string()
        } else {
            "⏰ 09:05:09 PM".to_string()
        }
    }

    fn media(&self) -> String {
        "🎵 Song - Band".to_string()
    }

    fn system_usage(&self) -> SystemUsage {
        self.system_calls.fetch_add(1, Ordering::SeqCst);
        SystemUsage::new("23", "3.2", "7.5", "16.0")
    }

    fn nvidia_gpu(&self) -> String {
        "🎮 12% | 2.0GB / 8.0GB".to_string()
    }

    fn amd_gpu(&self) -> String {
        "🎮 57% | 0.5GB / 8.0GB".to_string()
    }
}

#[test]
fn test_cpu_and_ram_message() {
    let sensors = MockSensors::default();
    let toggles = Toggles::only(&[Source::Cpu, Source::Ram]);

    let message = compose(&toggles, &sample(&toggles, &sensors));

    assert_eq!(message, "💻 23% @ 3.2GHz\n💾 7.5GB / 16.0GB\n");
    assert_eq!(message_length(&message), 34);
    assert_eq!(sensors.system_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_default_toggles_message() {
    let sensors = MockSensors::default();
    let toggles = Toggles::default();

    let message = compose(&toggles, &sample(&toggles, &sensors));

    assert_eq!(
        message,
        "🐧 Arch Linux\n⏰ 21:05:09\n🎵 Song - Band\n💻 23% @ 3.2GHz\n💾 7.5GB / 16.0GB\n🎮 12% | 2.0GB / 8.0GB"
    );
}

#[test]
fn test_twelve_hour_clock() {
    let sensors = MockSensors::default();
    let mut toggles = Toggles::only(&[Source::Clock]);
    toggles.use_24h_clock = false;

    let message = compose(&toggles, &sample(&toggles, &sensors));
    assert_eq!(message, "⏰ 09:05:09 PM\n");
}

#[test]
fn test_both_gpus_are_concatenated() {
    let sensors = MockSensors::default();
    let toggles = Toggles::only(&[Source::NvidiaGpu, Source::AmdGpu]);

    let message = compose(&toggles, &sample(&toggles, &sensors));
    assert_eq!(message, "🎮 12% | 2.0GB / 8.0GB🎮 57% | 0.5GB / 8.0GB");
}

#[test]
fn test_system_not_sampled_without_cpu_or_ram() {
    let sensors = MockSensors::default();
    let toggles = Toggles::only(&[Source::Os, Source::Media]);

    let message = compose(&toggles, &sample(&toggles, &sensors));

    assert_eq!(message, "🐧 Arch Linux\n🎵 Song - Band\n");
    assert_eq!(sensors.system_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_message_never_exceeds_limit() {
    struct Chatty;

    impl Sensors for Chatty {
        fn os_identity(&self) -> String {
            format!("🐧 {}", "x".repeat(200))
        }
        fn clock(&self, _use_24h: bool) -> String {
            "⏰ 12:00:00".to_string()
        }
        fn media(&self) -> String {
            "🎵 🎶".repeat(60)
        }
        fn system_usage(&self) -> SystemUsage {
            SystemUsage::unavailable()
        }
        fn nvidia_gpu(&self) -> String {
            String::new()
        }
        fn amd_gpu(&self) -> String {
            String::new()
        }
    }

    let toggles = Toggles::default();
    let message = compose(&toggles, &sample(&toggles, &Chatty));

    assert_eq!(message_length(&message), MAX_MESSAGE_LENGTH);
    assert!(message.starts_with("🐧 xxx"));
}
