use ping_wren::{run_session, RawChannel, Reporter, SessionConfig, SessionEvent};
use std::sync::Once;
use std::time::Duration;

use more_asserts as ma;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

#[derive(Default)]
struct RecordingReporter {
    events: Vec<SessionEvent>,
}

impl Reporter for RecordingReporter {
    fn on_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }
}

#[test]
#[ignore = "requires a raw ICMP socket (root or CAP_NET_RAW)"]
fn ping_localhost_with_raw_channel() {
    setup();

    let mut config = SessionConfig::new("127.0.0.1");
    config.count = 2;
    config.interval = Duration::from_millis(10);
    config.timeout = Duration::from_secs(1);
    let mut reporter = RecordingReporter::default();

    let statistics = run_session::<RawChannel>(&config, &mut reporter).unwrap();

    assert_eq!(2, statistics.sent);
    ma::assert_le!(statistics.received, statistics.sent);
    assert_eq!(2, reporter.events.len());
    if let Some(min) = statistics.min_rtt {
        ma::assert_gt!(min, Duration::ZERO);
    }
}

#[test]
#[ignore = "requires a raw ICMP socket (root or CAP_NET_RAW)"]
fn session_to_unresolvable_host_fails_before_sending() {
    setup();

    let config = SessionConfig::new("host.invalid");
    let mut reporter = RecordingReporter::default();

    let result = run_session::<RawChannel>(&config, &mut reporter);

    assert!(result.is_err());
    assert!(reporter.events.is_empty());
}
