use std::time::Duration;

/// Aggregate counters for one session, owned by the controller and updated
/// once per matched reply.
#[derive(Debug, Default)]
pub struct SessionStatistics {
    pub sent: u32,
    pub received: u32,
    pub min_rtt: Option<Duration>,
    pub max_rtt: Option<Duration>,
    sum_rtt: Duration,
}

impl SessionStatistics {
    pub(crate) fn new() -> SessionStatistics {
        SessionStatistics::default()
    }

    pub(crate) fn record_reply(&mut self, rtt: Duration) {
        self.received += 1;
        self.min_rtt = Some(self.min_rtt.map_or(rtt, |min| min.min(rtt)));
        self.max_rtt = Some(self.max_rtt.map_or(rtt, |max| max.max(rtt)));
        self.sum_rtt += rtt;
    }

    #[must_use]
    pub fn lost(&self) -> u32 {
        self.sent - self.received
    }

    /// Loss percentage over sent packets; defined as 0 when nothing was
    /// sent.
    #[must_use]
    pub fn loss_percent(&self) -> f64 {
        if self.sent == 0 {
            return 0.0;
        }
        f64::from(self.lost()) / f64::from(self.sent) * 100.0
    }

    /// Mean round-trip time, `None` until at least one reply was matched.
    #[must_use]
    pub fn average_rtt(&self) -> Option<Duration> {
        if self.received == 0 {
            return None;
        }
        Some(self.sum_rtt / self.received)
    }
}
