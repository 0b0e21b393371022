use crate::Ttl;
use rand::Rng;
use std::time::Duration;

/// Parameters of one echo session. Immutable for the session's duration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Host name or IPv4 address literal.
    pub target: String,
    /// Number of echo requests to send.
    pub count: u16,
    /// Delay after each request, including the last.
    pub interval: Duration,
    /// Total ICMP packet size in bytes, header included. Values of 8 or
    /// less send the bare header.
    pub packet_size: usize,
    /// Maximum wait per reply.
    pub timeout: Duration,
    /// Desired outbound TTL; applied best-effort by the transport.
    pub ttl: Ttl,
    /// 16-bit session identifier carried in every request and used to match
    /// replies. Callers may pass their pid's low 16 bits or use
    /// [`random_identifier`](Self::random_identifier).
    pub identifier: u16,
}

impl SessionConfig {
    /// Config with the customary defaults: 4 requests, 1s interval, 32-byte
    /// packets, TTL 64, 2s timeout and a random identifier.
    pub fn new(target: impl Into<String>) -> SessionConfig {
        SessionConfig {
            target: target.into(),
            count: 4,
            interval: Duration::from_secs(1),
            packet_size: 32,
            timeout: Duration::from_secs(2),
            ttl: Ttl::default(),
            identifier: Self::random_identifier(),
        }
    }

    #[must_use]
    pub fn random_identifier() -> u16 {
        rand::thread_rng().gen()
    }
}
