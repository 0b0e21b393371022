use crate::Ttl;
use std::net::IpAddr;
use std::time::Duration;

/// One matched echo reply.
#[derive(Clone, Debug)]
pub struct ReplyData {
    /// Wire size of the request this reply answers.
    pub package_size: usize,
    /// Source address taken from the reply's IP header.
    pub ip_addr: IpAddr,
    /// TTL the reply arrived with.
    pub ttl: Ttl,
    /// Sequence number of the outstanding request.
    pub sequence_number: u16,
    pub ping_duration: Duration,
}

/// Per-iteration outcome of the session loop.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    ReplyReceived(ReplyData),
    /// No reply within the configured timeout.
    Timeout { sequence_number: u16 },
    /// A reply arrived but was too short or did not match the outstanding
    /// request.
    InvalidReply { sequence_number: u16 },
}

/// Consumer of session events. The library emits events as they happen and
/// never prints; a front end implements this to format per-reply lines.
pub trait Reporter {
    fn on_event(&mut self, event: SessionEvent);
}
