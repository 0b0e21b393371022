use crate::icmp::v4::{
    internet_checksum, Channel, IcmpMessage, SequenceNumber, Ttl, ECHO_REPLY,
};
use crate::ping_error::{MalformedPacket, SessionError};
use crate::session_config::SessionConfig;
use crate::session_event::{ReplyData, Reporter, SessionEvent};
use crate::session_stats::SessionStatistics;
use crate::utils;
use std::io;
use std::net::Ipv4Addr;
use std::time::Instant;

pub type SessionResult<T> = std::result::Result<T, SessionError>;

// The reply path assumes a minimal IPv4 header with no options. Replies
// carrying options would shift the ICMP offset; the original tool makes the
// same assumption and it holds for the common case.
const IPV4_HEADER_SIZE: usize = 20;
const IPV4_TTL_OFFSET: usize = 8;
const IPV4_SOURCE_OFFSET: usize = 12;

// Link-MTU-sized receive buffer.
const RECV_BUFFER_SIZE: usize = 1500;

/// Runs one echo session: sends `count` echo requests to the target, waits
/// for each reply within the timeout, reports per-iteration events through
/// `reporter` and returns the aggregate statistics.
///
/// Only a failure to open the channel or to send aborts the session; the
/// channel is released on every exit path.
pub fn run_session<C>(
    config: &SessionConfig,
    reporter: &mut dyn Reporter,
) -> SessionResult<SessionStatistics>
where
    C: Channel,
{
    let target = utils::lookup_host_v4(&config.target).map_err(|source| {
        SessionError::TransportOpen {
            target: config.target.clone(),
            source,
        }
    })?;
    let channel = C::open(target, config.timeout, config.ttl).map_err(|source| {
        SessionError::TransportOpen {
            target: config.target.clone(),
            source,
        }
    })?;
    run_on_channel(config, &channel, reporter)
}

fn run_on_channel<C>(
    config: &SessionConfig,
    channel: &C,
    reporter: &mut dyn Reporter,
) -> SessionResult<SessionStatistics>
where
    C: Channel,
{
    let mut statistics = SessionStatistics::new();

    for i in 0..config.count {
        let sequence_number = SequenceNumber(i + 1);

        let mut request =
            IcmpMessage::echo_request(config.identifier, sequence_number, config.packet_size);
        // Two passes: serialize with a zero checksum, sum the whole buffer,
        // then serialize again with the real value.
        request.checksum = internet_checksum(&request.to_wire());
        let wire = request.to_wire();

        let start = Instant::now();
        if let Err(source) = channel.send(&wire) {
            return Err(SessionError::Write { source });
        }
        statistics.sent += 1;
        tracing::trace!(sequence_number = sequence_number.0, "echo request sent");

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match channel.recv(&mut buf) {
            Err(error) if is_timeout(&error) => {
                tracing::debug!(sequence_number = sequence_number.0, "request timed out");
                reporter.on_event(SessionEvent::Timeout {
                    sequence_number: sequence_number.into(),
                });
            }
            Err(error) => {
                // The original counts every failed read as a timed-out
                // request and keeps going.
                tracing::warn!(%error, "error reading echo reply");
                reporter.on_event(SessionEvent::Timeout {
                    sequence_number: sequence_number.into(),
                });
            }
            Ok(n) => match parse_reply(&buf[..n]) {
                Ok(reply)
                    if reply.message.icmp_type == ECHO_REPLY
                        && reply.message.identifier == config.identifier =>
                {
                    // The sequence number is deliberately not compared:
                    // replies are matched on type and identifier alone, as
                    // in the original tool.
                    let ping_duration = start.elapsed();
                    statistics.record_reply(ping_duration);
                    reporter.on_event(SessionEvent::ReplyReceived(ReplyData {
                        package_size: wire.len(),
                        ip_addr: reply.source.into(),
                        ttl: reply.ttl,
                        sequence_number: sequence_number.into(),
                        ping_duration,
                    }));
                }
                Ok(_) => {
                    tracing::debug!(
                        sequence_number = sequence_number.0,
                        "reply does not match the outstanding request"
                    );
                    reporter.on_event(SessionEvent::InvalidReply {
                        sequence_number: sequence_number.into(),
                    });
                }
                Err(malformed) => {
                    tracing::debug!(%malformed, "discarding malformed reply");
                    reporter.on_event(SessionEvent::InvalidReply {
                        sequence_number: sequence_number.into(),
                    });
                }
            },
        }

        std::thread::sleep(config.interval);
    }

    Ok(statistics)
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}

struct Reply {
    message: IcmpMessage,
    source: Ipv4Addr,
    ttl: Ttl,
}

fn parse_reply(datagram: &[u8]) -> Result<Reply, MalformedPacket> {
    if datagram.len() < IPV4_HEADER_SIZE {
        return Err(MalformedPacket {
            size: datagram.len(),
        });
    }
    let ttl = Ttl(datagram[IPV4_TTL_OFFSET]);
    let source = Ipv4Addr::new(
        datagram[IPV4_SOURCE_OFFSET],
        datagram[IPV4_SOURCE_OFFSET + 1],
        datagram[IPV4_SOURCE_OFFSET + 2],
        datagram[IPV4_SOURCE_OFFSET + 3],
    );
    let message = IcmpMessage::from_wire(&datagram[IPV4_HEADER_SIZE..])?;
    Ok(Reply {
        message,
        source,
        ttl,
    })
}
