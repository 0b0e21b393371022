use super::Ttl;
use std::{io, net::Ipv4Addr, time::Duration};

/// Seam between the session controller and the network.
///
/// One channel is bound to one target for the lifetime of a session and is
/// released when dropped. `recv` blocks for at most the timeout given to
/// `open` and returns the raw IPv4 datagram, header included.
pub trait Channel {
    fn open(target: Ipv4Addr, timeout: Duration, ttl: Ttl) -> io::Result<Self>
    where
        Self: Sized;
    fn send(&self, buf: &[u8]) -> io::Result<usize>;
    fn recv(&self, buf: &mut [u8]) -> io::Result<usize>;
}
