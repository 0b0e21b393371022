use super::{Channel, Ttl};
use socket2::{Domain, Protocol, Type};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{io, time::Duration};

/// Raw IPv4 ICMP socket bound to one target.
///
/// The read timeout is fixed at `open`, so every `recv` blocks for at most
/// the configured per-reply timeout. The socket is closed when the channel
/// is dropped, on every exit path of a session.
pub struct RawChannel {
    socket: socket2::Socket,
    target: socket2::SockAddr,
}

impl Channel for RawChannel {
    fn open(target: Ipv4Addr, timeout: Duration, ttl: Ttl) -> io::Result<RawChannel> {
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        socket.set_read_timeout(Some(timeout))?;
        // Outbound TTL is best-effort; not every platform allows setting it.
        if let Err(error) = socket.set_ttl(u32::from(u8::from(ttl))) {
            tracing::warn!(%error, "could not set outbound TTL, keeping the platform default");
        }
        let target = SocketAddr::new(IpAddr::V4(target), 0).into();
        Ok(RawChannel { socket, target })
    }

    fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.socket.send_to(buf, &self.target)
    }

    fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        // Socket2 gives a safety guaranty which allows us to do an unsafe cast
        // from `&mut [u8]` to `&mut [std::mem::MaybeUninit<u8>]`. In fact, even
        // if we used MaybeUninit here we would need unsafe somewhere to copy
        // the data out of MaybeUninit.
        // https://docs.rs/socket2/0.4.7/socket2/struct.Socket.html#method.recv
        //
        // On a raw socket we receive the full IP datagram, header included.
        let (n, _) = socket2::Socket::recv_from(&self.socket, unsafe {
            &mut *(buf as *mut [u8] as *mut [std::mem::MaybeUninit<u8>])
        })?;
        Ok(n)
    }
}
