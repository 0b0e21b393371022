use std::io;
use std::net::{IpAddr, Ipv4Addr};

pub(crate) fn lookup_host_v4(hostname: &str) -> io::Result<Ipv4Addr> {
    let ips: Vec<IpAddr> = dns_lookup::lookup_host(hostname)?;
    ips.into_iter()
        .find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("could not resolve {hostname} to an IPv4 address"),
            )
        })
}
