use std::{error::Error, fmt, io};

/// Fatal session failures. Everything else (timeouts, malformed or
/// mismatched replies) is handled inside the session loop and never
/// surfaces as an error.
#[derive(Debug)]
pub enum SessionError {
    /// The target could not be resolved or the raw channel could not be
    /// opened; nothing was sent.
    TransportOpen { target: String, source: io::Error },
    /// A send failed mid-session; remaining iterations are skipped.
    Write { source: io::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::TransportOpen { target, source } => {
                write!(f, "could not open ICMP channel to {target}: {source}")
            }
            SessionError::Write { source } => {
                write!(f, "could not send echo request: {source}")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::TransportOpen { source, .. } | SessionError::Write { source } => {
                Some(source)
            }
        }
    }
}

/// A reply too short to carry the expected header.
#[derive(Debug, Eq, PartialEq)]
pub struct MalformedPacket {
    pub size: usize,
}

impl fmt::Display for MalformedPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed packet: {} bytes", self.size)
    }
}

impl Error for MalformedPacket {}
