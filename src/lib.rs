#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use icmp::v4::{
    internet_checksum, Channel, IcmpMessage, RawChannel, SequenceNumber, Ttl, ECHO_REPLY,
    ECHO_REQUEST, ICMP_HEADER_SIZE,
};
pub use ping_error::{MalformedPacket, SessionError};
pub use session::{run_session, SessionResult};
pub use session_config::SessionConfig;
pub use session_event::{ReplyData, Reporter, SessionEvent};
pub use session_stats::SessionStatistics;

mod icmp;
mod ping_error;
mod session;
mod session_config;
mod session_event;
mod session_stats;
mod utils;
