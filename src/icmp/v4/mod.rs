mod checksum;
pub use checksum::internet_checksum;

mod message;
pub use message::{IcmpMessage, ECHO_REPLY, ECHO_REQUEST, ICMP_HEADER_SIZE};

mod sequence_number;
pub use sequence_number::SequenceNumber;

mod ttl;
pub use ttl::Ttl;

pub(crate) mod channel;
pub use channel::Channel;

mod raw_channel;
pub use raw_channel::RawChannel;
