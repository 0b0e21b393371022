use super::SequenceNumber;
use crate::ping_error::MalformedPacket;

pub const ECHO_REQUEST: u8 = 8;
pub const ECHO_REPLY: u8 = 0;

/// Fixed size of the ICMP echo header on the wire.
pub const ICMP_HEADER_SIZE: usize = 8;

/// One ICMP echo message: the 8-byte header plus an optional payload.
///
/// All multi-byte header fields are big-endian on the wire.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IcmpMessage {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence_number: SequenceNumber,
    pub payload: Vec<u8>,
}

impl IcmpMessage {
    /// Builds an echo request whose wire size equals `packet_size`, padding
    /// the payload with zero bytes. A `packet_size` of 8 or less clamps to
    /// the bare header.
    ///
    /// The checksum field is left at zero; callers run the two-pass protocol
    /// over [`to_wire`](Self::to_wire) before sending.
    #[must_use]
    pub fn echo_request(
        identifier: u16,
        sequence_number: SequenceNumber,
        packet_size: usize,
    ) -> IcmpMessage {
        let payload_len = packet_size.saturating_sub(ICMP_HEADER_SIZE);
        IcmpMessage {
            icmp_type: ECHO_REQUEST,
            code: 0,
            checksum: 0,
            identifier,
            sequence_number,
            payload: vec![0u8; payload_len],
        }
    }

    /// Serializes header and payload. The checksum field is emitted as-is;
    /// this function never computes it. To produce a sendable request:
    /// serialize with `checksum == 0`, run
    /// [`internet_checksum`](super::internet_checksum) over the whole buffer,
    /// store the result in `checksum` and serialize again.
    #[must_use]
    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(ICMP_HEADER_SIZE + self.payload.len());
        wire.push(self.icmp_type);
        wire.push(self.code);
        wire.extend_from_slice(&self.checksum.to_be_bytes());
        wire.extend_from_slice(&self.identifier.to_be_bytes());
        wire.extend_from_slice(&u16::from(self.sequence_number).to_be_bytes());
        wire.extend_from_slice(&self.payload);
        wire
    }

    /// Parses header and payload from wire bytes.
    ///
    /// The checksum is extracted but not validated; the reply path accepts
    /// messages with a bad checksum.
    pub fn from_wire(wire: &[u8]) -> Result<IcmpMessage, MalformedPacket> {
        if wire.len() < ICMP_HEADER_SIZE {
            return Err(MalformedPacket { size: wire.len() });
        }
        Ok(IcmpMessage {
            icmp_type: wire[0],
            code: wire[1],
            checksum: u16::from_be_bytes([wire[2], wire[3]]),
            identifier: u16::from_be_bytes([wire[4], wire[5]]),
            sequence_number: u16::from_be_bytes([wire[6], wire[7]]).into(),
            payload: wire[ICMP_HEADER_SIZE..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icmp::v4::internet_checksum;

    #[test]
    fn wire_round_trip() {
        let message = IcmpMessage {
            icmp_type: ECHO_REQUEST,
            code: 0,
            checksum: 0x1234,
            identifier: 0xABCD,
            sequence_number: SequenceNumber(7),
            payload: vec![1, 2, 3, 4, 5],
        };

        let decoded = IcmpMessage::from_wire(&message.to_wire()).unwrap();

        assert_eq!(message, decoded);
    }

    #[test]
    fn header_layout_is_big_endian() {
        let message = IcmpMessage {
            icmp_type: ECHO_REQUEST,
            code: 0,
            checksum: 0x0102,
            identifier: 0x0304,
            sequence_number: SequenceNumber(0x0506),
            payload: vec![],
        };

        assert_eq!(vec![8, 0, 1, 2, 3, 4, 5, 6], message.to_wire());
    }

    #[test]
    fn from_wire_rejects_short_input() {
        for len in 0..ICMP_HEADER_SIZE {
            let result = IcmpMessage::from_wire(&vec![0u8; len]);
            assert_eq!(Err(MalformedPacket { size: len }), result);
        }
    }

    #[test]
    fn echo_request_pads_to_requested_size() {
        let message = IcmpMessage::echo_request(1, SequenceNumber::start_value(), 32);
        assert_eq!(32, message.to_wire().len());
        assert!(message.payload.iter().all(|&b| b == 0));
    }

    #[test]
    fn echo_request_clamps_small_sizes_to_header() {
        assert_eq!(8, IcmpMessage::echo_request(1, SequenceNumber(1), 8).to_wire().len());
        assert_eq!(8, IcmpMessage::echo_request(1, SequenceNumber(1), 3).to_wire().len());
        assert_eq!(8, IcmpMessage::echo_request(1, SequenceNumber(1), 0).to_wire().len());
    }

    #[test]
    fn two_pass_checksum_is_self_verifying() {
        let mut message = IcmpMessage::echo_request(0xBEEF, SequenceNumber(3), 32);
        message.checksum = internet_checksum(&message.to_wire());

        // Summing a buffer that includes its own checksum yields zero.
        assert_eq!(0x0000, internet_checksum(&message.to_wire()));
    }
}
