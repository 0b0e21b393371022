/// Internet checksum (RFC 1071) over a byte buffer.
///
/// The buffer is read as big-endian 16-bit words; an odd trailing byte is
/// treated as the high byte of a zero-padded word. Carries above bit 16 are
/// folded back until none remain, and the one's complement of the low 16 bits
/// is returned.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    let mut words = data.chunks_exact(2);
    for word in words.by_ref() {
        sum += u32::from(u16::from_be_bytes([word[0], word[1]]));
    }
    if let [last] = *words.remainder() {
        sum += u32::from(last) << 8;
    }
    while sum >> 16 != 0 {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    !(sum as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_even_buffer_sums_to_all_ones() {
        assert_eq!(0xFFFF, internet_checksum(&[0u8; 8]));
        assert_eq!(0xFFFF, internet_checksum(&[0u8; 64]));
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(0xFFFF, internet_checksum(&[]));
    }

    #[test]
    fn odd_trailing_byte_is_high_byte_of_padded_word() {
        assert_eq!(!0xFF00, internet_checksum(&[0xFF]));
        assert_eq!(!0x0102, internet_checksum(&[0x01, 0x02]));
        assert_eq!(!0x0405, internet_checksum(&[0x01, 0x02, 0x03, 0x03]));
    }

    #[test]
    fn carry_is_folded_back() {
        // 0xFFFF + 0x0001 overflows into bit 16 and folds back to 0x0001.
        assert_eq!(!0x0001, internet_checksum(&[0xFF, 0xFF, 0x00, 0x01]));
    }

    #[test]
    fn matches_pnet_checksum_over_icmp_buffer() {
        use pnet_packet::icmp::IcmpPacket;

        // checksum field (bytes 2..4) zeroed, as pnet computes it that way
        let buf = [8u8, 0, 0, 0, 0xAB, 0xCD, 0, 1, 1, 2, 3, 4];
        let packet = IcmpPacket::new(&buf).unwrap();
        assert_eq!(pnet_packet::icmp::checksum(&packet), internet_checksum(&buf));
    }
}
