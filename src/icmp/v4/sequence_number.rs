#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceNumber(pub u16);

impl SequenceNumber {
    /// Sequence numbers within a session start at 1.
    #[must_use]
    pub fn start_value() -> SequenceNumber {
        SequenceNumber(1)
    }
}

impl From<u16> for SequenceNumber {
    fn from(integer: u16) -> Self {
        SequenceNumber(integer)
    }
}

impl From<SequenceNumber> for u16 {
    fn from(sequence_number: SequenceNumber) -> Self {
        sequence_number.0
    }
}
