//! Nibblization: one 8-bit byte as two 7-bit-safe bytes

/// Order in which the two halves of a byte are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NybbleOrder {
    /// High nibble first (Futuresonus)
    HighFirst,
    /// Low nibble first (Korg)
    LowFirst,
}

impl NybbleOrder {
    fn split(self, b: u8) -> [u8; 2] {
        let (hi, lo) = (b >> 4, b & 0x0F);
        match self {
            NybbleOrder::HighFirst => [hi, lo],
            NybbleOrder::LowFirst => [lo, hi],
        }
    }

    fn join(self, first: u8, second: u8) -> u8 {
        let (hi, lo) = match self {
            NybbleOrder::HighFirst => (first, second),
            NybbleOrder::LowFirst => (second, first),
        };
        ((hi & 0x0F) << 4) | (lo & 0x0F)
    }
}

/// Split every byte into two nibble bytes
pub fn nybblize(bytes: &[u8], order: NybbleOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.extend_from_slice(&order.split(b));
    }
    out
}

/// Rejoin nibble pairs starting at `offset`, stopping before the trailing
/// checksum and terminator bytes of a frame
pub fn denybblize(data: &[u8], offset: usize, order: NybbleOrder) -> Vec<u8> {
    let len = data.len().saturating_sub(offset + 2);
    denybblize_len(data, offset, len, order)
}

/// Rejoin `len` nibbles starting at `offset`; an odd trailing nibble is dropped
pub fn denybblize_len(data: &[u8], offset: usize, len: usize, order: NybbleOrder) -> Vec<u8> {
    data[offset..offset + len]
        .chunks_exact(2)
        .map(|pair| order.join(pair[0], pair[1]))
        .collect()
}
