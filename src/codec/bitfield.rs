//! Table-driven bitfield packing
//!
//! A class of parameters is described by a list of [`Pcl`] descriptors, each
//! naming a run of bits inside one byte of a shared block and where those bits
//! land inside a parameter value. A second list maps slots to parameter
//! numbers; descriptors name parameters, callers address slots.

use tracing::warn;

/// One bit descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcl {
    /// Byte offset from the class base
    pub byte: u8,
    /// Lowest bit of the field inside that byte
    pub bit: u8,
    /// Field width; negative widths are sign-extended on decode
    pub len: i8,
    /// Parameter number the bits belong to
    pub param: u8,
    /// Position of the field's lowest bit inside the parameter value
    pub shift: u8,
}

impl Pcl {
    pub const fn new(byte: u8, bit: u8, len: i8, param: u8, shift: u8) -> Self {
        Self {
            byte,
            bit,
            len,
            param,
            shift,
        }
    }

    fn width(&self) -> u32 {
        self.len.unsigned_abs() as u32
    }

    fn mask(&self) -> i32 {
        (1i32 << self.width()) - 1
    }

    /// Extract this field from `block`, sign-extended when `len` is negative.
    /// The result is not yet shifted into place.
    pub fn extract(&self, block: &[u8], base: usize) -> i32 {
        let squeeze = 8 - self.width();
        let top = block[base + self.byte as usize] >> self.bit;
        let narrowed = top << squeeze;
        if self.len < 0 {
            ((narrowed as i8) >> squeeze) as i32
        } else {
            (narrowed >> squeeze) as i32
        }
    }

    /// OR this field's share of `value` into `block`
    pub fn insert(&self, block: &mut [u8], base: usize, value: i32) {
        let bits = (value >> self.shift) & self.mask();
        block[base + self.byte as usize] |= (bits << self.bit) as u8;
    }
}

/// Slot whose parameter number matches the descriptor
fn slot_of(indices: &[u8], d: &Pcl) -> Option<usize> {
    indices.iter().position(|&p| p == d.param)
}

/// Decode one class into per-slot values. Descriptors whose parameter has no
/// slot are reserved bits and are skipped.
pub fn decode(block: &[u8], base: usize, pcl: &[Pcl], indices: &[u8]) -> Vec<i32> {
    let mut slots = vec![0; indices.len()];
    for d in pcl {
        match slot_of(indices, d) {
            Some(slot) => slots[slot] |= d.extract(block, base) << d.shift,
            None => warn!("no slot for bitfield parameter {} (byte {}), skipping", d.param, d.byte),
        }
    }
    slots
}

/// Clear every byte the class touches, then pack the slot values into them.
///
/// Anything else sharing those bytes must be written afterwards.
pub fn encode(block: &mut [u8], base: usize, pcl: &[Pcl], indices: &[u8], slots: &[i32]) {
    for d in pcl {
        block[base + d.byte as usize] = 0;
    }
    for d in pcl {
        match slot_of(indices, d) {
            Some(slot) => d.insert(block, base, slots.get(slot).copied().unwrap_or(0)),
            None => warn!("no slot for bitfield parameter {} (byte {}), skipping", d.param, d.byte),
        }
    }
}

/// Assemble slot values from literal per-descriptor values, the same way
/// [`decode`] assembles them from extracted bits
pub fn assemble(values: &[i32], pcl: &[Pcl], indices: &[u8]) -> Vec<i32> {
    let mut slots = vec![0; indices.len()];
    for (d, &v) in pcl.iter().zip(values) {
        match slot_of(indices, d) {
            Some(slot) => slots[slot] |= v << d.shift,
            None => warn!("no slot for preset value of parameter {}, skipping", d.param),
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sign_bit_extends() {
        let d = Pcl::new(0, 6, -1, 2, 4);
        assert_eq!(d.extract(&[0b0100_0000], 0), -1);
        let slots = decode(&[0b0100_0000], 0, &[d], &[0, 1, 2]);
        assert_eq!(slots, vec![0, 0, -16]);
    }

    #[test]
    fn test_unsigned_field_clears_high_garbage() {
        let d = Pcl::new(1, 2, 3, 0, 0);
        assert_eq!(d.extract(&[0, 0b1111_1111], 0), 7);
        assert_eq!(d.extract(&[0, 0b1110_0011], 0), 0);
    }

    #[test]
    fn test_signed_field_wide() {
        let d = Pcl::new(0, 0, -5, 0, 0);
        assert_eq!(d.extract(&[0b0001_0000], 0), -16);
        assert_eq!(d.extract(&[0b0000_1111], 0), 15);
        assert_eq!(d.extract(&[0xFF], 0), -1);
    }

    #[test]
    fn test_split_field_round_trip() {
        // low eight bits in byte 0, ninth bit in bit 5 of byte 1
        let pcl = [Pcl::new(0, 0, 8, 3, 0), Pcl::new(1, 5, 1, 3, 8)];
        let indices = [3];
        let mut block = [0u8; 2];
        encode(&mut block, 0, &pcl, &indices, &[300]);
        assert_eq!(block, [300u16 as u8, 0b0010_0000]);
        assert_eq!(decode(&block, 0, &pcl, &indices), vec![300]);
    }

    #[test]
    fn test_negative_split_field_round_trip() {
        let pcl = [Pcl::new(0, 0, 4, 0, 0), Pcl::new(0, 7, -1, 0, 4)];
        let mut block = [0u8; 1];
        encode(&mut block, 0, &pcl, &[0], &[-3]);
        assert_eq!(block, [0b1000_1101]);
        assert_eq!(decode(&block, 0, &pcl, &[0]), vec![-3]);
    }

    #[test]
    fn test_reserved_descriptor_is_skipped() {
        let pcl = [Pcl::new(0, 0, 4, 0, 0), Pcl::new(0, 4, 4, 9, 0)];
        let slots = decode(&[0xAB], 0, &pcl, &[0]);
        assert_eq!(slots, vec![0xB]);
        let mut block = [0xFFu8];
        encode(&mut block, 0, &pcl, &[0], &[0x5]);
        assert_eq!(block, [0x05]);
    }

    #[test]
    fn test_encode_respects_base() {
        let pcl = [Pcl::new(1, 0, 8, 0, 0)];
        let mut block = [0x11u8; 4];
        encode(&mut block, 2, &pcl, &[0], &[0x42]);
        assert_eq!(block, [0x11, 0x11, 0x11, 0x42]);
    }

    #[test]
    fn test_assemble_matches_decode() {
        let pcl = [Pcl::new(0, 0, 4, 0, 0), Pcl::new(1, 0, 3, 0, 4)];
        let slots = assemble(&[14, 1], &pcl, &[0]);
        assert_eq!(slots, vec![30]);
        let mut block = [0u8; 2];
        encode(&mut block, 0, &pcl, &[0], &slots);
        assert_eq!(decode(&block, 0, &pcl, &[0]), slots);
    }
}
