//! Korg Wavestation SR codecs

pub mod bank;
pub mod fx;
pub mod fx_tables;
pub mod params;
pub mod patch;
pub mod performance;
pub mod sequence;
pub mod waves;

pub use patch::WavestationPatch;
pub use performance::WavestationPerformance;
pub use sequence::WavestationSequence;

use crate::codec::nybble::{denybblize_len, nybblize, NybbleOrder};
use crate::frame::{self, status};

/// Korg manufacturer ID
pub const KORG_ID: u8 = 0x42;

/// Wavestation model ID
pub const MODEL_ID: u8 = 0x28;

/// Record bytes are sent low nibble first
pub const NYBBLE_ORDER: NybbleOrder = NybbleOrder::LowFirst;

/// Message type bytes (byte 4 of every Wavestation message)
pub mod msg {
    pub const SEQUENCE_BANK_REQUEST: u8 = 0x0C;
    pub const PATCH_REQUEST: u8 = 0x10;
    pub const PATCH_WRITE: u8 = 0x11;
    pub const PERFORMANCE_REQUEST: u8 = 0x19;
    pub const PATCH_DUMP: u8 = 0x40;
    pub const PARAMETER: u8 = 0x41;
    pub const PARAMETER_HIGH: u8 = 0x42;
    pub const PARAMETER_EXTENDED: u8 = 0x43;
    pub const PERFORMANCE_DUMP: u8 = 0x49;
    pub const PATCH_BANK_DUMP: u8 = 0x4C;
    pub const PERFORMANCE_BANK_DUMP: u8 = 0x4D;
    pub const SEQUENCE_BANK_DUMP: u8 = 0x54;
}

/// MIDI_MODE values
pub const PERFORMANCE_MIDI_MODE: i32 = 0;
pub const MULTISET_MIDI_MODE: i32 = 1;

/// WAVE_MUTE masks that solo one oscillator; bit N mutes oscillator N
pub const MUTES: [i32; 4] = [14, 13, 11, 7];

/// Highest valid index into [`RATE_TAB`]
pub const MAX_RATE: usize = RATE_TAB.len() - 1;

/// Envelope rate index to tick count
pub const RATE_TAB: [i32; 100] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50,
    51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74,
    75, 76, 77, 78, 79, 80, 81, 83, 85, 90, 95, 100, 110, 120, 130, 140, 150, 180, 210, 240, 270,
    300, 400, 500, 600, 700,
];

/// Rate table lookup with the index clamped to the usable range
pub fn rate(index: i32) -> i32 {
    RATE_TAB[index.clamp(0, MAX_RATE as i32) as usize]
}

/// Byte 2 of every message: 0x30 plus the zero-based channel
pub fn channel_byte(channel: u8) -> u8 {
    0x30 | (channel & 0x0F)
}

/// Four-byte message header up to and including the model ID
pub fn header(channel: u8) -> [u8; 4] {
    [status::SYSEX, KORG_ID, channel_byte(channel), MODEL_ID]
}

/// Check manufacturer, model and message type; the channel byte is ignored
pub fn is_message(data: &[u8], kind: u8, len: usize) -> bool {
    data.len() == len
        && data[0] == status::SYSEX
        && data[1] == KORG_ID
        && data[3] == MODEL_ID
        && data[4] == kind
}

/// Value of a remote parameter as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue<'a> {
    Int(i32),
    Text(&'a str),
}

impl From<i32> for ParamValue<'_> {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl<'a> From<&'a str> for ParamValue<'a> {
    fn from(v: &'a str) -> Self {
        ParamValue::Text(v)
    }
}

/// Remote parameter-set message: `F0 42 3c 28 T lo hi ASCII… 00 F7`.
///
/// Integers are sent as signed decimal text (`+5`, `0`, `-3`); spaces are sent as 0x7F.
pub fn param_message<'a>(channel: u8, param: u16, value: impl Into<ParamValue<'a>>) -> Vec<u8> {
    let text = match value.into() {
        ParamValue::Int(v) if v > 0 => format!("+{}", v),
        ParamValue::Int(v) => v.to_string(),
        ParamValue::Text(s) => s.to_string(),
    };
    let kind = if param >= 407 {
        msg::PARAMETER_EXTENDED
    } else if param >= 380 {
        msg::PARAMETER_HIGH
    } else {
        msg::PARAMETER
    };

    let mut out = Vec::with_capacity(text.len() + 9);
    out.extend_from_slice(&header(channel));
    out.push(kind);
    out.push((param & 0x7F) as u8);
    out.push(((param >> 7) & 0x7F) as u8);
    out.extend(text.bytes().map(|b| if b == b' ' { 0x7F } else { b & 0x7F }));
    out.push(0x00);
    out.push(status::EOX);
    out
}

/// Replace characters outside printable ASCII with spaces
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if (' '..='\x7F').contains(&c) { c } else { ' ' })
        .collect()
}

/// Record bytes out of the nibbles at `offset`
pub fn unpack(data: &[u8], offset: usize, record_len: usize) -> Vec<u8> {
    denybblize_len(data, offset, record_len * 2, NYBBLE_ORDER)
}

/// Nibblized record followed by its checksum and EOX
pub fn pack(header: &[u8], record: &[u8]) -> Vec<u8> {
    frame::build(header, &nybblize(record, NYBBLE_ORDER), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_message_positive_int() {
        let msg = param_message(0, 79, 2);
        assert_eq!(msg, vec![0xF0, 0x42, 0x30, 0x28, 0x41, 79, 0, b'+', b'2', 0x00, 0xF7]);
    }

    #[test]
    fn test_param_message_zero_and_negative() {
        assert_eq!(&param_message(0, 100, 0)[7..9], &[b'0', 0x00]);
        assert_eq!(&param_message(0, 100, -12)[7..10], b"-12");
    }

    #[test]
    fn test_param_message_type_byte_and_split_index() {
        assert_eq!(param_message(0, 379, 1)[4], 0x41);
        assert_eq!(param_message(0, 380, 1)[4], 0x42);
        let msg = param_message(0, 466, 1);
        assert_eq!(msg[4], 0x43);
        assert_eq!(msg[5], (466 & 127) as u8);
        assert_eq!(msg[6], 3);
    }

    #[test]
    fn test_param_message_text_spaces() {
        let msg = param_message(5, 59, "A B");
        assert_eq!(msg[2], 0x35);
        assert_eq!(&msg[7..12], &[b'A', 0x7F, b'B', 0x00, 0xF7]);
    }

    #[test]
    fn test_rate_clamps() {
        assert_eq!(rate(0), 1);
        assert_eq!(rate(81), 83);
        assert_eq!(rate(98), 600);
        assert_eq!(rate(99), 700);
        assert_eq!(rate(200), 700);
        assert_eq!(rate(-5), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(sanitize_name("Pad\u{1}X\u{e9}"), "Pad X ");
    }

    #[test]
    fn test_pack_unpack() {
        let record: Vec<u8> = (0..=255u8).collect();
        let frame = pack(&[0xF0, 0x42, 0x30, 0x28, 0x40, 0, 0], &record);
        assert_eq!(frame.len(), 7 + 512 + 2);
        assert!(frame::verify_checksum(&frame, 7));
        assert_eq!(unpack(&frame, 7, 256), record);
    }
}
