//! Sysex framing, checksums and MIDI channel messages

/// MIDI status bytes
pub mod status {
    /// Start of a system exclusive message
    pub const SYSEX: u8 = 0xF0;
    /// End of a system exclusive message
    pub const EOX: u8 = 0xF7;
    pub const CONTROL_CHANGE: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
}

/// Controller numbers used for bank select and NRPN
pub mod cc {
    pub const BANK_SELECT: u8 = 0;
    pub const DATA_ENTRY_MSB: u8 = 6;
    pub const DATA_ENTRY_LSB: u8 = 38;
    pub const NRPN_LSB: u8 = 98;
    pub const NRPN_MSB: u8 = 99;
}

/// Low seven bits of the byte sum
pub fn checksum(payload: &[u8]) -> u8 {
    (payload.iter().map(|&b| b as u32).sum::<u32>() & 0x7F) as u8
}

/// `header`, `payload`, optional checksum of `payload`, then EOX
pub fn build(header: &[u8], payload: &[u8], with_checksum: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len() + payload.len() + 2);
    out.extend_from_slice(header);
    out.extend_from_slice(payload);
    if with_checksum {
        out.push(checksum(payload));
    }
    out.push(status::EOX);
    out
}

/// Check that `data` starts with `header` and ends with EOX
pub fn is_framed(data: &[u8], header: &[u8]) -> bool {
    data.len() > header.len() && data.starts_with(header) && data.last() == Some(&status::EOX)
}

/// Check the checksum byte that precedes EOX against the payload starting at `start`
pub fn verify_checksum(data: &[u8], start: usize) -> bool {
    if data.len() < start + 2 {
        return false;
    }
    let end = data.len() - 2;
    checksum(&data[start..end]) == data[end]
}

/// Split a byte stream into its sysex messages; bytes outside F0..F7 are skipped
pub fn split_messages(data: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, &b) in data.iter().enumerate() {
        match b {
            status::SYSEX => start = Some(i),
            status::EOX => {
                if let Some(s) = start.take() {
                    out.push(&data[s..=i]);
                }
            }
            _ => {}
        }
    }
    out
}

/// Control change on a zero-based channel
pub fn control_change(channel: u8, controller: u8, value: i32) -> Vec<u8> {
    vec![
        status::CONTROL_CHANGE | (channel & 0x0F),
        controller & 0x7F,
        (value & 0x7F) as u8,
    ]
}

/// Program change on a zero-based channel
pub fn program_change(channel: u8, program: i32) -> Vec<u8> {
    vec![status::PROGRAM_CHANGE | (channel & 0x0F), (program & 0x7F) as u8]
}

/// NRPN write as four control changes, MSB first
pub fn nrpn(channel: u8, parameter: i32, value: i32) -> Vec<Vec<u8>> {
    vec![
        control_change(channel, cc::NRPN_MSB, parameter >> 7),
        control_change(channel, cc::NRPN_LSB, parameter),
        control_change(channel, cc::DATA_ENTRY_MSB, value >> 7),
        control_change(channel, cc::DATA_ENTRY_LSB, value),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_low_seven_bits_of_sum() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[0x7F, 0x01]), 0);
        assert_eq!(checksum(&[15; 100]), (1500 % 128) as u8);
    }

    #[test]
    fn test_corrupted_payload_changes_checksum() {
        let payload: Vec<u8> = (0..64).map(|i| (i % 16) as u8).collect();
        let frame = build(&[0xF0, 0x42], &payload, true);
        assert!(verify_checksum(&frame, 2));

        let mut bad = frame.clone();
        bad[10] ^= 0x01;
        assert!(!verify_checksum(&bad, 2));
    }

    #[test]
    fn test_build_without_checksum() {
        assert_eq!(build(&[0xF0, 0x7D], &[1, 2], false), vec![0xF0, 0x7D, 1, 2, 0xF7]);
    }

    #[test]
    fn test_is_framed() {
        assert!(is_framed(&[0xF0, 0x42, 0x00, 0xF7], &[0xF0, 0x42]));
        assert!(!is_framed(&[0xF0, 0x42, 0x00, 0x00], &[0xF0, 0x42]));
        assert!(!is_framed(&[0xF0, 0x42], &[0xF0, 0x42]));
    }

    #[test]
    fn test_split_messages() {
        let stream = [0xF0, 1, 0xF7, 0xB0, 0, 1, 0xF0, 2, 3, 0xF7, 0xF0, 9];
        let msgs = split_messages(&stream);
        assert_eq!(msgs, vec![&[0xF0, 1, 0xF7][..], &[0xF0, 2, 3, 0xF7][..]]);
        assert!(split_messages(&[0xF7, 0xF7]).is_empty());
    }

    #[test]
    fn test_nrpn_msb_first() {
        let msgs = nrpn(2, 200, 300);
        assert_eq!(
            msgs,
            vec![
                vec![0xB2, 99, 1],
                vec![0xB2, 98, 72],
                vec![0xB2, 6, 2],
                vec![0xB2, 38, 44],
            ]
        );
    }
}
