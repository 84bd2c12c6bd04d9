//! Fixed-width ASCII name fields

/// Fixed-width raw name field, space padded
pub fn name_bytes<const N: usize>(name: &str) -> [u8; N] {
    let mut out = [b' '; N];
    for (dst, c) in out.iter_mut().zip(name.chars()) {
        *dst = if c.is_ascii() { c as u8 } else { b' ' };
    }
    out
}

/// Decode a raw name field, dropping trailing padding
pub fn name_from_bytes(raw: &[u8]) -> String {
    raw.iter()
        .map(|&b| b as char)
        .collect::<String>()
        .trim_end_matches([' ', '\0'])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bytes_pads_and_truncates() {
        let raw: [u8; 8] = name_bytes("Seq");
        assert_eq!(&raw, b"Seq     ");
        let raw: [u8; 4] = name_bytes("Strings");
        assert_eq!(&raw, b"Stri");
        let raw: [u8; 4] = name_bytes("A\u{e9}B");
        assert_eq!(&raw, b"A B ");
    }

    #[test]
    fn test_name_from_bytes_drops_padding() {
        assert_eq!(name_from_bytes(b"Seq\0\0   "), "Seq");
        assert_eq!(name_from_bytes(b"  Pad   "), "  Pad");
        assert_eq!(name_from_bytes(b"        "), "");
    }
}
