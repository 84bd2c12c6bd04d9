//! Big-endian primitive readers and writers
//!
//! The free functions index the buffer directly and panic when the offset is
//! past the end; record layouts are fixed, so that is a layout bug rather than
//! bad input. [`Reader`] and [`Writer`] track the offset themselves.

use crate::error::{Error, Result};

/// Read a signed byte
pub fn read_byte(buf: &[u8], off: usize) -> i8 {
    buf[off] as i8
}

/// Read an unsigned byte
pub fn read_ubyte(buf: &[u8], off: usize) -> u8 {
    buf[off]
}

/// Read a signed 16-bit big-endian word
pub fn read_word(buf: &[u8], off: usize) -> i16 {
    read_uword(buf, off) as i16
}

/// Read an unsigned 16-bit big-endian word
pub fn read_uword(buf: &[u8], off: usize) -> u16 {
    ((buf[off] as u16) << 8) | buf[off + 1] as u16
}

/// Read a signed 32-bit big-endian long
pub fn read_long(buf: &[u8], off: usize) -> i32 {
    read_ulong(buf, off) as i32
}

/// Read an unsigned 32-bit big-endian long
pub fn read_ulong(buf: &[u8], off: usize) -> u32 {
    ((read_uword(buf, off) as u32) << 16) | read_uword(buf, off + 2) as u32
}

/// Write a signed byte, returning the next offset
pub fn write_byte(buf: &mut [u8], off: usize, v: i8) -> usize {
    buf[off] = v as u8;
    off + 1
}

/// Write an unsigned byte, returning the next offset
pub fn write_ubyte(buf: &mut [u8], off: usize, v: u8) -> usize {
    buf[off] = v;
    off + 1
}

/// Write a signed 16-bit big-endian word, returning the next offset
pub fn write_word(buf: &mut [u8], off: usize, v: i16) -> usize {
    write_uword(buf, off, v as u16)
}

/// Write an unsigned 16-bit big-endian word, returning the next offset
pub fn write_uword(buf: &mut [u8], off: usize, v: u16) -> usize {
    buf[off] = (v >> 8) as u8;
    buf[off + 1] = v as u8;
    off + 2
}

/// Write a signed 32-bit big-endian long, returning the next offset
pub fn write_long(buf: &mut [u8], off: usize, v: i32) -> usize {
    write_ulong(buf, off, v as u32)
}

/// Write an unsigned 32-bit big-endian long, returning the next offset
pub fn write_ulong(buf: &mut [u8], off: usize, v: u32) -> usize {
    let off = write_uword(buf, off, (v >> 16) as u16);
    write_uword(buf, off, v as u16)
}

/// Sequential record reader
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if we've reached the end of data
    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take(&mut self, len: usize) -> Result<usize> {
        if self.pos + len > self.data.len() {
            return Err(Error::Sysex(format!(
                "Unexpected end of record at offset {}",
                self.pos
            )));
        }
        let at = self.pos;
        self.pos += len;
        Ok(at)
    }

    pub fn byte(&mut self) -> Result<i8> {
        let at = self.take(1)?;
        Ok(read_byte(self.data, at))
    }

    pub fn ubyte(&mut self) -> Result<u8> {
        let at = self.take(1)?;
        Ok(read_ubyte(self.data, at))
    }

    pub fn word(&mut self) -> Result<i16> {
        let at = self.take(2)?;
        Ok(read_word(self.data, at))
    }

    pub fn uword(&mut self) -> Result<u16> {
        let at = self.take(2)?;
        Ok(read_uword(self.data, at))
    }

    pub fn long(&mut self) -> Result<i32> {
        let at = self.take(4)?;
        Ok(read_long(self.data, at))
    }

    pub fn ulong(&mut self) -> Result<u32> {
        let at = self.take(4)?;
        Ok(read_ulong(self.data, at))
    }

    /// Read a fixed number of raw bytes
    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let at = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[at..at + N]);
        Ok(out)
    }
}

/// Sequential record writer backed by a growable buffer
#[derive(Debug, Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.data.len()
    }

    fn grow(&mut self, len: usize) -> usize {
        let at = self.data.len();
        self.data.resize(at + len, 0);
        at
    }

    pub fn byte(&mut self, v: i8) {
        let at = self.grow(1);
        write_byte(&mut self.data, at, v);
    }

    pub fn ubyte(&mut self, v: u8) {
        let at = self.grow(1);
        write_ubyte(&mut self.data, at, v);
    }

    pub fn word(&mut self, v: i16) {
        let at = self.grow(2);
        write_word(&mut self.data, at, v);
    }

    pub fn uword(&mut self, v: u16) {
        let at = self.grow(2);
        write_uword(&mut self.data, at, v);
    }

    pub fn long(&mut self, v: i32) {
        let at = self.grow(4);
        write_long(&mut self.data, at, v);
    }

    pub fn ulong(&mut self, v: u32) {
        let at = self.grow(4);
        write_ulong(&mut self.data, at, v);
    }

    pub fn bytes(&mut self, v: &[u8]) {
        self.data.extend_from_slice(v);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_reads_sign_extend() {
        let buf = [0xFF, 0xFE, 0x80, 0x00, 0x00, 0x01];
        assert_eq!(read_byte(&buf, 0), -1);
        assert_eq!(read_ubyte(&buf, 0), 255);
        assert_eq!(read_word(&buf, 0), -2);
        assert_eq!(read_uword(&buf, 0), 0xFFFE);
        assert_eq!(read_long(&buf, 2), i32::MIN + 1);
        assert_eq!(read_ulong(&buf, 2), 0x8000_0001);
    }

    #[test]
    fn test_writes_return_next_offset() {
        let mut buf = [0u8; 7];
        let off = write_byte(&mut buf, 0, -2);
        let off = write_uword(&mut buf, off, 0x1234);
        let off = write_long(&mut buf, off, -1);
        assert_eq!(off, 7);
        assert_eq!(buf, [0xFE, 0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_cursor_walks_fields_in_order() {
        let mut w = Writer::new();
        w.byte(-5);
        w.uword(396);
        w.ulong(0xDEAD_BEEF);
        w.word(-300);
        let data = w.into_inner();
        assert_eq!(data.len(), 9);

        let mut r = Reader::new(&data);
        assert_eq!(r.byte().unwrap(), -5);
        assert_eq!(r.uword().unwrap(), 396);
        assert_eq!(r.ulong().unwrap(), 0xDEAD_BEEF);
        assert_eq!(r.word().unwrap(), -300);
        assert!(r.is_eof());
        assert!(r.ubyte().is_err());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let buf = [0u8; 1];
        read_uword(&buf, 0);
    }
}
