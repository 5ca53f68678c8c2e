use crate::transport::{scanner, ByteTransport, Granularity};
use crate::{GioError, TransportFault, TransportOp};
use anyhow::Result;
use std::cmp;

const MEM_IO_NAME: &str = "MemIO";

/// An in-memory loopback: writes append to a byte vector, reads consume it from a cursor.
///
/// The scan granularity is only reported; terminator reads scan the buffer directly.
///
/// Once [`MemTransport::close`]d, every read and write fails as if the medium were gone.
#[derive(Default)]
pub struct MemTransport {
    bytes: Vec<u8>,
    r_offset: usize,
    closed: bool,
    granularity: Granularity,
}

impl MemTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// All bytes written so far, including those already read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.r_offset
    }

    /// Drops all bytes and rewinds the read cursor.
    pub fn clean(&mut self) {
        self.bytes.clear();
        self.r_offset = 0;
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    fn check_open(&self, op: TransportOp) -> Result<()> {
        if self.closed {
            return Err(GioError::transport(MEM_IO_NAME, op, TransportFault::Closed).into());
        }
        Ok(())
    }
}

impl From<Vec<u8>> for MemTransport {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            ..Self::default()
        }
    }
}

impl ByteTransport for MemTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.check_open(TransportOp::Read)?;
        let r_len = cmp::min(buf.len(), self.remaining());
        let lo = self.r_offset;
        buf[..r_len].copy_from_slice(&self.bytes[lo..lo + r_len]);
        self.r_offset += r_len;
        Ok(r_len)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.check_open(TransportOp::Write)?;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        MEM_IO_NAME
    }

    fn flush(&mut self) -> Result<()> {
        self.check_open(TransportOp::Flush)
    }

    fn scan_granularity(&self) -> Granularity {
        self.granularity
    }

    /// Scans the unread bytes in place, and consumes them only through the end of the match.
    fn read_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        self.check_open(TransportOp::Read)?;
        let lo = self.r_offset;
        let window = &self.bytes[lo..lo + cmp::min(buf.len(), self.remaining())];
        let r_len = scanner::match_end(window, terminator).unwrap_or(window.len());
        buf[..r_len].copy_from_slice(&window[..r_len]);
        self.r_offset += r_len;
        Ok(r_len)
    }
}
