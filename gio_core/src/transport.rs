//! # Byte transports
//!
//! A transport is a position-stateful byte channel. It moves raw bytes and nothing else;
//! deciding what the bytes mean is the job of [`crate::GenericIO`].
//!
//! A transport's `read` returns `Ok(0)` strictly for clean end-of-data.
//! Any other inability to satisfy a request is an `Err`.
//! There is no sentinel count mixed in with valid byte counts.

use anyhow::Result;

mod mem;
pub mod scanner;
mod scanner_test;

pub use mem::*;
pub use scanner::Granularity;

pub trait ByteTransport {
    /// Reads up to `buf.len()` bytes. Returns `Ok(0)` at clean end-of-data.
    /// May return fewer bytes than requested without being at end-of-data.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Writes `buf`. Returns the count of bytes the medium accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Diagnostic label, e.g. "FileIO".
    fn name(&self) -> &str;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// How many bytes [`ByteTransport::read_until`] pulls per scan step.
    fn scan_granularity(&self) -> Granularity {
        Granularity::default()
    }

    /// Reads into `buf` until the trailing bytes equal `terminator`, `buf` is full,
    /// or end-of-data. Returns the count of bytes consumed, terminator included.
    ///
    /// Implementors may override this for performance,
    /// provided the termination semantics of [`scanner::read_until`] are preserved.
    fn read_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        let granularity = self.scan_granularity();
        scanner::read_until(self, buf, terminator, granularity)
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
    fn scan_granularity(&self) -> Granularity {
        (**self).scan_granularity()
    }
    fn read_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        (**self).read_until(buf, terminator)
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
    fn scan_granularity(&self) -> Granularity {
        (**self).scan_granularity()
    }
    fn read_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        (**self).read_until(buf, terminator)
    }
}

/// Reads until `buf` is full or the transport reports end-of-data.
/// Returns the count of bytes read.
pub fn fill<T: ByteTransport + ?Sized>(t: &mut T, buf: &mut [u8]) -> Result<usize> {
    let mut r_len = 0;
    while r_len < buf.len() {
        let delta_r_len = t.read(&mut buf[r_len..])?;
        if delta_r_len == 0 {
            break;
        }
        r_len += delta_r_len;
    }
    Ok(r_len)
}
