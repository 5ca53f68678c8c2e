use crate::transport::{scanner, ByteTransport};
use crate::{GenericIO, GioError};
use anyhow::Result;
use std::cmp;

/// Staging chunk size for reads bounded only by end-of-data.
pub(super) const UNBOUNDED_READ_CHUNK: usize = 4096;

impl<T: ByteTransport> GenericIO<T> {
    /// Writes the string's UTF-8 bytes: no length prefix, no terminator.
    /// Returns the count of bytes written.
    pub fn write_str(&mut self, s: &str) -> Result<usize> {
        self.write_bytes(s.as_bytes())
    }

    /// Writes the string's UTF-8 bytes followed by one NUL byte.
    /// Returns the count of bytes written, the NUL included.
    pub fn write_str_nul(&mut self, s: &str) -> Result<usize> {
        let mut staging = Vec::with_capacity(s.len() + 1);
        staging.extend_from_slice(s.as_bytes());
        staging.push(0);
        self.put(&staging)?;
        Ok(staging.len())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.put(bytes)?;
        Ok(bytes.len())
    }

    /// Reads bytes until end-of-data, or until `max_len` bytes, and appends them to `dst`.
    /// Returns the count of bytes read.
    pub fn read_bytes(&mut self, dst: &mut Vec<u8>, max_len: Option<usize>) -> Result<usize> {
        let mut r_len = 0;
        loop {
            let chunk_len = match max_len {
                None => UNBOUNDED_READ_CHUNK,
                Some(max_len) => cmp::min(max_len - r_len, UNBOUNDED_READ_CHUNK),
            };
            if chunk_len == 0 {
                break;
            }
            let lo = dst.len();
            dst.resize(lo + chunk_len, 0);
            let delta_r_len = self.take(&mut dst[lo..])?;
            dst.truncate(lo + delta_r_len);
            r_len += delta_r_len;
            if delta_r_len < chunk_len {
                break;
            }
        }
        Ok(r_len)
    }

    /// Like [`GenericIO::read_bytes`], appending to a string.
    /// Fails with [`GioError::InvalidText`] if the bytes are not UTF-8,
    /// which includes a multi-byte character cut by `max_len`.
    pub fn read_string(&mut self, dst: &mut String, max_len: Option<usize>) -> Result<usize> {
        let mut bytes = vec![];
        let r_len = self.read_bytes(&mut bytes, max_len)?;
        dst.push_str(&self.utf8(bytes)?);
        Ok(r_len)
    }

    /// Reads up to and including the first occurrence of `terminator`, or at most `max_len`
    /// bytes, or until end-of-data, and appends them to `dst`.
    /// Returns the count of bytes appended.
    ///
    /// Nothing past the terminator is consumed from the transport.
    pub fn read_bytes_until(
        &mut self,
        dst: &mut Vec<u8>,
        terminator: &[u8],
        max_len: Option<usize>,
    ) -> Result<usize> {
        let lo = dst.len();
        loop {
            let r_len = dst.len() - lo;
            let chunk_len = match max_len {
                None => UNBOUNDED_READ_CHUNK,
                Some(max_len) => cmp::min(max_len - r_len, UNBOUNDED_READ_CHUNK),
            };
            if chunk_len == 0 {
                break;
            }
            /* A terminator begun in the previous chunk is finished one byte at a time. */
            let step_len = match scanner::partial_match_len(&dst[lo..], terminator) {
                0 => chunk_len,
                _ => 1,
            };

            let step_lo = dst.len();
            dst.resize(step_lo + step_len, 0);
            let delta_r_len = self.take_until(&mut dst[step_lo..], terminator)?;
            dst.truncate(step_lo + delta_r_len);

            let is_match = !terminator.is_empty() && dst[lo..].ends_with(terminator);
            if is_match || delta_r_len < step_len {
                break;
            }
        }
        Ok(dst.len() - lo)
    }

    /// Like [`GenericIO::read_bytes_until`], appending to a string.
    ///
    /// Writing `"string!"` then reading until `"r"` yields `"str"`.
    pub fn read_str_until(
        &mut self,
        dst: &mut String,
        terminator: &str,
        max_len: Option<usize>,
    ) -> Result<usize> {
        let mut bytes = vec![];
        let r_len = self.read_bytes_until(&mut bytes, terminator.as_bytes(), max_len)?;
        dst.push_str(&self.utf8(bytes)?);
        Ok(r_len)
    }

    pub(super) fn utf8(&self, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|source| {
            GioError::InvalidText {
                name: self.t.name().to_string(),
                source,
            }
            .into()
        })
    }
}
