//! Terminator scanning built purely from [`ByteTransport::read`].
//!
//! The scan keeps a write cursor `i` (bytes read so far) and, after every step, compares the
//! trailing window `buf[i - len..i]` against the terminator.
//! A step never reads past the earliest position where a match could end, so the transport
//! is left right after the terminator whatever the granularity.
//! This is a naive scan, not KMP. Terminators are expected to be a handful of bytes.

use crate::transport::{self, ByteTransport};
use anyhow::{anyhow, Result};
use derive_more::Deref;
use std::cmp;

/// Count of bytes pulled from the transport per scan step. Never zero.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Granularity(usize);
impl Granularity {
    pub fn new(step: usize) -> Result<Self> {
        if step == 0 {
            return Err(anyhow!("Scan granularity must be positive."));
        }
        Ok(Self(step))
    }
}
impl Default for Granularity {
    fn default() -> Self {
        Self(1)
    }
}

/// Reads into `buf` until one of:
/// - the trailing bytes equal `terminator` (the terminator stays in `buf`);
/// - `buf.len()` bytes have been read;
/// - the transport reports end-of-data.
///
/// Returns the count of bytes consumed from the transport, which is never more than `buf.len()`
/// and never extends past the end of the first match.
///
/// Each step reads at most `granularity` bytes, and fewer while the tail of `buf` is a
/// partial terminator.
///
/// An empty `terminator` never matches.
pub fn read_until<T: ByteTransport + ?Sized>(
    t: &mut T,
    buf: &mut [u8],
    terminator: &[u8],
    granularity: Granularity,
) -> Result<usize> {
    let max_len = buf.len();
    if terminator.is_empty() {
        return transport::fill(t, buf);
    }

    let mut i = 0;
    while i < max_len {
        /* The earliest a match can end is after completing the longest partial terminator. */
        let safe_len = terminator.len() - partial_match_len(&buf[..i], terminator);
        let step_hi = cmp::min(i + cmp::min(*granularity, safe_len), max_len);

        let r_len = t.read(&mut buf[i..step_hi])?;
        if r_len == 0 {
            break;
        }
        i += r_len;

        if buf[..i].ends_with(terminator) {
            break;
        }
    }

    Ok(i)
}

/// Length of the longest proper prefix of `terminator` that `bytes` ends with.
/// 0 if none, or if `terminator` is empty.
pub fn partial_match_len(bytes: &[u8], terminator: &[u8]) -> usize {
    (1..terminator.len())
        .rev()
        .find(|&len| bytes.ends_with(&terminator[..len]))
        .unwrap_or(0)
}

/// The position right after the first occurrence of `terminator` in `bytes`.
pub fn match_end(bytes: &[u8], terminator: &[u8]) -> Option<usize> {
    if terminator.is_empty() {
        return None;
    }
    let term_len = terminator.len();
    (term_len..=bytes.len()).find(|&end| &bytes[end - term_len..end] == terminator)
}
