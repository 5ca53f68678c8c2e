//! # Shape dispatch
//!
//! [`GenericIO`] wraps a [`ByteTransport`] and offers one method family per value shape.
//! Which family applies is settled at compile time by the traits a value implements,
//! in this priority order:
//!
//! 1. [`crate::serde::SerializableObject`]: the object encodes itself
//!    (it is an [`crate::serde::Element`] through a blanket impl).
//! 2. Pointer buffer, `&[E]`: [`GenericIO::write_buf`], staged as one contiguous chunk.
//! 3. Fixed array, `&[E; N]`: [`GenericIO::write_array`], the same with a derived length.
//! 4. Containers: ranges ([`GenericIO::write_range`]), growable containers
//!    ([`GenericIO::read_into`]), and N-dimensional containers ([`GenericIO::write_nested`]).
//! 5. Strings: [`GenericIO::write_str`].
//! 6. Text streams: [`GenericIO::write_tokens`] and [`GenericIO::read_tokens`].
//! 7. Scalars: [`GenericIO::write`], copying the value's bytes verbatim.
//!
//! Every write returns the count of logical elements written.
//! A medium that accepts fewer bytes than requested is a [`GioError::Transport`] failure.
//!
//! Every read returns the count of logical elements fully read.
//! End-of-data in the middle of an element leaves that element untouched and stops the read.

use crate::transport::{self, ByteTransport};
use crate::{GioError, TransportFault, TransportOp};
use anyhow::Result;
use std::io;

mod buffer;
mod container;
mod control;
mod growable;
mod nested;
mod single;
mod stream;
mod text;

pub use control::*;
pub use growable::*;
pub use nested::*;
pub use stream::*;

pub struct GenericIO<T> {
    t: T,
}

impl<T> From<T> for GenericIO<T> {
    fn from(t: T) -> Self {
        Self { t }
    }
}

impl<T> GenericIO<T> {
    pub fn new(t: T) -> Self {
        Self::from(t)
    }
    pub fn transport(&self) -> &T {
        &self.t
    }
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.t
    }
    pub fn into_inner(self) -> T {
        self.t
    }
}

impl<T: ByteTransport> GenericIO<T> {
    pub fn flush(&mut self) -> Result<()> {
        self.t
            .flush()
            .map_err(|e| classify(e, self.t.name(), TransportOp::Flush))
    }

    /// Sends all of `bytes`, or fails.
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        let w_len = self
            .t
            .write(bytes)
            .map_err(|e| classify(e, self.t.name(), TransportOp::Write))?;
        if w_len < bytes.len() {
            let reason = TransportFault::ShortWrite {
                requested: bytes.len(),
                written: w_len,
            };
            return Err(GioError::transport(self.t.name(), TransportOp::Write, reason).into());
        }
        Ok(())
    }

    /// Reads until `buf` is full or end-of-data. Returns the count of bytes read.
    fn take(&mut self, buf: &mut [u8]) -> Result<usize> {
        transport::fill(&mut self.t, buf).map_err(|e| classify(e, self.t.name(), TransportOp::Read))
    }

    fn take_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        self.t
            .read_until(buf, terminator)
            .map_err(|e| classify(e, self.t.name(), TransportOp::Read))
    }
}

/// Passes classified failures through untouched, and classifies anything else
/// a transport raised as a [`GioError::Transport`] failure of that transport.
fn classify(err: anyhow::Error, name: &str, op: TransportOp) -> anyhow::Error {
    if err.is::<GioError>() {
        return err;
    }
    let reason = match err.downcast::<io::Error>() {
        Ok(io_err) => TransportFault::Io(io_err),
        Err(err) => TransportFault::Other(format!("{err:#}")),
    };
    GioError::transport(name, op, reason).into()
}
