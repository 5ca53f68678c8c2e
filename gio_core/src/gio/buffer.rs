use crate::serde::{Element, Stride};
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;
use log::debug;
use std::any;

impl<T: ByteTransport> GenericIO<T> {
    /// Writes a pointer buffer as one contiguous chunk of `buf.len() * stride` bytes,
    /// where the stride is `buf[0]`'s wire size. Returns `buf.len()`.
    pub fn write_buf<E: Element>(&mut self, buf: &[E]) -> Result<usize> {
        let Some(first) = buf.first() else {
            return Ok(0);
        };
        let stride = Stride::of(first)?;
        let mut staging = Vec::with_capacity(buf.len() * *stride);
        for elem in buf {
            stride.encode_into(elem, &mut staging)?;
        }
        self.put(&staging)?;
        debug!(
            "Wrote {} x {} ({} bytes each) to {}.",
            buf.len(),
            any::type_name::<E>(),
            *stride,
            self.t.name()
        );
        Ok(buf.len())
    }

    pub fn write_buf_with<S, E, F>(&mut self, buf: &[S], f: F) -> Result<usize>
    where
        E: Element,
        F: FnMut(&S) -> E,
    {
        let mapped = buf.iter().map(f).collect::<Vec<_>>();
        self.write_buf(&mapped)
    }

    /// Reads up to `buf.len()` elements with one staged transfer of `buf.len() * stride` bytes.
    /// Returns the count of whole elements decoded.
    ///
    /// The bytes of a trailing partial element are consumed from the transport and discarded;
    /// the destination slots from that element onward are left untouched.
    pub fn read_buf<E: Element>(&mut self, buf: &mut [E]) -> Result<usize> {
        let Some(first) = buf.first() else {
            return Ok(0);
        };
        let stride = Stride::of(first)?;
        let mut staging = vec![0u8; buf.len() * *stride];
        let r_len = self.take(&mut staging)?;
        let elem_ct = r_len / *stride;
        for (elem, chunk) in buf
            .iter_mut()
            .zip(staging.chunks_exact(*stride))
            .take(elem_ct)
        {
            stride.decode_from(elem, chunk);
        }
        debug!(
            "Read {elem_ct} of {} x {} from {}.",
            buf.len(),
            any::type_name::<E>(),
            self.t.name()
        );
        Ok(elem_ct)
    }

    /// Reads `buf.len()` default-constructed `E`s, then stores `f(e)` for each one read.
    pub fn read_buf_with<E, D, F>(&mut self, buf: &mut [D], mut f: F) -> Result<usize>
    where
        E: Element + Default,
        F: FnMut(E) -> D,
    {
        let mut staged = (0..buf.len()).map(|_| E::default()).collect::<Vec<_>>();
        let elem_ct = self.read_buf(&mut staged)?;
        for (dst, elem) in buf.iter_mut().zip(staged).take(elem_ct) {
            *dst = f(elem);
        }
        Ok(elem_ct)
    }

    /// A fixed array is a pointer buffer whose length is known at compile time.
    pub fn write_array<E: Element, const N: usize>(&mut self, arr: &[E; N]) -> Result<usize> {
        self.write_buf(&arr[..])
    }

    pub fn write_array_with<S, E, F, const N: usize>(&mut self, arr: &[S; N], f: F) -> Result<usize>
    where
        E: Element,
        F: FnMut(&S) -> E,
    {
        self.write_buf_with(&arr[..], f)
    }

    pub fn read_array<E: Element, const N: usize>(&mut self, arr: &mut [E; N]) -> Result<usize> {
        self.read_buf(&mut arr[..])
    }

    pub fn read_array_with<E, D, F, const N: usize>(&mut self, arr: &mut [D; N], f: F) -> Result<usize>
    where
        E: Element + Default,
        F: FnMut(E) -> D,
    {
        self.read_buf_with(&mut arr[..], f)
    }
}
