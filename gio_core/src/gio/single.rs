use crate::serde::{Element, Stride};
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;
use log::trace;
use std::any;

impl<T: ByteTransport> GenericIO<T> {
    /// Writes one scalar or object. Returns 1.
    pub fn write<E: Element>(&mut self, elem: &E) -> Result<usize> {
        let stride = Stride::of(elem)?;
        let mut staging = Vec::with_capacity(*stride);
        stride.encode_into(elem, &mut staging)?;
        self.put(&staging)?;
        trace!(
            "Wrote a {} of {} bytes to {}.",
            any::type_name::<E>(),
            *stride,
            self.t.name()
        );
        Ok(1)
    }

    /// Writes `f(src)`.
    pub fn write_with<S, E, F>(&mut self, src: &S, f: F) -> Result<usize>
    where
        E: Element,
        F: FnOnce(&S) -> E,
    {
        self.write(&f(src))
    }

    /// Reads one scalar or object in place. Returns 1, or 0 at end-of-data.
    ///
    /// The destination must already exist: its own wire size decides how many bytes are read.
    /// If the transport runs dry mid-element, `elem` is left untouched.
    pub fn read<E: Element>(&mut self, elem: &mut E) -> Result<usize> {
        let stride = Stride::of(elem)?;
        let mut staging = vec![0u8; *stride];
        let r_len = self.take(&mut staging)?;
        if r_len < *stride {
            trace!(
                "{} ran dry after {r_len} of {} bytes of a {}.",
                self.t.name(),
                *stride,
                any::type_name::<E>()
            );
            return Ok(0);
        }
        stride.decode_from(elem, &staging);
        Ok(1)
    }

    /// Reads a default-constructed `E`, then stores `f(e)` into `dst`.
    pub fn read_with<E, D, F>(&mut self, dst: &mut D, f: F) -> Result<usize>
    where
        E: Element + Default,
        F: FnOnce(E) -> D,
    {
        let mut elem = E::default();
        if self.read(&mut elem)? == 0 {
            return Ok(0);
        }
        *dst = f(elem);
        Ok(1)
    }
}
