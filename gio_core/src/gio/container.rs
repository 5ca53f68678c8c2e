use crate::serde::Element;
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;

impl<T: ByteTransport> GenericIO<T> {
    /// Writes each element of a range in order, one transfer per element.
    pub fn write_range<'e, E, I>(&mut self, range: I) -> Result<usize>
    where
        E: 'e + Element,
        I: IntoIterator<Item = &'e E>,
    {
        let mut w_ct = 0;
        for elem in range {
            w_ct += self.write(elem)?;
        }
        Ok(w_ct)
    }

    pub fn write_range_with<'s, S, E, I, F>(&mut self, range: I, mut f: F) -> Result<usize>
    where
        S: 's,
        E: Element,
        I: IntoIterator<Item = &'s S>,
        F: FnMut(&S) -> E,
    {
        let mut w_ct = 0;
        for src in range {
            w_ct += self.write(&f(src))?;
        }
        Ok(w_ct)
    }

    /// Reads into each slot of a range in order, stopping at the range's end or at end-of-data.
    /// Never touches slots past the last element read.
    pub fn read_range<'e, E, I>(&mut self, range: I) -> Result<usize>
    where
        E: 'e + Element,
        I: IntoIterator<Item = &'e mut E>,
    {
        self.read_range_impl(range, None)
    }

    /// Like [`GenericIO::read_range`], and also stops right after storing
    /// an element equal to `terminator`.
    pub fn read_range_until<'e, E, I>(&mut self, range: I, terminator: &E) -> Result<usize>
    where
        E: 'e + Element,
        I: IntoIterator<Item = &'e mut E>,
    {
        self.read_range_impl(range, Some(terminator))
    }

    pub fn read_range_with<'d, E, D, I, F>(&mut self, range: I, f: F) -> Result<usize>
    where
        D: 'd,
        E: Element + Default,
        I: IntoIterator<Item = &'d mut D>,
        F: FnMut(E) -> D,
    {
        self.read_range_with_impl(range, None, f)
    }

    /// The terminator is compared against each element as read, before `f` transforms it.
    pub fn read_range_until_with<'d, E, D, I, F>(
        &mut self,
        range: I,
        terminator: &E,
        f: F,
    ) -> Result<usize>
    where
        D: 'd,
        E: Element + Default,
        I: IntoIterator<Item = &'d mut D>,
        F: FnMut(E) -> D,
    {
        self.read_range_with_impl(range, Some(terminator), f)
    }

    fn read_range_impl<'e, E, I>(&mut self, range: I, terminator: Option<&E>) -> Result<usize>
    where
        E: 'e + Element,
        I: IntoIterator<Item = &'e mut E>,
    {
        let mut r_ct = 0;
        for slot in range {
            if self.read(slot)? == 0 {
                break;
            }
            r_ct += 1;
            if terminator.map_or(false, |term| slot.wire_eq(term)) {
                break;
            }
        }
        Ok(r_ct)
    }

    fn read_range_with_impl<'d, E, D, I, F>(
        &mut self,
        range: I,
        terminator: Option<&E>,
        mut f: F,
    ) -> Result<usize>
    where
        D: 'd,
        E: Element + Default,
        I: IntoIterator<Item = &'d mut D>,
        F: FnMut(E) -> D,
    {
        let mut r_ct = 0;
        for slot in range {
            let mut elem = E::default();
            if self.read(&mut elem)? == 0 {
                break;
            }
            r_ct += 1;
            let is_term = terminator.map_or(false, |term| elem.wire_eq(term));
            *slot = f(elem);
            if is_term {
                break;
            }
        }
        Ok(r_ct)
    }
}
