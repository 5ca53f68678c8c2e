use crate::serde::Element;
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;
use derive_more::From;
use log::debug;
use std::collections::{LinkedList, VecDeque};

/// A container that can take one more element.
///
/// The std sequences insert at the back. A [`FrontInserter`] inserts at the front,
/// which stores elements in the mirror of the order they were read.
pub trait Growable<E> {
    fn grow(&mut self, elem: E);
}

impl<E> Growable<E> for Vec<E> {
    fn grow(&mut self, elem: E) {
        self.push(elem);
    }
}
impl<E> Growable<E> for VecDeque<E> {
    fn grow(&mut self, elem: E) {
        self.push_back(elem);
    }
}
impl<E> Growable<E> for LinkedList<E> {
    fn grow(&mut self, elem: E) {
        self.push_back(elem);
    }
}

/// A container that supports insertion at the front.
pub trait PushFront<E> {
    fn push_front(&mut self, elem: E);
}
impl<E> PushFront<E> for VecDeque<E> {
    fn push_front(&mut self, elem: E) {
        VecDeque::push_front(self, elem);
    }
}
impl<E> PushFront<E> for LinkedList<E> {
    fn push_front(&mut self, elem: E) {
        LinkedList::push_front(self, elem);
    }
}

/// Grows a [`PushFront`] container at its front.
#[derive(From)]
pub struct FrontInserter<'a, C>(&'a mut C);

pub fn front_inserter<C>(container: &mut C) -> FrontInserter<'_, C> {
    FrontInserter(container)
}

impl<'a, E, C: PushFront<E>> Growable<E> for FrontInserter<'a, C> {
    fn grow(&mut self, elem: E) {
        self.0.push_front(elem);
    }
}

impl<T: ByteTransport> GenericIO<T> {
    /// Reads default-constructed `E`s and appends them to `dst` until end-of-data,
    /// or until `max_len` elements have been read.
    ///
    /// Each new element's own wire size decides how many bytes it takes.
    pub fn read_into<E, G>(&mut self, dst: &mut G, max_len: Option<usize>) -> Result<usize>
    where
        E: Element + Default,
        G: Growable<E>,
    {
        self.read_into_impl(dst, None, max_len, |elem| elem)
    }

    /// Like [`GenericIO::read_into`], and also stops right after appending
    /// an element equal to `terminator`.
    pub fn read_into_until<E, G>(
        &mut self,
        dst: &mut G,
        terminator: &E,
        max_len: Option<usize>,
    ) -> Result<usize>
    where
        E: Element + Default,
        G: Growable<E>,
    {
        self.read_into_impl(dst, Some(terminator), max_len, |elem| elem)
    }

    pub fn read_into_with<E, D, G, F>(
        &mut self,
        dst: &mut G,
        max_len: Option<usize>,
        f: F,
    ) -> Result<usize>
    where
        E: Element + Default,
        G: Growable<D>,
        F: FnMut(E) -> D,
    {
        self.read_into_impl(dst, None, max_len, f)
    }

    /// The terminator is compared against each element as read, before `f` transforms it.
    pub fn read_into_until_with<E, D, G, F>(
        &mut self,
        dst: &mut G,
        terminator: &E,
        max_len: Option<usize>,
        f: F,
    ) -> Result<usize>
    where
        E: Element + Default,
        G: Growable<D>,
        F: FnMut(E) -> D,
    {
        self.read_into_impl(dst, Some(terminator), max_len, f)
    }

    fn read_into_impl<E, D, G, F>(
        &mut self,
        dst: &mut G,
        terminator: Option<&E>,
        max_len: Option<usize>,
        mut f: F,
    ) -> Result<usize>
    where
        E: Element + Default,
        G: Growable<D>,
        F: FnMut(E) -> D,
    {
        let mut r_ct = 0;
        while max_len.map_or(true, |max_len| r_ct < max_len) {
            let mut elem = E::default();
            if self.read(&mut elem)? == 0 {
                break;
            }
            r_ct += 1;
            let is_term = terminator.map_or(false, |term| elem.wire_eq(term));
            dst.grow(f(elem));
            if is_term {
                break;
            }
        }
        debug!("Grew a container by {r_ct} from {}.", self.t.name());
        Ok(r_ct)
    }
}
