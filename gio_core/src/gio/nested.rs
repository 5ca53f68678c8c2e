use crate::serde::Element;
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;
use std::collections::{LinkedList, VecDeque};

/// A container of containers, unwrapped one dimension at a time down to its [`Element`]s.
///
/// Visitors return `Ok(true)` to keep going and `Ok(false)` to stop the whole walk.
pub trait Nested {
    type Leaf: Element;

    fn visit_leaves<F>(&self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&Self::Leaf) -> Result<bool>;

    fn visit_leaves_mut<F>(&mut self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&mut Self::Leaf) -> Result<bool>;
}

impl<E: Element> Nested for E {
    type Leaf = E;

    fn visit_leaves<F>(&self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&Self::Leaf) -> Result<bool>,
    {
        f(self)
    }

    fn visit_leaves_mut<F>(&mut self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&mut Self::Leaf) -> Result<bool>,
    {
        f(self)
    }
}

macro_rules! impl_nested_for_sequences {
    ( $( $seq:ident ),* ) => {
        $(
            impl<C: Nested> Nested for $seq<C> {
                type Leaf = C::Leaf;

                fn visit_leaves<F>(&self, f: &mut F) -> Result<bool>
                where
                    F: FnMut(&Self::Leaf) -> Result<bool>,
                {
                    for inner in self.iter() {
                        if !inner.visit_leaves(f)? {
                            return Ok(false);
                        }
                    }
                    Ok(true)
                }

                fn visit_leaves_mut<F>(&mut self, f: &mut F) -> Result<bool>
                where
                    F: FnMut(&mut Self::Leaf) -> Result<bool>,
                {
                    for inner in self.iter_mut() {
                        if !inner.visit_leaves_mut(f)? {
                            return Ok(false);
                        }
                    }
                    Ok(true)
                }
            }
        )*
    };
}

impl_nested_for_sequences!(Vec, VecDeque, LinkedList);

impl<C: Nested> Nested for [C] {
    type Leaf = C::Leaf;

    fn visit_leaves<F>(&self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&Self::Leaf) -> Result<bool>,
    {
        for inner in self {
            if !inner.visit_leaves(f)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn visit_leaves_mut<F>(&mut self, f: &mut F) -> Result<bool>
    where
        F: FnMut(&mut Self::Leaf) -> Result<bool>,
    {
        for inner in self {
            if !inner.visit_leaves_mut(f)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<T: ByteTransport> GenericIO<T> {
    /// Writes every leaf of an N-dimensional container, outermost dimension first.
    /// Returns the count of leaves written.
    pub fn write_nested<C: Nested + ?Sized>(&mut self, container: &C) -> Result<usize> {
        let mut w_ct = 0;
        container.visit_leaves(&mut |leaf| {
            w_ct += self.write(leaf)?;
            Ok(true)
        })?;
        Ok(w_ct)
    }

    pub fn write_nested_with<C, E, F>(&mut self, container: &C, mut f: F) -> Result<usize>
    where
        C: Nested + ?Sized,
        E: Element,
        F: FnMut(&C::Leaf) -> E,
    {
        let mut w_ct = 0;
        container.visit_leaves(&mut |leaf| {
            w_ct += self.write(&f(leaf))?;
            Ok(true)
        })?;
        Ok(w_ct)
    }

    /// Fills the existing leaves of an N-dimensional container in write order,
    /// stopping at end-of-data. The container's shape is not changed.
    pub fn read_nested<C: Nested + ?Sized>(&mut self, container: &mut C) -> Result<usize> {
        let mut r_ct = 0;
        container.visit_leaves_mut(&mut |leaf| {
            if self.read(leaf)? == 0 {
                return Ok(false);
            }
            r_ct += 1;
            Ok(true)
        })?;
        Ok(r_ct)
    }

    pub fn read_nested_with<C, E, F>(&mut self, container: &mut C, mut f: F) -> Result<usize>
    where
        C: Nested + ?Sized,
        E: Element + Default,
        F: FnMut(E) -> C::Leaf,
    {
        let mut r_ct = 0;
        container.visit_leaves_mut(&mut |leaf| {
            let mut elem = E::default();
            if self.read(&mut elem)? == 0 {
                return Ok(false);
            }
            r_ct += 1;
            *leaf = f(elem);
            Ok(true)
        })?;
        Ok(r_ct)
    }
}
