use crate::serde::Element;
use bytemuck::{Pod, TransparentWrapper, Zeroable};
use derive_more::{Deref, DerefMut, From};
use std::mem;

/// Treats a plain-old-data value as a raw scalar: its in-memory bytes are copied verbatim.
///
/// ```ignore
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct Quad { a: i32, b: i32, c: i32, d: i32 }
///
/// gio.write(&Raw(Quad { a: 25, b: 50, c: 75, d: 100 }))?;
/// ```
#[derive(Deref, DerefMut, From, Clone, Copy, PartialEq, Eq, Debug, TransparentWrapper)]
#[repr(transparent)]
#[transparent(T)]
pub struct Raw<T>(pub T);

impl<T: Pod> Raw<T> {
    pub fn slice(pods: &[T]) -> &[Self] {
        <Self as TransparentWrapper<T>>::wrap_slice(pods)
    }
    pub fn slice_mut(pods: &mut [T]) -> &mut [Self] {
        <Self as TransparentWrapper<T>>::wrap_slice_mut(pods)
    }
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Pod> Default for Raw<T> {
    fn default() -> Self {
        Self(T::zeroed())
    }
}

impl<T: Pod> Element for Raw<T> {
    fn wire_size(&self) -> usize {
        mem::size_of::<T>()
    }
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::bytes_of(&self.0));
    }
    fn decode(&mut self, bytes: &[u8]) {
        self.0 = bytemuck::pod_read_unaligned(bytes);
    }
    fn wire_eq(&self, other: &Self) -> bool {
        bytemuck::bytes_of(&self.0) == bytemuck::bytes_of(&other.0)
    }
}
