use std::mem;

/// A value with a fixed-for-the-call wire encoding: a scalar, a [`crate::serde::Raw`] POD,
/// a [`crate::serde::SerializableObject`], or a fixed array of those.
///
/// Every shape handled by [`crate::GenericIO`] bottoms out at `Element`s.
pub trait Element {
    /// Count of bytes this value occupies on the wire.
    fn wire_size(&self) -> usize;

    /// Appends exactly [`Element::wire_size`] bytes to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Overwrites `self` from exactly [`Element::wire_size`] bytes.
    fn decode(&mut self, bytes: &[u8]);

    /// Equality used when `self` serves as a terminator.
    fn wire_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_element_for_primitives {
    ( $( $prim:ty ),* ) => {
        $(
            impl Element for $prim {
                fn wire_size(&self) -> usize {
                    mem::size_of::<$prim>()
                }
                fn encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }
                fn decode(&mut self, bytes: &[u8]) {
                    let mut buf = [0u8; mem::size_of::<$prim>()];
                    buf.copy_from_slice(bytes);
                    *self = <$prim>::from_ne_bytes(buf);
                }
                fn wire_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_element_for_primitives!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Element for bool {
    fn wire_size(&self) -> usize {
        mem::size_of::<u8>()
    }
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
    fn decode(&mut self, bytes: &[u8]) {
        *self = bytes[0] != 0;
    }
    fn wire_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// A fixed array is one element: its members back to back.
impl<E: Element, const N: usize> Element for [E; N] {
    fn wire_size(&self) -> usize {
        self.iter().map(Element::wire_size).sum()
    }
    fn encode(&self, out: &mut Vec<u8>) {
        for member in self {
            member.encode(out);
        }
    }
    fn decode(&mut self, bytes: &[u8]) {
        let mut lo = 0;
        for member in self.iter_mut() {
            let hi = lo + member.wire_size();
            member.decode(&bytes[lo..hi]);
            lo = hi;
        }
    }
    fn wire_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.wire_eq(b))
    }
}
