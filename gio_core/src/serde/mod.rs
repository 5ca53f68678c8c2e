//! # Serialization format
//!
//! There is no container format. A transport carries the concatenated encodings of every
//! value written, in call order, each value deciding its own byte layout.
//! A reader must know in advance the sequence of shapes the writer used.
//!
//! The unit of encoding is an [`Element`]:
//!
//! ```text
//! primitive scalar (i8 ... u128, isize, usize, f32, f64):
//!     [u8; size_of::<T>()]                // native endianness, verbatim
//!
//! bool:
//!     u8                                  // 0 or 1
//!
//! Raw<T: bytemuck::Pod>:
//!     [u8; size_of::<T>()]                // the in-memory bytes of T, padding-free
//!
//! T: SerializableObject:
//!     [u8; t.object_byte_size()]          // whatever t.to_bytes() produces
//!
//! [E; N]:
//!     e_0, e_1, ..., e_(N-1)              // each member's own encoding
//! ```
//!
//! Batches (slices, fixed arrays) are staged as `len * stride` contiguous bytes, where the
//! stride is the wire size of the batch's first element.
//! Strings are raw UTF-8 bytes with neither a length prefix nor a terminator.

mod element;
mod lengths;
mod object;
mod raw;

pub use element::*;
pub use lengths::*;
pub use object::*;
pub use raw::*;
