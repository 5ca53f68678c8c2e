use crate::serde::Element;

/// Lets a domain type control its own byte encoding.
///
/// The wire size may differ from the in-memory size, and may differ between instances.
/// Inside one batch (a slice or fixed array) the dispatcher uses the first element's size
/// as the stride for all elements, so heterogeneous sizes within one batch are unsupported.
///
/// These methods are meant to be called by [`crate::GenericIO`] only.
pub trait SerializableObject {
    /// Count of bytes the object occupies on the wire. Queried before every encode and decode.
    fn object_byte_size(&self) -> usize;

    /// Exactly [`SerializableObject::object_byte_size`] bytes. Must not mutate.
    fn to_bytes(&self) -> Vec<u8>;

    /// Receives exactly as many bytes as `self.object_byte_size()` reported before the read,
    /// and overwrites `self` to match.
    fn from_bytes(&mut self, bytes: &[u8]);

    /// Equality used when an object serves as a terminator.
    /// Compares encoded bytes unless overridden.
    fn same_as(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl<O: SerializableObject> Element for O {
    fn wire_size(&self) -> usize {
        self.object_byte_size()
    }
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }
    fn decode(&mut self, bytes: &[u8]) {
        self.from_bytes(bytes);
    }
    fn wire_eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}
