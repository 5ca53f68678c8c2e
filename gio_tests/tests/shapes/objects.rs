use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use gio_core::serde::{Raw, SerializableObject};
use gio_core::transport::ByteTransport;
use gio_core::GenericIO;
use std::mem;

/// Encodes its four fields but not its label.
#[derive(Default, Clone, PartialEq, Debug)]
struct Sample {
    label: String,
    vals: [i32; 4],
}

impl SerializableObject for Sample {
    fn object_byte_size(&self) -> usize {
        mem::size_of::<[i32; 4]>()
    }
    fn to_bytes(&self) -> Vec<u8> {
        self.vals.iter().flat_map(|i| i.to_ne_bytes()).collect()
    }
    fn from_bytes(&mut self, bytes: &[u8]) {
        for (val, chunk) in self.vals.iter_mut().zip(bytes.chunks_exact(4)) {
            *val = i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
struct Vertex {
    pos: [f32; 3],
    id: u32,
}

pub fn serializable_object<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let src = Sample {
        label: String::from("not on the wire"),
        vals: [25, 50, 75, 100],
    };
    assert_eq!(1, gio.write(&src)?);

    let mut dst = Sample::default();
    assert_eq!(1, gio.read(&mut dst)?);
    assert_eq!([25, 50, 75, 100], dst.vals);
    assert_eq!("", dst.label);

    Ok(())
}

pub fn pod_structs<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let src = (0..4u32)
        .map(|id| {
            Raw(Vertex {
                pos: [id as f32, 0.5, -1.0],
                id,
            })
        })
        .collect::<Vec<_>>();
    assert_eq!(4, gio.write_buf(&src)?);

    let mut dst = vec![Raw::<Vertex>::default(); 4];
    assert_eq!(4, gio.read_buf(&mut dst)?);
    assert_eq!(src, dst);
    assert_eq!(3, dst[3].id);

    Ok(())
}
