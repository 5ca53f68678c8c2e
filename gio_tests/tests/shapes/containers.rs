use anyhow::Result;
use gio_core::transport::ByteTransport;
use gio_core::{front_inserter, GenericIO};
use itertools::Itertools;
use rand::seq::SliceRandom;
use std::collections::{LinkedList, VecDeque};

const SRC: [i32; 4] = [10, 11, 12, 13];

pub fn bounded_capacity<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write_range(&SRC)?;

    let mut dst = [0i32; 2];
    assert_eq!(2, gio.read_range(dst.iter_mut())?);
    assert_eq!([10, 11], dst);

    let mut rest = Vec::new();
    assert_eq!(2, gio.read_into(&mut rest, Some(2))?);
    assert_eq!(vec![12, 13], rest);

    Ok(())
}

pub fn untouched_tail<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write_array(&SRC)?;

    let mut dst = [-1i32; 5];
    assert_eq!(4, gio.read_array(&mut dst)?);
    assert_eq!([10, 11, 12, 13, -1], dst);

    Ok(())
}

pub fn terminator_inclusive<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write_buf(&SRC)?;

    let mut dst = LinkedList::from([0i32; 4]);
    assert_eq!(3, gio.read_range_until(&mut dst, &12)?);
    assert_eq!(LinkedList::from([10, 11, 12, 0]), dst);

    let mut last = 0i32;
    assert_eq!(1, gio.read(&mut last)?);
    assert_eq!(13, last);

    Ok(())
}

pub fn front_insertion<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write_range(&SRC)?;

    let mut dst = VecDeque::<i32>::new();
    let r_ct = gio.read_into::<i32, _>(&mut front_inserter(&mut dst), Some(SRC.len()))?;
    assert_eq!(4, r_ct);
    assert_eq!(VecDeque::from([13, 12, 11, 10]), dst);

    Ok(())
}

pub fn nested<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let src = vec![
        vec![LinkedList::from([1u32, 2]), LinkedList::from([3])],
        vec![],
        vec![LinkedList::from([4, 5, 6])],
    ];
    assert_eq!(6, gio.write_nested(&src)?);

    let mut dst = vec![vec![0u32; 4], vec![0u32; 2]];
    assert_eq!(6, gio.read_nested(&mut dst)?);
    assert_eq!(vec![vec![1, 2, 3, 4], vec![5, 6]], dst);

    // A fixed array is a single leaf.
    gio.write_nested(&src)?;
    let mut rows = [[0u32; 3]; 2];
    assert_eq!(2, gio.read_nested(&mut rows[..])?);
    assert_eq!([[1, 2, 3], [4, 5, 6]], rows);

    Ok(())
}

/// Writes every subset of a shuffled sequence, then reads them all back.
pub fn shuffled_subsets<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let mut vals = (0..6u64).collect::<Vec<_>>();
    vals.shuffle(&mut rand::thread_rng());

    let subsets = vals.iter().copied().powerset().collect::<Vec<_>>();
    for subset in subsets.iter() {
        gio.write_buf(subset)?;
    }
    for subset in subsets.iter() {
        let mut dst = vec![u64::MAX; subset.len()];
        assert_eq!(subset.len(), gio.read_buf(&mut dst)?);
        assert_eq!(subset, &dst);
    }

    Ok(())
}
