use anyhow::Result;
use gio_core::transport::ByteTransport;
use gio_core::GenericIO;

pub fn scalars<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    assert_eq!(1, gio.write(&10i32)?);
    assert_eq!(1, gio.write(&10.5f64)?);
    assert_eq!(1, gio.write(&u128::MAX)?);

    let mut i = 0i32;
    let mut f = 0f64;
    let mut u = 0u128;
    assert_eq!(1, gio.read(&mut i)?);
    assert_eq!(1, gio.read(&mut f)?);
    assert_eq!(1, gio.read(&mut u)?);
    assert_eq!(10, i);
    assert_eq!(10.5, f);
    assert_eq!(u128::MAX, u);

    Ok(())
}

pub fn partial_scalar_at_eof<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    gio.write(&7u16)?;

    let mut i = -1i64;
    assert_eq!(0, gio.read(&mut i)?);
    assert_eq!(-1, i);

    Ok(())
}
