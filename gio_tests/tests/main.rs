use anyhow::Result;
use gio_core::transport::{Granularity, MemTransport};
use gio_core::GenericIO;
use gio_file::{fs_utils, FileIO};

mod shapes;
use shapes::test_shapes_serially;

fn file_gio(file_name: &str) -> Result<GenericIO<FileIO>> {
    let path = fs_utils::default_file_path(file_name)?;
    let fio = FileIO::new(path)?;
    Ok(GenericIO::new(fio))
}

#[test]
fn integration_test_file() -> Result<()> {
    let mut gio = file_gio("integration_file.bin")?;

    test_shapes_serially(&mut gio)?;

    let fio = gio.into_inner();
    assert!(fio.read_offset() > 0);
    Ok(())
}

#[test]
fn integration_test_file_byte_granular() -> Result<()> {
    let fio = file_gio("integration_file_byte_granular.bin")?.into_inner();
    let mut gio = GenericIO::new(fio.with_granularity(Granularity::new(1)?));

    test_shapes_serially(&mut gio)?;

    Ok(())
}

#[test]
fn integration_test_file_cleaned_between_runs() -> Result<()> {
    let mut gio = file_gio("integration_file_cleaned.bin")?;

    for _ in 0..3 {
        test_shapes_serially(&mut gio)?;
        gio.transport_mut().clean()?;
        assert_eq!(0, gio.transport().read_offset());
    }

    Ok(())
}

#[test]
fn integration_test_mem() -> Result<()> {
    let mut gio = GenericIO::new(MemTransport::new());

    test_shapes_serially(&mut gio)?;

    assert_eq!(0, gio.transport().remaining());
    Ok(())
}
