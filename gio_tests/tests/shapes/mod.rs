mod containers;
mod objects;
mod scalars;
mod streams;
mod strings;

use anyhow::Result;
use gio_core::transport::ByteTransport;
use gio_core::GenericIO;

/// Every test writes, then reads back exactly what it wrote,
/// so they can share one transport in any order.
pub fn test_shapes_serially<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    scalars::scalars(gio)?;
    scalars::partial_scalar_at_eof(gio)?;

    objects::serializable_object(gio)?;
    objects::pod_structs(gio)?;

    containers::bounded_capacity(gio)?;
    containers::untouched_tail(gio)?;
    containers::terminator_inclusive(gio)?;
    containers::front_insertion(gio)?;
    containers::nested(gio)?;
    containers::shuffled_subsets(gio)?;

    strings::until_terminator(gio)?;
    strings::nul_terminated(gio)?;
    strings::long_lines(gio)?;

    streams::tokens(gio)?;
    streams::parsed_tokens(gio)?;
    streams::end_line(gio)?;

    Ok(())
}
