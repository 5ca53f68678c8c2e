use anyhow::Result;
use clap::{value_parser, Arg, ArgAction};
use gio_core::serde::SerializableObject;
use gio_core::transport::{ByteTransport, Granularity};
use gio_core::{front_inserter, GenericIO, StreamControl, TokenRead};
use gio_file::{fs_utils, FileIO, DEFAULT_FILE_GRANULARITY};
use log::info;
use std::collections::VecDeque;
use std::io;
use std::mem;
use std::path::PathBuf;

const DEFAULT_FILE_NAME: &str = "gio_demo.bin";

#[derive(Default, Debug)]
struct Sample {
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

fn round_trips<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    /* Scalars */
    gio.write(&10i32)?;
    gio.write(&10.5f64)?;
    let mut i = 0i32;
    let mut f = 0f64;
    gio.read(&mut i)?;
    gio.read(&mut f)?;
    info!("Scalars: {i} {f}");

    /* Objects */
    gio.write(&Sample {
        vals: [25, 50, 75, 100],
    })?;
    let mut sample = Sample::default();
    gio.read(&mut sample)?;
    info!("Object: {sample:?}");

    /* Containers */
    let src = [10i32, 11, 12, 13];
    gio.write_range(&src)?;
    let mut bounded = [0i32; 2];
    let r_ct = gio.read_range(bounded.iter_mut())?;
    info!("Range of capacity 2: {bounded:?} ({r_ct} read)");
    let mut rest = Vec::<i32>::new();
    gio.read_into(&mut rest, None)?;
    info!("The rest: {rest:?}");

    gio.write_range(&src)?;
    let mut terminated = [0i32; 4];
    let r_ct = gio.read_range_until(terminated.iter_mut(), &12)?;
    info!("Range until 12: {terminated:?} ({r_ct} read)");
    gio.read_into(&mut rest, None)?;

    gio.write_range(&src)?;
    let mut reversed = VecDeque::<i32>::new();
    gio.read_into::<i32, _>(&mut front_inserter(&mut reversed), None)?;
    info!("Front insertion: {reversed:?}");

    /* Strings */
    gio.write_str("string!")?;
    let mut s = String::new();
    gio.read_str_until(&mut s, "r", None)?;
    info!("String until 'r': {s:?}");
    s.clear();
    gio.read_string(&mut s, None)?;
    info!("The rest: {s:?}");

    Ok(())
}

/// Echoes stdin tokens through the transport, one line at a time when stdin is a terminal.
fn echo_stdin<T: ByteTransport>(gio: &mut GenericIO<T>) -> Result<()> {
    let mut stdin = io::stdin().lock();
    let token_ct = gio.write_tokens(&mut stdin, Some(" "))?;
    gio.write_control(StreamControl::EndLine)?;

    let mut echoed = String::new();
    gio.read_tokens(&mut echoed, TokenRead::default().at_most(token_ct))?;
    info!("Tokens: {echoed}");
    Ok(())
}

fn main() -> Result<()> {
    let args = clap::Command::new("gio_demo")
        .version("0.1.0")
        .about("Round-trips every value shape through a file")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("File to write and read back. Recreated on every run")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("granularity")
                .long("granularity")
                .short('g')
                .help("Bytes peeked per step when scanning for a terminator")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("stdin")
                .long("stdin")
                .help("Also echo whitespace-delimited tokens from stdin")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = match args.get_one::<PathBuf>("file") {
        Some(path) => path.clone(),
        None => fs_utils::default_file_path(DEFAULT_FILE_NAME)?,
    };
    let granularity = args
        .get_one::<usize>("granularity")
        .copied()
        .unwrap_or(DEFAULT_FILE_GRANULARITY);

    let fio = FileIO::new(&path)?.with_granularity(Granularity::new(granularity)?);
    info!("Using {path:?}");
    let mut gio = GenericIO::new(fio);

    round_trips(&mut gio)?;

    if args.get_flag("stdin") {
        echo_stdin(&mut gio)?;
    }

    gio.transport_mut().clean()?;

    Ok(())
}
