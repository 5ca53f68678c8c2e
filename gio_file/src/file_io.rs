use crate::fs_utils;
use anyhow::{Context, Result};
use gio_core::transport::{self, scanner, ByteTransport, Granularity};
use gio_core::GioError;
use log::debug;
use shorthand::ShortHand;
use std::cmp;
use std::fs::File;
use std::io::{Read, SeekFrom, Write};
use std::path::{Path, PathBuf};

const FILE_IO_NAME: &str = "FileIO";

/// Bytes peeked per step by [`FileIO`]'s terminator scan, unless overridden.
pub const DEFAULT_FILE_GRANULARITY: usize = 64;

/// A file-backed transport.
///
/// Writes append at the end of the file. Reads consume from a read offset that only moves forward,
/// so everything written can be read back in order.
///
/// The file is exclusively locked for the lifetime of the instance.
#[derive(ShortHand)]
#[shorthand(disable(get))]
pub struct FileIO {
    #[shorthand(enable(get))]
    path: PathBuf,
    file: File,
    r_offset: u64,
    granularity: Granularity,
}

impl FileIO {
    /// Creates the file, or truncates it if it exists.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs_utils::open_locked_exclusive(path).map_err(|source| {
            GioError::Construction {
                name: FILE_IO_NAME.into(),
                target: format!("{path:?}"),
                source,
            }
        })?;
        debug!("{FILE_IO_NAME} opened {path:?}.");
        Ok(Self {
            path: path.into(),
            file,
            r_offset: 0,
            granularity: Granularity::new(DEFAULT_FILE_GRANULARITY)?,
        })
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Count of bytes consumed by reads so far.
    pub fn read_offset(&self) -> u64 {
        self.r_offset
    }

    /// Empties the file and rewinds the read offset.
    pub fn clean(&mut self) -> Result<()> {
        fs_utils::truncate(&self.file, &self.path)?;
        self.r_offset = 0;
        debug!("{FILE_IO_NAME} cleaned {:?}.", self.path);
        Ok(())
    }

    /// Reads at `r_offset + skip_len` without moving the read offset.
    fn peek(&mut self, skip_len: u64, buf: &mut [u8]) -> Result<usize> {
        fs_utils::seek(&self.file, SeekFrom::Start(self.r_offset + skip_len), &self.path)?;
        let r_len = (&self.file)
            .read(buf)
            .with_context(|| format!("read {:?}", self.path))?;
        Ok(r_len)
    }
}

impl ByteTransport for FileIO {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let r_len = self.peek(0, buf)?;
        self.r_offset += r_len as u64;
        Ok(r_len)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        fs_utils::seek(&self.file, SeekFrom::End(0), &self.path)?;
        (&self.file)
            .write_all(buf)
            .with_context(|| format!("write {:?}", self.path))?;
        Ok(buf.len())
    }

    fn name(&self) -> &str {
        FILE_IO_NAME
    }

    fn flush(&mut self) -> Result<()> {
        (&self.file)
            .flush()
            .with_context(|| format!("flush {:?}", self.path))
    }

    fn scan_granularity(&self) -> Granularity {
        self.granularity
    }

    /// Peeks one granule at a time, and consumes bytes only up to the end of the match,
    /// so nothing past the terminator is lost.
    fn read_until(&mut self, buf: &mut [u8], terminator: &[u8]) -> Result<usize> {
        if terminator.is_empty() {
            return transport::fill(self, buf);
        }

        let mut peek_len = 0;
        let consume_len = loop {
            let peek_hi = cmp::min(peek_len + *self.granularity, buf.len());
            if peek_hi == peek_len {
                break peek_len;
            }
            let r_len = self.peek(peek_len as u64, &mut buf[peek_len..peek_hi])?;
            if r_len == 0 {
                break peek_len;
            }
            peek_len += r_len;

            if let Some(end) = scanner::match_end(&buf[..peek_len], terminator) {
                break end;
            }
        };

        self.r_offset += consume_len as u64;
        Ok(consume_len)
    }
}
