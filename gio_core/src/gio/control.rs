use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::Result;

/// Out-of-band instructions for a text-oriented medium.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StreamControl {
    /// Writes a line feed, then flushes.
    EndLine,
    Flush,
}

impl<T: ByteTransport> GenericIO<T> {
    /// Returns the count of bytes the instruction wrote.
    pub fn write_control(&mut self, ctl: StreamControl) -> Result<usize> {
        match ctl {
            StreamControl::EndLine => {
                self.put(b"\n")?;
                self.flush()?;
                Ok(1)
            }
            StreamControl::Flush => {
                self.flush()?;
                Ok(0)
            }
        }
    }
}
