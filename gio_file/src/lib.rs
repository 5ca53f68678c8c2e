mod file_io;
pub mod fs_utils;

pub use file_io::*;
