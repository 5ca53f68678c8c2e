mod error;
mod gio;
pub mod serde;
pub mod transport;

pub use error::*;
pub use gio::*;
