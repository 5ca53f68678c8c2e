use derive_more::Display;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The transport primitive that was running when a failure happened.
#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransportOp {
    #[display(fmt = "reading")]
    Read,
    #[display(fmt = "writing")]
    Write,
    #[display(fmt = "flushing")]
    Flush,
}

#[derive(Error, Debug)]
pub enum TransportFault {
    #[error("accepted {written} of {requested} bytes")]
    ShortWrite { requested: usize, written: usize },
    #[error("medium is closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(String),
}

/// Classified failures.
///
/// Every fallible function in this workspace returns [`anyhow::Result`].
/// When the failure is one of these, callers recover it with
/// `err.downcast_ref::<GioError>()`.
///
/// Clean end-of-data is never a `GioError`. It surfaces as a count smaller than requested.
#[derive(Error, Debug)]
pub enum GioError {
    /// The medium could not satisfy a read, write or flush.
    #[error("IOFailure {op}: {name}")]
    Transport {
        name: String,
        op: TransportOp,
        #[source]
        reason: TransportFault,
    },

    /// A transport adapter could not be initialized.
    #[error("{name} failed to open {target}")]
    Construction {
        name: String,
        target: String,
        #[source]
        source: io::Error,
    },

    /// An element's declared wire size disagrees with the bytes it produced.
    #[error("{type_name} violates its wire size contract: {detail}")]
    ContractViolation {
        type_name: &'static str,
        detail: String,
    },

    #[error("Text read from {name} is not UTF-8")]
    InvalidText {
        name: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl GioError {
    pub fn transport<S: Into<String>>(name: S, op: TransportOp, reason: TransportFault) -> Self {
        Self::Transport {
            name: name.into(),
            op,
            reason,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
