//! Error taxonomy for a download run.
//!
//! Components return these instead of exiting; the binary maps them to a
//! process exit code via [`Error::exit_code`].

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server answered with anything other than 200.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },

    /// libcurl failed before a status was received (DNS, connect, stall, ...).
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("response from {url} is not valid UTF-8")]
    Encoding {
        url: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("malformed manifest for family {family:?}")]
    Manifest {
        family: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output directory would be the current directory itself (empty family name).
    #[error("font family name is empty")]
    EmptyWorkdir,

    /// Manifest filename would land outside the working directory.
    #[error("refusing to write outside the working directory: {0:?}")]
    UnsafePath(String),

    #[error("{op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Exit code for the process: 2 for an upstream HTTP status, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Status { .. } => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
