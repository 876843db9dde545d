//! Errors returned while preparing a node.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The node store directory could not be created.
    #[error("failed to create node store \"{}\": {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The init subprocess could not be started or waited on.
    #[error("failed to run `{command}`: {source}")]
    InitializationSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The init subprocess exited unsuccessfully.
    #[error("`{command}` exited with {status}")]
    InitializationExit { command: String, status: ExitStatus },

    /// The absolute path of the config file could not be computed.
    #[error("failed to resolve \"{}\": {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The home directory of the process owner is unknown.
    #[error("home directory is not available")]
    HomeDirectoryUnavailable,
}
