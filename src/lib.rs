pub mod error;
pub mod logger;
mod node;
pub mod util;

pub use error::{Error, Result};
pub use logger::LOG_TARGET;
#[doc(hidden)]
pub use log;
pub use node::{
    CommandRunner, ConfigReport, ConfigState, DirectoryState, Node, NodeCommand, NodeOptions,
    SystemRunner,
};

/// Consensus node the data-availability node fetches blocks from.
pub const DEFAULT_CORE_IP: &str = "consensus-full-arabica-9.celestia-arabica.com";
/// REST gateway of the default consensus network.
pub const DEFAULT_REST_API_ENDPOINT: &str = "https://api-arabica-9.consensus.celestia-arabica.com";
pub const DEFAULT_NETWORK: &str = "arabica";

/// File the node binary writes into its store on `init`.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Permission bits of a freshly created node store.
pub const STORAGE_DIR_MODE: u32 = 0o755;
