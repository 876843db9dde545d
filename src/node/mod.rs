mod command;
mod config;
mod node;
mod node_options;
mod runner;

pub use command::NodeCommand;
pub use config::{ConfigReport, ConfigState, DirectoryState};
pub use node::Node;
pub use node_options::NodeOptions;
pub use runner::{CommandRunner, SystemRunner};
