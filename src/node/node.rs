use crate::{NodeOptions, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// A celestia data-availability node that has not been started yet.
///
/// The node store is derived once, as `<home>/<config_dir_name>/<role>-node`, and never
/// changes afterwards. Spawning and supervising the process built by
/// [`Node::start_command`] is up to the caller.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) node_options: NodeOptions,
    pub(super) storage_path: PathBuf,
}

impl Node {
    pub fn new(node_options: NodeOptions) -> Self {
        let storage_path = storage_path(
            &node_options.home_dir,
            &node_options.config_dir_name,
            &node_options.node_role,
        );
        Self {
            node_options,
            storage_path,
        }
    }

    pub fn node_options(&self) -> &NodeOptions {
        &self.node_options
    }

    pub fn node_binary(&self) -> &Path {
        &self.node_options.node_binary
    }

    pub fn config_dir_name(&self) -> &str {
        &self.node_options.config_dir_name
    }

    pub fn node_role(&self) -> &str {
        &self.node_options.node_role
    }

    /// Directory the node keeps its config and data in.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// `config.toml` inside the node store, as written by `<role> init`.
    pub fn config_path(&self) -> PathBuf {
        self.storage_path.join(CONFIG_FILE_NAME)
    }

    pub fn core_ip(&self) -> &str {
        &self.node_options.core_ip
    }

    pub fn network(&self) -> &str {
        &self.node_options.network
    }

    /// `None` when metrics reporting is disabled.
    pub fn metrics_endpoint(&self) -> Option<&str> {
        self.node_options
            .metrics_endpoint
            .as_deref()
            .filter(|endpoint| !endpoint.is_empty())
    }

    /// Passthrough of [`NodeOptions::rest_api_endpoint`]; no command uses it.
    pub fn rest_api_endpoint(&self) -> &str {
        &self.node_options.rest_api_endpoint
    }
}

// An empty `home` is joined as-is and yields a relative store.
fn storage_path(home: &Path, config_dir_name: &str, node_role: &str) -> PathBuf {
    home.join(config_dir_name).join(format!("{}-node", node_role))
}
