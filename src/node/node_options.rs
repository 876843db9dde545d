use crate::util::home_dir;
use crate::{Result, DEFAULT_CORE_IP, DEFAULT_NETWORK, DEFAULT_REST_API_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a [`Node`](crate::Node) is built from.
///
/// `node_binary`, `config_dir_name`, `node_role` and `home_dir` identify the node; the
/// remaining fields default to the built-in arabica endpoints and can be overridden per
/// instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOptions {
    pub node_binary: PathBuf,
    pub config_dir_name: String,
    /// `light`, `full`, `bridge`, ... Passed verbatim as the first subcommand.
    pub node_role: String,
    pub home_dir: PathBuf,
    #[serde(default = "default_core_ip")]
    pub core_ip: String,
    #[serde(default = "default_network")]
    pub network: String,
    /// Metrics reporting is disabled when unset or empty.
    #[serde(default)]
    pub metrics_endpoint: Option<String>,
    /// REST gateway of the consensus network. Not passed to the node binary; kept for callers
    /// that query the chain next to the node they launch.
    #[serde(default = "default_rest_api_endpoint")]
    pub rest_api_endpoint: String,
}

fn default_core_ip() -> String {
    DEFAULT_CORE_IP.to_string()
}

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_rest_api_endpoint() -> String {
    DEFAULT_REST_API_ENDPOINT.to_string()
}

impl NodeOptions {
    pub fn new<B, C, R, H>(node_binary: B, config_dir_name: C, node_role: R, home_dir: H) -> Self
    where
        B: Into<PathBuf>,
        C: ToString,
        R: ToString,
        H: Into<PathBuf>,
    {
        Self {
            node_binary: node_binary.into(),
            config_dir_name: config_dir_name.to_string(),
            node_role: node_role.to_string(),
            home_dir: home_dir.into(),
            core_ip: default_core_ip(),
            network: default_network(),
            metrics_endpoint: None,
            rest_api_endpoint: default_rest_api_endpoint(),
        }
    }

    /// Same as [`NodeOptions::new`], with the home directory of the process owner.
    pub fn from_home_env<B, C, R>(node_binary: B, config_dir_name: C, node_role: R) -> Result<Self>
    where
        B: Into<PathBuf>,
        C: ToString,
        R: ToString,
    {
        let home_dir = home_dir()?;
        Ok(Self::new(node_binary, config_dir_name, node_role, home_dir))
    }

    pub fn with_core_ip<S: ToString>(mut self, core_ip: S) -> Self {
        self.core_ip = core_ip.to_string();
        self
    }

    pub fn with_network<S: ToString>(mut self, network: S) -> Self {
        self.network = network.to_string();
        self
    }

    pub fn with_metrics_endpoint<S: ToString>(mut self, metrics_endpoint: S) -> Self {
        self.metrics_endpoint = Some(metrics_endpoint.to_string());
        self
    }

    pub fn with_rest_api_endpoint<S: ToString>(mut self, rest_api_endpoint: S) -> Self {
        self.rest_api_endpoint = rest_api_endpoint.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_arabica_defaults() {
        let options = NodeOptions::new("/usr/bin/celestia", ".celestia", "light", "/home/user");
        assert_eq!(options.core_ip, DEFAULT_CORE_IP);
        assert_eq!(options.network, DEFAULT_NETWORK);
        assert_eq!(options.rest_api_endpoint, DEFAULT_REST_API_ENDPOINT);
        assert_eq!(options.metrics_endpoint, None);
    }

    #[test]
    fn overrides_do_not_touch_other_fields() {
        let options = NodeOptions::new("celestia", ".celestia", "bridge", "/root")
            .with_network("mocha")
            .with_core_ip("rpc-mocha.pops.one");
        assert_eq!(options.network, "mocha");
        assert_eq!(options.core_ip, "rpc-mocha.pops.one");
        assert_eq!(options.node_role, "bridge");
        assert_eq!(options.rest_api_endpoint, DEFAULT_REST_API_ENDPOINT);
    }

    #[test]
    fn deserialize_with_only_required_keys() {
        let raw = r#"{
            "node_binary": "/usr/local/bin/celestia",
            "config_dir_name": ".celestia",
            "node_role": "full",
            "home_dir": "/home/user"
        }"#;
        let options: NodeOptions = serde_json::from_str(raw).expect("valid options");
        assert_eq!(
            options,
            NodeOptions::new("/usr/local/bin/celestia", ".celestia", "full", "/home/user")
        );
    }
}
