use crate::Node;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A program and its argument list, ready to be spawned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl NodeCommand {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            program: program.into(),
            args: args
                .into_iter()
                .map(|arg| arg.as_ref().to_os_string())
                .collect(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Return a `Command` for this program and arguments. Stdio, environment and working
    /// directory are left to the caller.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Lossy for non UTF-8 arguments; only meant for logs and error messages.
impl fmt::Display for NodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

impl Node {
    /// `<role> init --p2p.network <network> --node.store <store>`
    pub fn init_command(&self) -> NodeCommand {
        let args: [&OsStr; 6] = [
            self.node_role().as_ref(),
            "init".as_ref(),
            "--p2p.network".as_ref(),
            self.network().as_ref(),
            "--node.store".as_ref(),
            self.storage_path().as_os_str(),
        ];
        NodeCommand::new(self.node_binary(), args)
    }

    /// `<role> start --core.ip <core> --node.store <store> --gateway
    /// --gateway.deprecated-endpoints --p2p.network <network>`, followed by
    /// `--metrics --metrics.endpoint <endpoint>` when a metrics endpoint is set.
    pub fn start_command(&self) -> NodeCommand {
        let mut args: Vec<&OsStr> = vec![
            self.node_role().as_ref(),
            "start".as_ref(),
            "--core.ip".as_ref(),
            self.core_ip().as_ref(),
            "--node.store".as_ref(),
            self.storage_path().as_os_str(),
            "--gateway".as_ref(),
            "--gateway.deprecated-endpoints".as_ref(),
            "--p2p.network".as_ref(),
            self.network().as_ref(),
        ];
        if let Some(metrics_endpoint) = self.metrics_endpoint() {
            args.extend([
                OsStr::new("--metrics"),
                OsStr::new("--metrics.endpoint"),
                OsStr::new(metrics_endpoint),
            ]);
        }
        NodeCommand::new(self.node_binary(), args)
    }
}
