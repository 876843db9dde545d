use crate::{Error, NodeCommand, Result};
use std::process::Stdio;

/// Runs a [`NodeCommand`] to completion.
pub trait CommandRunner {
    fn run(&self, command: &NodeCommand) -> Result<()>;
}

/// Runs commands as child processes of the current process, blocking until they exit.
///
/// The environment is inherited, stdin and stdout are detached, stderr is inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &NodeCommand) -> Result<()> {
        let status = command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::InitializationSpawn {
                command: command.to_string(),
                source,
            })?;
        if !status.success() {
            return Err(Error::InitializationExit {
                command: command.to_string(),
                status,
            });
        }
        Ok(())
    }
}
