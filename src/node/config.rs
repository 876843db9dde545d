use crate::{CommandRunner, Error, Node, Result, SystemRunner, STORAGE_DIR_MODE};
use std::fs::DirBuilder;
use std::path::{self, Path, PathBuf};

/// What [`Node::ensure_config`] found, or did, for the node store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Created,
    Existing,
}

/// What [`Node::ensure_config`] found, or did, for `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigState {
    /// `<role> init` ran and exited successfully.
    Initialized,
    Existing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigReport {
    pub directory: DirectoryState,
    pub config: ConfigState,
}

impl Node {
    /// Make sure the node store and its `config.toml` exist, running `<role> init` through the
    /// node binary when the config is missing.
    ///
    /// Calling it again once the config exists does nothing.
    pub fn ensure_config(&self) -> Result<ConfigReport> {
        self.ensure_config_with(&SystemRunner)
    }

    /// Same as [`Node::ensure_config`], running the init command with `runner`.
    pub fn ensure_config_with<R: CommandRunner>(&self, runner: &R) -> Result<ConfigReport> {
        let directory = self.ensure_storage_dir()?;

        let config_path = absolute_path(&self.config_path()).map_err(|err| {
            crate::error!("[Node {}] {}", self.node_role(), err);
            err
        })?;

        if config_path.exists() {
            crate::info!(
                "[Node {}] config already initialized: \"{}\"",
                self.node_role(),
                config_path.display()
            );
            return Ok(ConfigReport {
                directory,
                config: ConfigState::Existing,
            });
        }

        // The init command is trusted to write `config_path`; it is not checked afterwards.
        let command = self.init_command();
        crate::debug!("[Node {}] running `{}`", self.node_role(), command);
        runner.run(&command).map_err(|err| {
            crate::error!(
                "[Node {}] failed to initialize config, error: {}",
                self.node_role(),
                err
            );
            err
        })?;
        crate::info!(
            "[Node {}] config initialized: \"{}\"",
            self.node_role(),
            config_path.display()
        );
        Ok(ConfigReport {
            directory,
            config: ConfigState::Initialized,
        })
    }

    fn ensure_storage_dir(&self) -> Result<DirectoryState> {
        let storage_path = self.storage_path();
        if storage_path.exists() {
            crate::info!(
                "[Node {}] node store already exists: \"{}\"",
                self.node_role(),
                storage_path.display()
            );
            return Ok(DirectoryState::Existing);
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(STORAGE_DIR_MODE);
        }
        builder.create(storage_path).map_err(|source| {
            crate::error!(
                "[Node {}] failed to create node store \"{}\", error: {}",
                self.node_role(),
                storage_path.display(),
                source
            );
            Error::DirectoryCreation {
                path: storage_path.to_path_buf(),
                source,
            }
        })?;
        crate::info!(
            "[Node {}] node store created: \"{}\"",
            self.node_role(),
            storage_path.display()
        );
        Ok(DirectoryState::Created)
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    path::absolute(path).map_err(|source| Error::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}
