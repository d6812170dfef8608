//! Launching targets with the operating system's "open" facility.

mod command;

pub use command::{quote_for_cmd, OpenCommand, TargetQuoting};

use std::process::Command;

use crate::error::{Error, Result};

/// Something that can open a target and report an exit code.
pub trait Opener {
    /// Open `target`, blocking until the launcher exits.
    ///
    /// # Errors
    ///
    /// Fails when the launcher cannot be found or started. A launcher that
    /// runs and exits non-zero is not an error; its code is returned.
    fn open(&self, target: &str) -> Result<i32>;
}

/// Opens targets by running an [`OpenCommand`] with the target appended.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    command: OpenCommand,
}

impl SystemOpener {
    /// Opener running `command`.
    #[must_use]
    pub const fn new(command: OpenCommand) -> Self {
        Self { command }
    }

    /// The command this opener runs.
    #[must_use]
    pub const fn command(&self) -> &OpenCommand {
        &self.command
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(OpenCommand::platform_default())
    }
}

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> Result<i32> {
        let name = self.command.program();
        let program = which::which(name).map_err(|_| Error::OpenCommandNotFound {
            program: name.to_string(),
        })?;

        log::info!("Opening {target} with {}", program.display());
        let mut command = Command::new(&program);
        command.args(self.command.args());
        push_target(&mut command, target, self.command.quoting())?;
        let status = command
            .status()
            .map_err(|source| Error::Spawn { program: name.to_string(), source })?;

        log::debug!("{name} exited with {status}");
        // Killed by a signal: no code to pass on.
        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(windows)]
fn push_target(command: &mut Command, target: &str, quoting: TargetQuoting) -> Result<()> {
    use std::os::windows::process::CommandExt;

    match quoting {
        TargetQuoting::Plain => {
            command.arg(target);
        }
        TargetQuoting::Cmd => {
            command.raw_arg(quote_for_cmd(target)?);
        }
    }
    Ok(())
}

// Only cmd.exe re-parses its command line; everywhere else argv is exact.
#[cfg(not(windows))]
fn push_target(command: &mut Command, target: &str, _quoting: TargetQuoting) -> Result<()> {
    command.arg(target);
    Ok(())
}
