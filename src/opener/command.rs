use crate::config::OpenConfig;
use crate::error::{Error, Result};

/// How the target is handed to the launcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetQuoting {
    /// An ordinary argument.
    #[default]
    Plain,
    /// Quoted with [`quote_for_cmd`] and passed verbatim, for `cmd.exe`,
    /// which re-parses its own command line.
    Cmd,
}

/// A launcher program plus the arguments placed before the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCommand {
    program: String,
    args: Vec<String>,
    quoting: TargetQuoting,
}

impl OpenCommand {
    /// Command running `program` with `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
            quoting: TargetQuoting::Plain,
        }
    }

    /// Same command, passing the target with `quoting`.
    #[must_use]
    pub fn with_quoting(mut self, quoting: TargetQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// The platform's own way of opening a path or URL.
    #[must_use]
    pub fn platform_default() -> Self {
        #[cfg(target_os = "macos")]
        return Self::new("open", []);
        #[cfg(target_os = "windows")]
        return Self::new("cmd", ["/C".to_string(), "start".to_string(), String::new()])
            .with_quoting(TargetQuoting::Cmd);
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return Self::new("xdg-open", []);
    }

    /// Parse a shell-style command line such as `code -r` or
    /// `open -a "Google Chrome"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOpenCommand`] for unbalanced quotes or an
    /// empty command.
    pub fn parse(command: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidOpenCommand {
            command: command.to_string(),
            reason,
        };
        let mut words = shell_words::split(command).map_err(|e| invalid(e.to_string()))?;
        if words.is_empty() {
            return Err(invalid("command is empty".to_string()));
        }
        let program = words.remove(0);
        Ok(Self::new(program, words))
    }

    /// The configured command, or the platform default when none is set.
    ///
    /// # Errors
    ///
    /// Propagates [`OpenCommand::parse`] failures for a configured command.
    pub fn from_config(config: &OpenConfig) -> Result<Self> {
        config
            .command
            .as_deref()
            .map_or_else(|| Ok(Self::platform_default()), Self::parse)
    }

    /// Program name or path.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed before the target.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// How the target is passed.
    #[must_use]
    pub const fn quoting(&self) -> TargetQuoting {
        self.quoting
    }
}

/// Quote `target` as a single literal token on a `cmd /C` command line.
///
/// The target is wrapped in double quotes, which makes `&`, `|`, `<`, `>`,
/// `^` and parentheses literal. Each `%` is moved outside the quotes and
/// caret-escaped so no environment variable expands.
///
/// # Errors
///
/// Returns [`Error::InvalidAlias`] if the target contains `"`, which `cmd`
/// has no way to escape inside a quoted token.
pub fn quote_for_cmd(target: &str) -> Result<String> {
    if target.contains('"') {
        return Err(Error::InvalidAlias {
            reason: "target must not contain '\"' when opened through cmd".to_string(),
        });
    }
    Ok(format!("\"{}\"", target.replace('%', "\"^%\"")))
}
