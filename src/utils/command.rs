use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code reported when a program could not be started at all
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// A fully expanded external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Build a command from a template (program first) with `extra` appended
    pub fn from_template(template: &[&str], extra: &str) -> Option<Self> {
        let (program, args) = template.split_first()?;
        let mut cmd = Self::new(*program);
        cmd.args.extend(args.iter().map(|a| a.to_string()));
        if !extra.is_empty() {
            cmd.args.push(extra.to_string());
        }
        Some(cmd)
    }

    #[cfg(test)]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Wrap the command in `sudo`
    pub fn elevated(self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: "sudo".to_string(),
            args,
            envs: self.envs,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.envs {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Process-execution primitive used by detection, status probes and installs
pub trait CommandRunner {
    /// Check if a command exists in PATH
    fn command_exists(&self, program: &str) -> bool;

    /// Run with all output discarded; true iff the exit status is zero
    fn run_quiet(&self, cmd: &CommandSpec) -> bool;

    /// Run attached to the terminal and return the exit code
    fn run(&self, cmd: &CommandSpec) -> i32;
}

/// Runs commands on the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(&self, spec: &CommandSpec) -> Command {
        // Resolve through PATH (and PATHEXT) so shims like scoop.cmd start on Windows
        let program = which::which(&spec.program)
            .map(|p| p.into_os_string())
            .unwrap_or_else(|_| spec.program.clone().into());

        let mut cmd = Command::new(program);
        cmd.args(&spec.args);
        for (key, value) in &spec.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn command_exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run_quiet(&self, spec: &CommandSpec) -> bool {
        log::debug!("Executing (quiet): {}", spec);

        self.build(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run(&self, spec: &CommandSpec) -> i32 {
        log::debug!("Executing: {}", spec);

        match self.build(spec).status() {
            Ok(status) => exit_code(status),
            Err(e) => {
                log::error!("Failed to start {}: {}", spec.program, e);
                SPAWN_FAILURE_CODE
            }
        }
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
