use super::{CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Scripted runner for tests: nothing is spawned, every call is recorded
#[derive(Debug, Default)]
pub struct FakeRunner {
    /// Binaries reported as present on PATH
    pub on_path: HashSet<String>,
    /// Final argument values for which quiet runs succeed
    pub installed: HashSet<String>,
    /// Exit codes keyed by final argument; anything else exits 0
    pub exit_codes: HashMap<String, i32>,
    pub lookups: RefCell<Vec<String>>,
    pub quiet_calls: RefCell<Vec<CommandSpec>>,
    pub calls: RefCell<Vec<CommandSpec>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binaries(mut self, binaries: &[&str]) -> Self {
        self.on_path.extend(binaries.iter().map(|b| b.to_string()));
        self
    }

    pub fn with_installed(mut self, packages: &[&str]) -> Self {
        self.installed.extend(packages.iter().map(|p| p.to_string()));
        self
    }

    pub fn failing(mut self, package: &str, code: i32) -> Self {
        self.exit_codes.insert(package.to_string(), code);
        self
    }

    /// Command lines passed to `run`, in order
    pub fn ran(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Command lines passed to `run_quiet`, in order
    pub fn probed(&self) -> Vec<String> {
        self.quiet_calls.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn command_exists(&self, program: &str) -> bool {
        self.lookups.borrow_mut().push(program.to_string());
        self.on_path.contains(program)
    }

    fn run_quiet(&self, cmd: &CommandSpec) -> bool {
        self.quiet_calls.borrow_mut().push(cmd.clone());
        cmd.args
            .last()
            .map_or(false, |last| self.installed.contains(last))
    }

    fn run(&self, cmd: &CommandSpec) -> i32 {
        self.calls.borrow_mut().push(cmd.clone());
        cmd.args
            .last()
            .and_then(|last| self.exit_codes.get(last).copied())
            .unwrap_or(0)
    }
}
