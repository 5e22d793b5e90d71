//! Toolchain default for GOPROXY

use std::process::Command;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

/// Source of the Go toolchain's configured GOPROXY
#[cfg_attr(test, automock)]
pub trait GoEnv {
    /// Returns the raw configured value, or `None` if it could not be determined
    fn goproxy(&self) -> Option<String>;
}

/// Runs `go env GOPROXY` using the `go` binary found on `PATH`
#[derive(Debug, Clone)]
pub struct GoCommand {
    program: String,
}

impl GoCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for GoCommand {
    fn default() -> Self {
        Self::new("go")
    }
}

impl GoEnv for GoCommand {
    fn goproxy(&self) -> Option<String> {
        debug!("Running {} env GOPROXY", self.program);

        let output = Command::new(&self.program)
            .arg("env")
            .arg("GOPROXY")
            .output()
            .inspect_err(|e| warn!("Failed to get GOPROXY from go env: {}", e))
            .ok()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "Failed to get GOPROXY from go env: {} {}",
                output.status,
                stderr.trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
