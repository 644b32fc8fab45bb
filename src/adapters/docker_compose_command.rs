use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::domain::AppError;
use crate::ports::ComposeRunner;

/// Runs `docker compose` in the stack's output directory.
#[derive(Debug, Clone)]
pub struct DockerComposeCommand {
    program: String,
    project_dir: PathBuf,
}

impl DockerComposeCommand {
    pub fn new(project_dir: PathBuf) -> Self {
        Self { program: "docker".to_string(), project_dir }
    }

    /// Use a different executable in place of `docker`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} compose {}", self.program, args.join(" "))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("compose").args(args).current_dir(&self.project_dir);
        command
    }

    /// Run with inherited stdio so progress reaches the terminal.
    fn run_attached(&self, args: &[&str]) -> Result<(), AppError> {
        info!("Running {}", self.describe(args));
        let status = self.command(args).status().map_err(|e| AppError::Compose {
            command: self.describe(args),
            details: e.to_string(),
        })?;

        if !status.success() {
            return Err(AppError::Compose {
                command: self.describe(args),
                details: format!("exited with {}", status),
            });
        }
        Ok(())
    }

    fn run_captured(&self, args: &[&str]) -> Result<String, AppError> {
        let output = self.command(args).output().map_err(|e| AppError::Compose {
            command: self.describe(args),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Compose {
                command: self.describe(args),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl ComposeRunner for DockerComposeCommand {
    fn up(&self) -> Result<(), AppError> {
        self.run_attached(&["up", "-d"])
    }

    fn ps(&self) -> Result<String, AppError> {
        self.run_captured(&["ps"])
    }

    fn logs(&self, service: Option<&str>, follow: bool) -> Result<(), AppError> {
        let mut args = vec!["logs"];
        if follow {
            args.push("-f");
        }
        args.extend(service);
        self.run_attached(&args)
    }
}
