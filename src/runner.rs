use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;

/// Which interpreter to start and which script to hand it.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    pub interpreter: String,
    pub script_path: PathBuf,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            script_path: Path::new("src").join("lib").join("kickstart_tensorflow.py"),
        }
    }
}

/// Captured streams of one finished child process. A non-zero exit code is
/// not an error at this layer; callers inspect `stderr` themselves.
#[derive(Debug)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("script not found: {0}")]
    ScriptNotFound(String),
    #[error("failed to launch `{0}`: {1}")]
    Spawn(String, String),
}

/// Run the configured script once and wait for it to exit, capturing stdout
/// and stderr in full. No arguments, no environment overrides, no timeout.
pub async fn run_script(cfg: &ScriptConfig) -> Result<ScriptOutput, LaunchError> {
    // Interpreters report a missing script file on their own stderr and exit
    // non-zero, which the contract treats as success. Check up front so a
    // missing script is a launch fault instead.
    if !cfg.script_path.is_file() {
        return Err(LaunchError::ScriptNotFound(
            cfg.script_path.display().to_string(),
        ));
    }

    let output = Command::new(&cfg.interpreter)
        .arg(&cfg.script_path)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| {
            LaunchError::Spawn(
                format!("{} {}", cfg.interpreter, cfg.script_path.display()),
                e.to_string(),
            )
        })?;

    Ok(ScriptOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    })
}
