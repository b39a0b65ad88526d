//! External executable synthesizer

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::config::SynthesisConfig;
use super::Synthesizer;
use crate::utils::error::SynthesisError;

const PROBE_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs the configured text-to-speech executable as a subprocess
#[derive(Debug, Clone, Default)]
pub struct CommandSynthesizer {
    config: SynthesisConfig,
}

impl CommandSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    fn resolve(&self) -> Result<PathBuf, SynthesisError> {
        which::which(&self.config.executable).map_err(|_| SynthesisError::NotFound {
            executable: self.config.executable.clone(),
        })
    }

    /// Wait for `child` until the probe deadline, killing it on expiry.
    /// `stderr` is drained on its own thread so a verbose tool cannot block
    /// on a full pipe.
    fn wait_probe(
        &self,
        mut child: Child,
        stderr: JoinHandle<String>,
    ) -> Result<(), SynthesisError> {
        let deadline = Instant::now() + self.config.probe_timeout();
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => return Ok(()),
                Ok(Some(status)) => {
                    let captured = stderr.join().unwrap_or_default();
                    let captured = captured.trim();
                    return Err(SynthesisError::ProbeFailed {
                        executable: self.config.executable.clone(),
                        diagnostic: if captured.is_empty() {
                            status.to_string()
                        } else {
                            captured.to_string()
                        },
                    });
                }
                Ok(None) if Instant::now() >= deadline => {
                    // The drain thread is detached: a grandchild may still hold the pipe
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SynthesisError::ProbeTimedOut {
                        executable: self.config.executable.clone(),
                        seconds: self.config.probe_timeout_secs,
                    });
                }
                Ok(None) => thread::sleep(PROBE_POLL_INTERVAL),
                Err(e) => {
                    return Err(SynthesisError::ProbeFailed {
                        executable: self.config.executable.clone(),
                        diagnostic: e.to_string(),
                    })
                }
            }
        }
    }
}

impl Synthesizer for CommandSynthesizer {
    /// PATH lookup, then `--help` under the probe timeout
    fn probe(&self) -> Result<(), SynthesisError> {
        let program = self.resolve()?;
        debug!(program = %program.display(), "probing speech synthesizer");

        // stdout is discarded so a chatty --help cannot fill the pipe and stall
        let mut child = Command::new(&program)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SynthesisError::ProbeFailed {
                executable: self.config.executable.clone(),
                diagnostic: e.to_string(),
            })?;

        let pipe = child.stderr.take();
        let stderr = thread::spawn(move || {
            let mut captured = String::new();
            if let Some(mut pipe) = pipe {
                let _ = pipe.read_to_string(&mut captured);
            }
            captured
        });

        self.wait_probe(child, stderr)
    }

    fn synthesize(&self, text: &str, output: &Path) -> Result<PathBuf, SynthesisError> {
        let program = self.resolve()?;
        debug!(
            program = %program.display(),
            model = %self.config.model,
            output = %output.display(),
            "running speech synthesis"
        );

        let result = Command::new(&program)
            .args(self.config.synthesis_args(text, output))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SynthesisError::Spawn {
                executable: self.config.executable.clone(),
                source,
            })?;

        if result.status.success() {
            Ok(output.to_path_buf())
        } else {
            Err(SynthesisError::Invocation {
                status: result.status.to_string(),
                diagnostic: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            })
        }
    }
}
