use std::{
    path::PathBuf,
    process::{ExitStatus, Stdio},
    sync::{Arc, Mutex, PoisonError},
};

use async_trait::async_trait;
use botstart_config::Config;
use botstart_runner_interface::{ActionRunner, ActionStatus, RunnerError};
use tokio::process::Command;
use tracing::{debug, warn};

/// Process group of the target being run.
#[derive(Clone, Debug)]
struct RunningTarget {
    group: u32,
    action: String,
}

/// Runs targets with `make` (or any compatible build tool).
///
/// Each target runs in its own process group, so that signals reach the
/// processes started by its recipe and not only the build tool.
#[derive(Clone, Debug)]
pub struct MakeActionRunner {
    program: String,
    makefile: Option<PathBuf>,
    working_directory: Option<PathBuf>,
    running: Arc<Mutex<Option<RunningTarget>>>,
}

impl MakeActionRunner {
    /// Creates a runner for a build tool program.
    pub fn new<T: Into<String>>(program: T) -> Self {
        Self {
            program: program.into(),
            makefile: None,
            working_directory: None,
            running: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a runner from configuration.
    pub fn from_config(config: &Config) -> Self {
        let make = &config.runner.make;
        let mut runner = Self::new(make.program.clone());
        if !make.makefile.is_empty() {
            runner = runner.with_makefile(&make.makefile);
        }
        if !make.working_directory.is_empty() {
            runner = runner.with_working_directory(&make.working_directory);
        }

        runner
    }

    /// Use a specific makefile.
    pub fn with_makefile<P: Into<PathBuf>>(mut self, makefile: P) -> Self {
        self.makefile = Some(makefile.into());
        self
    }

    /// Run the build tool from a specific directory.
    pub fn with_working_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.working_directory = Some(directory.into());
        self
    }

    fn resolve_program(&self) -> Result<PathBuf, RunnerError> {
        which::which(&self.program).map_err(|e| RunnerError::ToolNotFound {
            program: self.program.clone(),
            source: e.into(),
        })
    }

    fn build_command(&self, program: PathBuf, target: &str) -> Command {
        let mut command = Command::new(program);
        if let Some(makefile) = &self.makefile {
            command.arg("-f").arg(makefile);
        }
        command.arg(target);
        if let Some(directory) = &self.working_directory {
            command.current_dir(directory);
        }

        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        #[cfg(unix)]
        command.process_group(0);
        command
    }

    #[cfg(unix)]
    fn running_target(&self) -> Option<RunningTarget> {
        self.running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Tracks the running target, kills its whole process group if the run is
/// dropped before the build tool exited.
struct RunningGuard<'a> {
    slot: &'a Mutex<Option<RunningTarget>>,
    exited: bool,
}

impl<'a> RunningGuard<'a> {
    fn register(slot: &'a Mutex<Option<RunningTarget>>, running: Option<RunningTarget>) -> Self {
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = running;
        Self {
            slot,
            exited: false,
        }
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        let running = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let (false, Some(running)) = (self.exited, running) {
            if let Err(e) = signal_group(running.group, KILL_SIGNAL) {
                warn!(action = %running.action, error = %e, "Could not kill target processes");
            }
        }
    }
}

#[cfg(unix)]
const KILL_SIGNAL: i32 = libc::SIGKILL;

#[cfg(not(unix))]
const KILL_SIGNAL: i32 = 9;

#[cfg(unix)]
fn signal_group(group: u32, signal: i32) -> std::io::Result<()> {
    // SAFETY: killpg only reads its integer arguments.
    let result = unsafe { libc::killpg(group as libc::pid_t, signal) };
    if result == 0 {
        return Ok(());
    }

    let err = std::io::Error::last_os_error();
    match err.raw_os_error() {
        // The group is already gone.
        Some(libc::ESRCH) => Ok(()),
        _ => Err(err),
    }
}

// Without process groups, dropping the child kills the build tool only.
#[cfg(not(unix))]
fn signal_group(_group: u32, _signal: i32) -> std::io::Result<()> {
    Ok(())
}

fn status_from_exit(status: ExitStatus) -> ActionStatus {
    match status.code() {
        Some(code) => ActionStatus::from_code(code),
        None => ActionStatus::Terminated {
            signal: exit_signal(&status),
        },
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[async_trait]
impl ActionRunner for MakeActionRunner {
    #[tracing::instrument(skip(self), fields(program = %self.program), ret)]
    async fn run_action(&self, action: &str) -> Result<ActionStatus, RunnerError> {
        let program = self.resolve_program()?;
        let mut command = self.build_command(program, action);
        debug!(command = ?command.as_std(), "Spawning build tool");

        let mut child = command.spawn().map_err(|e| RunnerError::ProcessError {
            target: action.into(),
            source: e,
        })?;
        let mut guard = RunningGuard::register(
            &self.running,
            child.id().map(|group| RunningTarget {
                group,
                action: action.into(),
            }),
        );

        let status = child.wait().await.map_err(|e| RunnerError::ProcessError {
            target: action.into(),
            source: e,
        })?;
        guard.exited = true;

        Ok(status_from_exit(status))
    }

    #[cfg(unix)]
    #[tracing::instrument(skip(self))]
    async fn interrupt_action(&self, signal: i32) -> Result<bool, RunnerError> {
        let Some(running) = self.running_target() else {
            return Ok(false);
        };

        debug!(group = running.group, action = %running.action, "Forwarding signal to target");
        signal_group(running.group, signal).map_err(|e| RunnerError::ProcessError {
            target: running.action,
            source: e,
        })?;

        Ok(true)
    }

    // The child is killed when its run is dropped.
    #[cfg(not(unix))]
    async fn interrupt_action(&self, _signal: i32) -> Result<bool, RunnerError> {
        Ok(false)
    }
}
