use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::items::{ItemDescriptor, ItemKind};
use crate::launch::errors::SpawnError;

/// Capability that starts a process for an item and returns without
/// waiting for the child to exit.
pub trait ProcessSpawner {
    fn spawn(&self, item: &ItemDescriptor) -> Result<(), SpawnError>;
}

/// Well-known AutoHotkey install locations, tried after `PATH` lookup.
const AHK_INSTALL_PATHS: &[&str] = &[
    r"C:\Program Files\AutoHotkey\AutoHotkey.exe",
    r"C:\Program Files\AutoHotkey\v2\AutoHotkey.exe",
    r"C:\Program Files\AutoHotkey\v2\AutoHotkey64.exe",
    r"C:\Program Files\AutoHotkey\v1.1\AutoHotkeyU64.exe",
    r"C:\Program Files (x86)\AutoHotkey\AutoHotkey.exe",
];

/// Executable names an AutoHotkey install may go by on `PATH`.
const AHK_BINARY_NAMES: &[&str] = &[
    "AutoHotkey.exe",
    "AutoHotkeyU64.exe",
    "AutoHotkeyU32.exe",
    "AutoHotkey32.exe",
    "AutoHotkey64.exe",
];

fn find_autohotkey() -> Option<PathBuf> {
    for name in AHK_BINARY_NAMES {
        if let Ok(path) = which::which(name) {
            debug!(event = "core.launch.ahk_found_on_path", path = %path.display());
            return Some(path);
        }
    }
    for path in AHK_INSTALL_PATHS {
        let path = Path::new(path);
        if path.is_file() {
            debug!(event = "core.launch.ahk_found_installed", path = %path.display());
            return Some(path.to_path_buf());
        }
    }
    None
}

/// Launch an item through the Windows file association machinery.
fn shell_open_command(path: &Path) -> Command {
    let mut command = Command::new("cmd.exe");
    command.args(["/c", "start", ""]).arg(path);
    command
}

/// The real spawner: selects an interpreter per item kind the way the
/// desktop shell would.
pub struct ShellSpawner;

impl ShellSpawner {
    fn build_command(&self, item: &ItemDescriptor) -> Command {
        match item.kind {
            // Shortcuts delegate to the shell-open launcher so the
            // shortcut's own working directory and arguments apply.
            ItemKind::ShortcutLink => {
                let mut command = Command::new("explorer.exe");
                command.arg(&item.path);
                command
            }
            ItemKind::NativeExecutable => match item.extension.as_str() {
                "ahk" => match find_autohotkey() {
                    Some(interpreter) => {
                        let mut command = Command::new(interpreter);
                        command.arg(&item.path);
                        command
                    }
                    // Last resort: the file association may still know an
                    // AutoHotkey install we could not find.
                    None => shell_open_command(&item.path),
                },
                "bat" | "cmd" => shell_open_command(&item.path),
                "ps1" => {
                    let mut command = Command::new("powershell.exe");
                    command
                        .args(["-ExecutionPolicy", "Bypass", "-File"])
                        .arg(&item.path);
                    command
                }
                "vbs" => {
                    let mut command = Command::new("wscript.exe");
                    command.arg(&item.path);
                    command
                }
                _ => Command::new(&item.path),
            },
        }
    }
}

impl ProcessSpawner for ShellSpawner {
    fn spawn(&self, item: &ItemDescriptor) -> Result<(), SpawnError> {
        let mut command = self.build_command(item);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let program = command.get_program().to_string_lossy().to_string();
        match command.spawn() {
            Ok(child) => {
                // The child runs detached; confirmation is the detector's
                // job, not a wait on the process.
                info!(
                    event = "core.launch.spawned",
                    item = %item.path.display(),
                    program = %program,
                    pid = child.id()
                );
                Ok(())
            }
            Err(e) => Err(SpawnError::StartFailed {
                program,
                message: e.to_string(),
            }),
        }
    }
}
