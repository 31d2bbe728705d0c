use tracing::debug;

use crate::desktop::WindowRecord;
use crate::detect::session::LaunchSession;
use crate::items::ItemDescriptor;
use crate::matching::{name_contains, strip_exe_suffix};
use crate::resolver::TargetIdentity;

/// AutoHotkey scripts run under an interpreter that reports its own
/// process name, so they need title-based matching against the script
/// name. Other script kinds take the generic branch.
const AHK_EXTENSION: &str = "ahk";
const AHK_INTERPRETER: &str = "autohotkey";

/// Decide whether an equivalent instance of this item is already running
/// on the current desktop session.
///
/// Deterministic and side-effect free; re-invoked on every polling tick,
/// so it stays a plain scan over the snapshot.
pub fn is_running(
    item: &ItemDescriptor,
    identity: &TargetIdentity,
    allow_multiple: bool,
    snapshot: &[WindowRecord],
    session: &LaunchSession,
) -> bool {
    // Launched earlier in this run; don't re-detect while the window is
    // still coming up.
    if session.was_launched(item) {
        return true;
    }

    // Without a resolved target there is nothing to match against.
    if !identity.resolvable {
        debug!(
            event = "core.detect.cannot_check",
            item = %item.path.display()
        );
        return false;
    }

    let base_name = item.base_name();

    if allow_multiple {
        // Per-variant check: only this specific item counts, so match its
        // own name in window titles. Generic process matching would
        // collapse all variants of the program together.
        return snapshot
            .iter()
            .filter(|w| w.session_visible)
            .any(|w| name_contains(&w.title, &base_name));
    }

    for window in snapshot.iter().filter(|w| w.session_visible) {
        let process_name = window.process_name.to_lowercase();
        let process_base = strip_exe_suffix(&process_name);

        if item.extension == AHK_EXTENSION {
            if process_base.contains(AHK_INTERPRETER) {
                // The interpreter owns the window; the script name shows
                // up in the title.
                if name_contains(&window.title, &base_name)
                    || name_contains(&window.title, &item.file_name())
                {
                    debug!(
                        event = "core.detect.ahk_match",
                        item = %base_name,
                        title = %window.title
                    );
                    return true;
                }
            } else if name_contains(&window.title, &base_name) {
                // Some scripts create their own titled windows.
                debug!(
                    event = "core.detect.ahk_window_match",
                    item = %base_name,
                    title = %window.title
                );
                return true;
            }
        } else if process_base.contains(&base_name)
            || name_contains(&identity.arguments, &base_name)
            || process_base.contains(&identity.canonical_name)
        {
            debug!(
                event = "core.detect.process_match",
                item = %base_name,
                process = %window.process_name
            );
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn item(name: &str) -> ItemDescriptor {
        ItemDescriptor::from_path(Path::new(name)).unwrap()
    }

    fn window(title: &str, process: &str) -> WindowRecord {
        WindowRecord {
            handle: 7,
            title: title.to_string(),
            process_name: process.to_string(),
            session_visible: true,
        }
    }

    fn hidden_window(title: &str, process: &str) -> WindowRecord {
        WindowRecord {
            session_visible: false,
            ..window(title, process)
        }
    }

    #[test]
    fn test_already_launched_short_circuits() {
        let notepad = item("notepad.lnk");
        let mut session = LaunchSession::new();
        session.mark_launched(&notepad);

        assert!(is_running(
            &notepad,
            &TargetIdentity::unresolvable(),
            false,
            &[],
            &session
        ));
    }

    #[test]
    fn test_unresolvable_cannot_be_detected() {
        let windows = [window("notepad", "notepad.exe")];
        assert!(!is_running(
            &item("notepad.lnk"),
            &TargetIdentity::unresolvable(),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_multi_instance_matches_title_substring() {
        let windows = [window("Firefox - Work - Mozilla Firefox", "firefox.exe")];
        assert!(is_running(
            &item("Firefox - Work.lnk"),
            &TargetIdentity::resolved("firefox.exe", ""),
            true,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_multi_instance_ignores_process_names() {
        // Title is what distinguishes variants; a bare process-name match
        // must not count
        let windows = [window("Untitled", "firefox.exe")];
        assert!(!is_running(
            &item("Firefox - Work.lnk"),
            &TargetIdentity::resolved("firefox.exe", ""),
            true,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_single_instance_matches_process_name() {
        let windows = [window("some document", "NOTEPAD.EXE")];
        assert!(is_running(
            &item("notepad.lnk"),
            &TargetIdentity::resolved("notepad.exe", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_single_instance_no_match() {
        let windows = [window("calculator", "calc.exe")];
        assert!(!is_running(
            &item("notepad.lnk"),
            &TargetIdentity::resolved("notepad.exe", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_single_instance_matches_canonical_name_in_process() {
        // Shortcut named differently from its target still matches via
        // the canonical target name
        let windows = [window("editor", "code.exe")];
        assert!(is_running(
            &item("My Editor.lnk"),
            &TargetIdentity::resolved("code.exe", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_single_instance_matches_arguments() {
        let windows = [window("runner", "launcher.exe")];
        assert!(is_running(
            &item("backup.lnk"),
            &TargetIdentity::resolved("launcher.exe", "--job backup --quiet"),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_off_session_windows_are_ignored() {
        let windows = [hidden_window("some document", "notepad.exe")];
        assert!(!is_running(
            &item("notepad.lnk"),
            &TargetIdentity::resolved("notepad.exe", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_ahk_interpreter_title_match() {
        let windows = [window("watcher.ahk - AutoHotkey v2.0", "AutoHotkey64.exe")];
        assert!(is_running(
            &item("watcher.ahk"),
            &TargetIdentity::resolved("watcher.ahk", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_ahk_generic_interpreter_window_does_not_match() {
        // An AutoHotkey process running some other script is not this item
        let windows = [window("other-script.ahk - AutoHotkey", "AutoHotkey64.exe")];
        assert!(!is_running(
            &item("watcher.ahk"),
            &TargetIdentity::resolved("watcher.ahk", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }

    #[test]
    fn test_ahk_script_with_own_window() {
        let windows = [window("Watcher Control Panel", "somehost.exe")];
        assert!(is_running(
            &item("watcher.ahk"),
            &TargetIdentity::resolved("watcher.ahk", ""),
            false,
            &windows,
            &LaunchSession::new()
        ));
    }
}
