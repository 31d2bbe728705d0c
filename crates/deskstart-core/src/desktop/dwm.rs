//! Primary Windows enumerator: top-level windows with the DWM cloak test.
//!
//! A window counts as session-visible when it is flagged visible and the
//! composition layer does not mark it cloaked. Cloaked windows live on
//! another virtual desktop (or are otherwise composited away) and must not
//! count as running instances.

use tracing::debug;

use windows::Win32::Foundation::{BOOL, CloseHandle, HWND, LPARAM};
use windows::Win32::Graphics::Dwm::{
    DWMWA_CLOAKED, DwmGetWindowAttribute, DwmIsCompositionEnabled,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
};
use windows::core::PWSTR;

use crate::desktop::errors::EnumerationError;
use crate::desktop::snapshot::WindowEnumerator;
use crate::desktop::types::{Capture, WindowRecord};

pub struct DwmEnumerator;

impl DwmEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DwmEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe extern "system" fn collect_hwnds(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let hwnds = unsafe { &mut *(lparam.0 as *mut Vec<isize>) };
    hwnds.push(hwnd.0 as isize);
    BOOL(1)
}

fn window_title(hwnd: HWND) -> String {
    unsafe {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buf);
        if copied <= 0 {
            return String::new();
        }
        String::from_utf16_lossy(&buf[..copied as usize])
    }
}

/// Session-cloak test. A per-window attribute failure falls back to the
/// last-known visibility flag instead of failing the scan.
fn is_on_current_desktop(hwnd: HWND) -> bool {
    unsafe {
        let visible = IsWindowVisible(hwnd).as_bool();
        if !visible {
            return false;
        }

        let mut cloaked: u32 = 0;
        match DwmGetWindowAttribute(
            hwnd,
            DWMWA_CLOAKED,
            &mut cloaked as *mut u32 as *mut core::ffi::c_void,
            std::mem::size_of::<u32>() as u32,
        ) {
            Ok(()) => cloaked == 0,
            Err(_) => visible,
        }
    }
}

fn process_name_for_window(hwnd: HWND) -> String {
    unsafe {
        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        if pid == 0 {
            return "unknown".to_string();
        }

        let Ok(handle) = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) else {
            return "unknown".to_string();
        };

        let mut buf = vec![0u16; 260];
        let mut len = buf.len() as u32;
        let result = QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_WIN32,
            PWSTR(buf.as_mut_ptr()),
            &mut len,
        );
        let _ = CloseHandle(handle);

        match result {
            Ok(()) => {
                let full = String::from_utf16_lossy(&buf[..len as usize]);
                full.rsplit(['\\', '/'])
                    .next()
                    .unwrap_or("unknown")
                    .to_string()
            }
            Err(_) => "unknown".to_string(),
        }
    }
}

impl WindowEnumerator for DwmEnumerator {
    fn capture(&self) -> Result<Capture, EnumerationError> {
        unsafe {
            match DwmIsCompositionEnabled() {
                Ok(enabled) if enabled.as_bool() => {}
                Ok(_) => {
                    return Err(EnumerationError::Unavailable {
                        message: "desktop composition is disabled".to_string(),
                    });
                }
                Err(e) => {
                    return Err(EnumerationError::Unavailable {
                        message: e.to_string(),
                    });
                }
            }

            let mut hwnds: Vec<isize> = Vec::new();
            EnumWindows(
                Some(collect_hwnds),
                LPARAM(&mut hwnds as *mut Vec<isize> as isize),
            )
            .map_err(|e| EnumerationError::SystemError {
                message: e.to_string(),
            })?;

            let mut records = Vec::new();
            for raw in hwnds {
                let hwnd = HWND(raw as _);

                let title = window_title(hwnd);
                if title.is_empty() {
                    continue;
                }
                if !is_on_current_desktop(hwnd) {
                    continue;
                }

                records.push(WindowRecord {
                    handle: raw as u64,
                    title,
                    process_name: process_name_for_window(hwnd),
                    session_visible: true,
                });
            }

            debug!(
                event = "core.desktop.dwm_capture_completed",
                record_count = records.len()
            );

            Ok(Capture::Full(records))
        }
    }
}
