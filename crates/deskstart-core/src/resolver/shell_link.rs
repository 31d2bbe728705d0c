//! Platform shortcut readers.
//!
//! On Windows, `.lnk` files are dereferenced through COM (`IShellLinkW` +
//! `IPersistFile`). Elsewhere the capability is unavailable and every
//! shortcut resolves as unresolvable.

use std::path::Path;

use crate::resolver::errors::ResolveError;
use crate::resolver::operations::ShortcutReader;
use crate::resolver::types::ShortcutInfo;

/// Reader for platforms without a shortcut-dereferencing capability.
pub struct UnsupportedShortcutReader;

impl ShortcutReader for UnsupportedShortcutReader {
    fn read(&self, _path: &Path) -> Result<ShortcutInfo, ResolveError> {
        Err(ResolveError::CapabilityUnavailable)
    }
}

#[cfg(windows)]
pub use com::ComShortcutReader;

#[cfg(windows)]
mod com {
    use super::*;

    use windows::Win32::System::Com::{
        CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx,
        IPersistFile, STGM,
    };
    use windows::Win32::UI::Shell::IShellLinkW;
    use windows::core::{GUID, Interface, PCWSTR};

    // CLSID_ShellLink = {00021401-0000-0000-C000-000000000046}
    const CLSID_SHELL_LINK: GUID = GUID {
        data1: 0x00021401,
        data2: 0x0000,
        data3: 0x0000,
        data4: [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    };

    /// Shortcut reader backed by the shell's IShellLinkW COM object.
    pub struct ComShortcutReader;

    impl ComShortcutReader {
        pub fn new() -> Self {
            // S_FALSE (already initialized) and RPC_E_CHANGED_MODE are both
            // fine here; the shell link calls work either way.
            unsafe {
                let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
            }
            Self
        }
    }

    impl Default for ComShortcutReader {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShortcutReader for ComShortcutReader {
        fn read(&self, path: &Path) -> Result<ShortcutInfo, ResolveError> {
            let parse_failed = |message: String| ResolveError::ParseFailed {
                path: path.display().to_string(),
                message,
            };

            unsafe {
                let link: IShellLinkW =
                    CoCreateInstance(&CLSID_SHELL_LINK, None, CLSCTX_INPROC_SERVER)
                        .map_err(|e| parse_failed(e.to_string()))?;
                let persist: IPersistFile =
                    link.cast().map_err(|e| parse_failed(e.to_string()))?;

                let wide: Vec<u16> = path
                    .to_string_lossy()
                    .encode_utf16()
                    .chain(std::iter::once(0))
                    .collect();
                persist
                    .Load(PCWSTR(wide.as_ptr()), STGM(0)) // STGM_READ
                    .map_err(|e| parse_failed(e.to_string()))?;

                let mut target_buf = [0u16; 512];
                link.GetPath(&mut target_buf, std::ptr::null_mut(), 0)
                    .map_err(|e| parse_failed(e.to_string()))?;
                let target_path = String::from_utf16_lossy(&target_buf)
                    .trim_end_matches('\0')
                    .to_string();

                let mut args_buf = [0u16; 4096];
                // Arguments are optional; a failed read means no arguments.
                let _ = link.GetArguments(&mut args_buf);
                let arguments = String::from_utf16_lossy(&args_buf)
                    .trim_end_matches('\0')
                    .to_string();

                if target_path.is_empty() {
                    return Err(parse_failed("shortcut has no target path".to_string()));
                }

                Ok(ShortcutInfo {
                    target_path,
                    arguments,
                })
            }
        }
    }
}

#[cfg(windows)]
pub type PlatformShortcutReader = ComShortcutReader;
#[cfg(not(windows))]
pub type PlatformShortcutReader = UnsupportedShortcutReader;

/// Construct the platform shortcut reader.
pub fn platform_reader() -> PlatformShortcutReader {
    #[cfg(windows)]
    {
        ComShortcutReader::new()
    }
    #[cfg(not(windows))]
    {
        UnsupportedShortcutReader
    }
}
