//! The single name-matching primitive shared by policy and detection.
//!
//! Matching is deliberately loose: case-insensitive substring containment,
//! so a restriction on "chrome" also catches "Google Chrome". Both the
//! instance policy and the running-instance detector depend on this exact
//! behavior.

/// Case-insensitive substring containment.
///
/// Returns false for an empty needle rather than matching everything.
pub fn name_contains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Strip a trailing executable extension for comparison purposes.
///
/// Only `.exe` is stripped; other extensions are part of how a process
/// reports itself (e.g. interpreter hosts) and stay significant.
pub fn strip_exe_suffix(name: &str) -> &str {
    let len = name.len();
    if len >= 4
        && name.is_char_boundary(len - 4)
        && name[len - 4..].eq_ignore_ascii_case(".exe")
    {
        &name[..len - 4]
    } else {
        name
    }
}
