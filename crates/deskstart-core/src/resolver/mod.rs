pub mod errors;
pub mod operations;
pub mod shell_link;
pub mod types;

pub use errors::ResolveError;
pub use operations::{
    CachingResolver, LinkResolver, ShortcutReader, TargetResolver, group_by_target,
};
pub use shell_link::{PlatformShortcutReader, UnsupportedShortcutReader, platform_reader};
pub use types::{ShortcutInfo, TargetIdentity};

/// The resolver used for real runs: platform shortcut reader behind a
/// per-run memoization layer.
pub fn default_resolver() -> CachingResolver<LinkResolver<PlatformShortcutReader>> {
    CachingResolver::new(LinkResolver::new(platform_reader()))
}
