use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::items::{ItemDescriptor, ItemKind};
use crate::resolver::errors::ResolveError;
use crate::resolver::types::{ShortcutInfo, TargetIdentity};

/// Platform capability that dereferences a shortcut link file.
pub trait ShortcutReader {
    fn read(&self, path: &Path) -> Result<ShortcutInfo, ResolveError>;
}

/// Maps a launchable item to the process identity it should produce.
pub trait TargetResolver {
    fn resolve(&self, item: &ItemDescriptor) -> TargetIdentity;
}

/// Standard resolver: native executables are their own target, shortcuts
/// go through the platform shortcut reader. Any shortcut failure degrades
/// to an unresolvable identity rather than an error.
pub struct LinkResolver<R: ShortcutReader> {
    reader: R,
}

impl<R: ShortcutReader> LinkResolver<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: ShortcutReader> TargetResolver for LinkResolver<R> {
    fn resolve(&self, item: &ItemDescriptor) -> TargetIdentity {
        match item.kind {
            ItemKind::NativeExecutable => TargetIdentity::resolved(&item.file_name(), ""),
            ItemKind::ShortcutLink => match self.reader.read(&item.path) {
                Ok(info) => {
                    let target_name = Path::new(&info.target_path)
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    if target_name.is_empty() {
                        warn!(
                            event = "core.resolver.empty_target",
                            path = %item.path.display()
                        );
                        return TargetIdentity::unresolvable();
                    }
                    TargetIdentity::resolved(&target_name, &info.arguments)
                }
                Err(e) => {
                    warn!(
                        event = "core.resolver.shortcut_unresolvable",
                        path = %item.path.display(),
                        error = %e
                    );
                    TargetIdentity::unresolvable()
                }
            },
        }
    }
}

/// Memoizes resolution per item path for the duration of one run.
///
/// The orchestrator resolves each item at the pre-check and again while
/// polling; shortcut dereferencing goes through COM, so caching keeps the
/// detector cheap relative to the polling interval.
pub struct CachingResolver<R: TargetResolver> {
    inner: R,
    cache: RefCell<HashMap<String, TargetIdentity>>,
}

impl<R: TargetResolver> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<R: TargetResolver> TargetResolver for CachingResolver<R> {
    fn resolve(&self, item: &ItemDescriptor) -> TargetIdentity {
        let key = item.session_key();
        if let Some(identity) = self.cache.borrow().get(&key) {
            return identity.clone();
        }
        let identity = self.inner.resolve(item);
        debug!(
            event = "core.resolver.resolved",
            path = %item.path.display(),
            canonical_name = %identity.canonical_name,
            resolvable = identity.resolvable
        );
        self.cache
            .borrow_mut()
            .insert(key, identity.clone());
        identity
    }
}

/// Group items by resolved target name, for the duplicate-target report.
///
/// Returns the groups plus the items whose resolution failed (unparseable
/// shortcuts), which the caller reports separately.
pub fn group_by_target<'a>(
    items: &'a [ItemDescriptor],
    resolver: &dyn TargetResolver,
) -> (HashMap<String, Vec<&'a ItemDescriptor>>, Vec<&'a ItemDescriptor>) {
    let mut groups: HashMap<String, Vec<&ItemDescriptor>> = HashMap::new();
    let mut unresolvable = Vec::new();

    for item in items {
        let identity = resolver.resolve(item);
        if identity.resolvable {
            groups.entry(identity.target_name).or_default().push(item);
        } else {
            unresolvable.push(item);
        }
    }

    (groups, unresolvable)
}
