use tracing::debug;

use crate::items::ItemDescriptor;
use crate::matching::name_contains;
use crate::policy::types::PolicyConfig;
use crate::resolver::TargetIdentity;

/// Decide whether this item may run alongside an existing instance.
///
/// Pure function of the item, its resolved identity, and the policy
/// config; rules are evaluated in order and the first match wins.
pub fn decide(item: &ItemDescriptor, identity: &TargetIdentity, config: &PolicyConfig) -> bool {
    // Without a resolved name the name-based rules cannot apply.
    if !identity.resolvable {
        return config.default_allow_multiple;
    }

    let file_name = item.file_name();

    // Naming convention for intentionally-distinct variants of the same
    // program ("Firefox - Profile A"). Overrides every other rule.
    if file_name.contains("--") || file_name.contains(" - ") {
        debug!(
            event = "core.policy.variant_marker",
            item = %file_name
        );
        return true;
    }

    let target_base = &identity.canonical_name;
    let item_base = item.base_name();

    if config.restrict_all {
        return match &config.allowed_names {
            Some(allowed) => allowed
                .iter()
                .any(|name| name_contains(target_base, name) || name_contains(&item_base, name)),
            None => false,
        };
    }

    let restricted = config
        .restricted_names
        .iter()
        .any(|name| name_contains(target_base, name) || name_contains(&item_base, name));
    if restricted {
        return false;
    }

    config.default_allow_multiple
}
