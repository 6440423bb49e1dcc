//! Level role reconciliation.

use std::collections::HashSet;

use serenity::all::RoleId;

use crate::model::{level::RoleDelta, level_settings::LevelSettings};

/// Computes the role changes needed to match a member's level.
///
/// Walks the configured thresholds from highest to lowest, tracking the
/// highest one the member's level meets. Under the stacking policy the member
/// ends up holding every role at or below their level; under the single-role
/// policy they hold only the highest qualifying role, and every other
/// configured level role is removed.
///
/// The output is a delta against `current_roles`, never an absolute role
/// list: callers apply only the changes, which keeps Discord API calls to the
/// minimum. Duplicate thresholds cannot reach this function; settings
/// validation rejects them.
///
/// # Arguments
/// - `settings` - Guild's validated leveling settings (thresholds sorted
///   highest-first)
/// - `level` - The member's current level
/// - `current_roles` - Role IDs the member holds right now
///
/// # Returns
/// - `RoleDelta` - Roles to add and roles to remove
pub fn reconcile(
    settings: &LevelSettings,
    level: u32,
    current_roles: &HashSet<RoleId>,
) -> RoleDelta {
    let mut delta = RoleDelta::default();
    let mut highest_qualifying: Option<RoleId> = None;

    for entry in &settings.level_roles {
        if level >= entry.level {
            if highest_qualifying.is_none() {
                highest_qualifying = Some(entry.role_id);
            }
            if settings.stack_roles && !current_roles.contains(&entry.role_id) {
                delta.add.push(entry.role_id);
            }
        } else if current_roles.contains(&entry.role_id) {
            delta.remove.push(entry.role_id);
        }
    }

    if !settings.stack_roles {
        if let Some(role_id) = highest_qualifying {
            if !current_roles.contains(&role_id) {
                delta.add.push(role_id);
            }
        }
        // Qualifying-but-not-highest roles; unmet thresholds were already
        // queued for removal above.
        for entry in &settings.level_roles {
            if level >= entry.level
                && Some(entry.role_id) != highest_qualifying
                && current_roles.contains(&entry.role_id)
            {
                delta.remove.push(entry.role_id);
            }
        }
    }

    delta
}
