//! Derived leveling values.
//!
//! Nothing in this module is stored: a member's standing is recomputed from
//! their counters on demand, and a role delta lives only for the duration of
//! one reconciliation pass.

use serenity::all::RoleId;

/// Number of characters in the rendered progress bar.
const BAR_LEN: usize = 35;

/// A member's level and fractional progress toward the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStanding {
    /// Discrete level derived from total XP.
    pub level: u32,
    /// Progress toward the next level, in `[0, 1)`.
    pub progress: f64,
}

impl LevelStanding {
    /// Renders the fixed-width text progress bar shown by the level command.
    ///
    /// The bar is `BAR_LEN` characters of `=` scaled by `progress` (truncated,
    /// not rounded), followed by the integer percentage.
    pub fn progress_bar(&self) -> String {
        let filled = (BAR_LEN as f64 * self.progress) as usize;
        format!(
            "[{:<width$}] {:.0}%",
            "=".repeat(filled),
            self.progress * 100.0,
            width = BAR_LEN
        )
    }
}

/// The minimal set of role changes needed to match a member's level.
///
/// Callers apply only this delta rather than replacing the member's whole
/// role list, keeping Discord API calls to a minimum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleDelta {
    /// Roles the member qualifies for but does not hold.
    pub add: Vec<RoleId>,
    /// Roles the member holds but no longer qualifies for.
    pub remove: Vec<RoleId>,
}

impl RoleDelta {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// A member's live voice state at the moment a session interval is closed.
///
/// Defaults to an eligible context (not muted, not alone), which is what a
/// leave transition uses since the member no longer has a voice state then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoiceContext {
    pub self_muted: bool,
    pub alone_in_channel: bool,
}
