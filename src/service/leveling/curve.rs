//! Level curve evaluation.

use crate::model::{level::LevelStanding, level_settings::LevelSettings};

/// Converts a total XP value into a level and progress toward the next one.
///
/// Walks the cost curve iteratively: the first level costs `base_xp`, and the
/// cost of each subsequent level is `base_xp * level^exponent`. The cost
/// compounds per level rather than resetting, so there is no closed form;
/// the loop is the definition. Terminates for any finite, non-negative XP
/// because validated settings guarantee a positive `base_xp` and `exponent`.
///
/// # Arguments
/// - `settings` - Guild's validated leveling settings
/// - `total_xp` - Total XP derived from the member's counters
///
/// # Returns
/// - `LevelStanding` - Level reached and fractional progress in `[0, 1)`
pub fn evaluate(settings: &LevelSettings, total_xp: f64) -> LevelStanding {
    let mut level: u32 = 0;
    let mut remaining = total_xp;
    let mut cost = settings.base_xp as f64;

    while remaining >= cost {
        remaining -= cost;
        level += 1;
        cost = settings.base_xp as f64 * f64::from(level).powf(settings.exponent);
    }

    LevelStanding {
        level,
        progress: remaining / cost,
    }
}
