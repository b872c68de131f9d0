//! Experience, level-up and stat-growth rules.

use crate::constants::{
    EXP_GROWTH_FACTOR, LEVEL_ATTACK_GAIN, LEVEL_MAX_HP_GAIN, LEVEL_MAX_MP_GAIN,
    LUCK_LEVEL_INTERVAL, SKILL_POINTS_PER_LEVEL,
};
use crate::numbers::round_f64_to_i32;
use crate::state::Player;

/// Grant experience and resolve any resulting level-ups.
///
/// Each level: the threshold grows 1.5x (rounded), max HP +10, max MP +5,
/// attack +2, luck +1 on every third level, one skill point, and vitals are
/// fully restored. Returns the number of levels gained.
pub fn apply_experience(player: &mut Player, amount: i32) -> u32 {
    player.exp += amount.max(0);

    let mut levels = 0u32;
    while player.exp >= player.exp_to_next_level {
        levels += 1;
        player.level += 1;
        player.exp -= player.exp_to_next_level;
        player.exp_to_next_level =
            round_f64_to_i32(f64::from(player.exp_to_next_level) * EXP_GROWTH_FACTOR).max(1);
        player.max_hp += LEVEL_MAX_HP_GAIN;
        player.max_mp += LEVEL_MAX_MP_GAIN;
        player.attack += LEVEL_ATTACK_GAIN;
        if player.level % LUCK_LEVEL_INTERVAL == 0 {
            player.base_luck += 1;
        }
        player.skill_points += SKILL_POINTS_PER_LEVEL;
        player.hp = player.max_hp;
        player.mp = player.max_mp;
    }
    levels
}
