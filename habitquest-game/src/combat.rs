//! Attack resolution: crits, streak bonus, elemental modifiers, boss
//! retaliation and queue consumption.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::catalog::{Catalog, SkillDef};
use crate::constants::{
    BURN_RETALIATION_HP, CRITICAL_HIT_MULTIPLIER, LOG_ATTACK_CRITICAL, LOG_BOSS_DEFEATED,
    LOG_BOSS_NEXT, LOG_BOSS_RESPAWN, STREAK_BONUS_STEP,
};
use crate::element::{Effectiveness, Element};
use crate::numbers::round_f64_to_i32;
use crate::state::{Boss, GameState, debug_log_enabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    Normal,
    Special,
}

/// Recoverable attack failures; nothing is mutated when these are returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttackError {
    #[error("not enough MP: need {required}, have {available}")]
    InsufficientMp { required: i32, available: i32 },
}

/// Side events of one attack, sized for the common case.
pub type CombatEvents = SmallVec<[CombatEvent; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatEvent {
    Critical,
    Retaliation { hp_lost: i32 },
    BossDefeated { boss_id: String },
    BossRespawned,
}

/// Everything presentation needs to narrate one attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    /// Final integer damage applied to the boss.
    pub damage: i32,
    pub critical: bool,
    pub effectiveness: Effectiveness,
    /// Name of the boss felled by this attack, if any.
    pub boss_defeated: Option<String>,
    pub events: CombatEvents,
}

/// The damage profile of one attack: element plus multiplier, with the MP
/// cost already vetted.
struct AttackProfile {
    element: Element,
    multiplier: f64,
    mp_cost: i32,
}

fn special_profile(skill: &SkillDef) -> AttackProfile {
    AttackProfile {
        element: skill.element,
        multiplier: skill.damage_multiplier,
        mp_cost: skill.mp_cost,
    }
}

const fn normal_profile() -> AttackProfile {
    AttackProfile {
        element: Element::Neutral,
        multiplier: 1.0,
        mp_cost: 0,
    }
}

/// Resolve one attack against the current boss.
///
/// Special attacks draw on the player's selected skill; a selected skill
/// the catalog no longer knows falls back to the base skill, and a catalog
/// with no skills at all degrades the attack to the normal profile.
///
/// # Errors
///
/// Returns `AttackError::InsufficientMp` when a special attack costs more
/// MP than the player has. No state is mutated in that case.
pub fn resolve_attack(
    state: &mut GameState,
    catalog: &Catalog,
    kind: AttackKind,
) -> Result<AttackOutcome, AttackError> {
    let profile = match kind {
        AttackKind::Normal => normal_profile(),
        AttackKind::Special => state
            .player
            .selected_skill
            .as_deref()
            .and_then(|id| catalog.skill(id))
            .or_else(|| catalog.base_skill_def())
            .map_or_else(normal_profile, special_profile),
    };

    if profile.mp_cost > state.player.mp {
        return Err(AttackError::InsufficientMp {
            required: profile.mp_cost,
            available: state.player.mp,
        });
    }
    state.player.mp -= profile.mp_cost;

    let mut events = CombatEvents::new();
    let mut multiplier = profile.multiplier;

    let luck = state.player.total_luck();
    let critical = state.roll_under(f64::from(luck));
    if critical {
        multiplier *= CRITICAL_HIT_MULTIPLIER;
        events.push(CombatEvent::Critical);
        state.logs.push(String::from(LOG_ATTACK_CRITICAL));
    }

    let effectiveness = catalog
        .chart
        .effectiveness(profile.element, state.current_boss.element);

    let streak = state.player.training_streak;
    let streak_bonus = 1.0 + STREAK_BONUS_STEP * f64::from(streak.saturating_sub(1));

    let damage = round_f64_to_i32(
        f64::from(state.player.total_attack(catalog))
            * streak_bonus
            * multiplier
            * effectiveness.multiplier(),
    );
    state.current_boss.hp = (state.current_boss.hp - damage).max(0);

    if debug_log_enabled() {
        println!(
            "Attack: {damage} dmg ({} element, x{multiplier:.2}, streak {streak}, {})",
            profile.element.as_str(),
            effectiveness.key()
        );
    }

    if state.current_boss.has_burn_ability() {
        state.player.hp = (state.player.hp - BURN_RETALIATION_HP).max(0);
        events.push(CombatEvent::Retaliation {
            hp_lost: BURN_RETALIATION_HP,
        });
    }

    let boss_defeated = if state.current_boss.hp == 0 {
        let fallen = state.current_boss.clone();
        *state.player.defeat_counts.entry(fallen.id.clone()).or_insert(0) += 1;
        state.logs.push(String::from(LOG_BOSS_DEFEATED));
        events.push(CombatEvent::BossDefeated {
            boss_id: fallen.id.clone(),
        });

        if let Some(next) = state.boss_queue.pop_front() {
            state.current_boss = next;
            state.logs.push(String::from(LOG_BOSS_NEXT));
        } else {
            state.current_boss = catalog
                .respawn_boss_def()
                .map_or_else(Boss::default, Boss::from_def);
            state.logs.push(String::from(LOG_BOSS_RESPAWN));
            events.push(CombatEvent::BossRespawned);
        }
        Some(fallen.name)
    } else {
        None
    };

    Ok(AttackOutcome {
        damage,
        critical,
        effectiveness,
        boss_defeated,
        events,
    })
}
