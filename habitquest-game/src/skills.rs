//! Skill tree: unlocking tiers with skill points, selecting the active
//! special attack.

use thiserror::Error;

use crate::catalog::{Catalog, SkillDef};
use crate::constants::LOG_SKILL_UNLOCKED;
use crate::state::GameState;

/// Recoverable unlock failures; no points are spent on any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillUnlockError {
    #[error("skill {id} does not exist")]
    UnknownSkill { id: String },
    #[error("skill {id} is already unlocked")]
    AlreadyUnlocked { id: String },
    #[error("requires level {required}, currently level {level}")]
    LevelTooLow { required: u32, level: u32 },
    #[error("requires {prerequisite} to be unlocked first")]
    MissingPrerequisite { prerequisite: String },
    #[error("no skill points available")]
    NoSkillPoints,
}

/// Spend one skill point to unlock a skill.
///
/// # Errors
///
/// Rejects unknown ids, repeat unlocks, unmet level requirements, locked
/// prerequisites and empty point balances; state is untouched on failure.
pub fn unlock_skill(
    state: &mut GameState,
    catalog: &Catalog,
    skill_id: &str,
) -> Result<(), SkillUnlockError> {
    let Some(skill) = catalog.skill(skill_id) else {
        return Err(SkillUnlockError::UnknownSkill {
            id: skill_id.to_string(),
        });
    };
    if state.player.unlocked_skills.contains(skill_id) {
        return Err(SkillUnlockError::AlreadyUnlocked {
            id: skill_id.to_string(),
        });
    }
    if state.player.level < skill.level_requirement {
        return Err(SkillUnlockError::LevelTooLow {
            required: skill.level_requirement,
            level: state.player.level,
        });
    }
    if let Some(prerequisite) = &skill.prerequisite
        && !state.player.unlocked_skills.contains(prerequisite)
    {
        return Err(SkillUnlockError::MissingPrerequisite {
            prerequisite: prerequisite.clone(),
        });
    }
    if state.player.skill_points == 0 {
        return Err(SkillUnlockError::NoSkillPoints);
    }

    state.player.skill_points -= 1;
    state.player.unlocked_skills.insert(skill_id.to_string());
    state.logs.push(String::from(LOG_SKILL_UNLOCKED));
    Ok(())
}

/// Choose which unlocked skill powers the special attack.
/// Returns false (and changes nothing) for locked or unknown skills.
pub fn select_skill(state: &mut GameState, skill_id: &str) -> bool {
    if !state.player.unlocked_skills.contains(skill_id) {
        return false;
    }
    state.player.selected_skill = Some(skill_id.to_string());
    true
}

/// Skills the player could unlock right now, in catalog order.
#[must_use]
pub fn unlockable_skills<'a>(state: &GameState, catalog: &'a Catalog) -> Vec<&'a SkillDef> {
    catalog
        .skills
        .iter()
        .filter(|skill| !state.player.unlocked_skills.contains(&skill.id))
        .filter(|skill| state.player.level >= skill.level_requirement)
        .filter(|skill| {
            skill
                .prerequisite
                .as_ref()
                .is_none_or(|id| state.player.unlocked_skills.contains(id))
        })
        .collect()
}
