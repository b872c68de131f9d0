//! Player-authored quests: free-form goals with an experience bounty.

use crate::constants::{LOG_QUEST_ADDED, LOG_QUEST_COMPLETED};
use crate::progression::apply_experience;
use crate::state::{GameState, Quest};

/// What completing a quest paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestOutcome {
    pub exp: i32,
    pub levels_gained: u32,
}

/// Add a quest. Returns false for a blank description or non-positive
/// reward.
pub fn add_quest(state: &mut GameState, description: &str, exp: i32) -> bool {
    let description = description.trim();
    if description.is_empty() || exp <= 0 {
        return false;
    }
    state.quests.push(Quest {
        description: description.to_string(),
        exp,
    });
    state.logs.push(String::from(LOG_QUEST_ADDED));
    true
}

/// Complete the quest at `index`: the experience lands immediately and the
/// quest is removed. Out-of-range indices are a no-op.
pub fn complete_quest(state: &mut GameState, index: usize) -> Option<QuestOutcome> {
    if index >= state.quests.len() {
        return None;
    }
    let quest = state.quests.remove(index);
    let levels_gained = apply_experience(&mut state.player, quest.exp);
    state.logs.push(String::from(LOG_QUEST_COMPLETED));
    Some(QuestOutcome {
        exp: quest.exp,
        levels_gained,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_blank_and_worthless_quests() {
        let mut state = GameState::default();
        assert!(!add_quest(&mut state, "  ", 10));
        assert!(!add_quest(&mut state, "Finish the report", 0));
        assert!(add_quest(&mut state, "Finish the report", 25));
        assert_eq!(state.quests.len(), 1);
    }

    #[test]
    fn completion_grants_exp_and_removes() {
        let mut state = GameState::default();
        add_quest(&mut state, "Run a 5k", 120);

        let outcome = complete_quest(&mut state, 0).unwrap();

        assert_eq!(outcome.exp, 120);
        assert_eq!(outcome.levels_gained, 1);
        assert!(state.quests.is_empty());
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.exp, 20);
    }

    #[test]
    fn out_of_range_completion_is_a_no_op() {
        let mut state = GameState::default();
        add_quest(&mut state, "Read a chapter", 10);
        assert!(complete_quest(&mut state, 5).is_none());
        assert_eq!(state.quests.len(), 1);
        assert_eq!(state.player.exp, 0);
    }
}
