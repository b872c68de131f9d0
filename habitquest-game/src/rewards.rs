//! Reward resolution: turning a day's completed tasks into gains.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::constants::{
    HABIT_COMPLETION_GOLD, ITEM_DROP_BASE_PCT, ITEM_DROP_LUCK_DIVISOR, LOG_ITEM_DROP,
    WORKOUT_COMPLETION_EXP, WORKOUT_COMPLETION_GOLD,
};
use crate::items::add_item;
use crate::state::{DailyLog, GameState, Player};

/// Deltas earned by one day of completed tasks. Produced pure; the caller
/// applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRewards {
    pub exp: i32,
    pub gold: i32,
    pub hp_regen: i32,
    pub mp_regen: i32,
    /// At least one workout task was completed; combat is enabled.
    pub workout_completed: bool,
}

/// Resolve the day's completed tasks against the catalog.
///
/// Habits grant their defined exp/regen plus one gold apiece. Completing at
/// least one workout grants a one-time flat bonus. Ids the catalog no longer
/// knows are skipped.
#[must_use]
pub fn resolve_day_rewards(log: &DailyLog, catalog: &Catalog) -> DayRewards {
    let mut rewards = DayRewards {
        workout_completed: log.has_workout(catalog),
        ..DayRewards::default()
    };

    if rewards.workout_completed {
        rewards.exp += WORKOUT_COMPLETION_EXP;
        rewards.gold += WORKOUT_COMPLETION_GOLD;
    }

    for task_id in &log.completed_tasks {
        if let Some(habit) = catalog.habit(task_id) {
            rewards.exp += habit.exp;
            rewards.hp_regen += habit.hp_regen;
            rewards.mp_regen += habit.mp_regen;
            rewards.gold += HABIT_COMPLETION_GOLD;
        }
    }

    rewards
}

/// Fold the day's workout metrics into lifetime personal bests.
/// A metric only moves when the new value is strictly greater.
pub fn update_personal_bests(player: &mut Player, log: &DailyLog) {
    for (task_id, metrics) in &log.workout_details {
        let bests = player
            .personal_bests
            .entry(task_id.clone())
            .or_default();
        for (metric, value) in metrics {
            let best = bests.entry(metric.clone()).or_insert(0.0);
            if *value > *best {
                *best = *value;
            }
        }
    }
}

/// Luck-scaled chance of a random potion drop, rolled on the first
/// completion of a task each day. Returns the dropped item id.
pub fn roll_task_drop(state: &mut GameState, catalog: &Catalog) -> Option<String> {
    let chance =
        ITEM_DROP_BASE_PCT + f64::from(state.player.total_luck()) / ITEM_DROP_LUCK_DIVISOR;
    if !state.roll_under(chance) {
        return None;
    }
    let potions: Vec<&str> = catalog.potions().map(|def| def.id.as_str()).collect();
    let idx = state.pick_index(potions.len())?;
    let item_id = potions[idx].to_string();
    add_item(&mut state.player, &item_id);
    state.logs.push(String::from(LOG_ITEM_DROP));
    Some(item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log_with(tasks: &[&str]) -> DailyLog {
        let mut log = DailyLog::fresh(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        for id in tasks {
            log.completed_tasks.insert((*id).to_string());
        }
        log
    }

    #[test]
    fn empty_day_yields_nothing() {
        let catalog = Catalog::load_from_static();
        let rewards = resolve_day_rewards(&log_with(&[]), &catalog);
        assert_eq!(rewards, DayRewards::default());
    }

    #[test]
    fn habits_stack_and_each_pays_gold() {
        let catalog = Catalog::load_from_static();
        let rewards = resolve_day_rewards(&log_with(&["reading", "healthy_diet"]), &catalog);
        assert_eq!(rewards.exp, 20);
        assert_eq!(rewards.gold, 2);
        assert_eq!(rewards.hp_regen, 10);
        assert_eq!(rewards.mp_regen, 10);
        assert!(!rewards.workout_completed);
    }

    #[test]
    fn workout_bonus_is_flat_not_per_task() {
        let catalog = Catalog::load_from_static();
        let one = resolve_day_rewards(&log_with(&["push_ups"]), &catalog);
        let three = resolve_day_rewards(&log_with(&["push_ups", "pull_ups", "abs"]), &catalog);
        assert_eq!(one.exp, 30);
        assert_eq!(one.gold, 5);
        assert_eq!(three.exp, 30);
        assert_eq!(three.gold, 5);
        assert!(three.workout_completed);
    }

    #[test]
    fn unknown_task_ids_are_skipped() {
        let catalog = Catalog::load_from_static();
        let rewards = resolve_day_rewards(&log_with(&["retired_task", "reading"]), &catalog);
        assert_eq!(rewards.exp, 10);
        assert_eq!(rewards.gold, 1);
    }

    #[test]
    fn personal_bests_only_move_upward() {
        let mut player = Player::default();
        let mut log = log_with(&["leg_press"]);
        log.workout_details.insert(
            String::from("leg_press"),
            [(String::from("weight"), 80.0)].into_iter().collect(),
        );
        update_personal_bests(&mut player, &log);
        assert_eq!(player.personal_bests["leg_press"]["weight"], 80.0);

        log.workout_details
            .get_mut("leg_press")
            .unwrap()
            .insert(String::from("weight"), 60.0);
        update_personal_bests(&mut player, &log);
        assert_eq!(player.personal_bests["leg_press"]["weight"], 80.0);
    }

    #[test]
    fn drop_roll_needs_an_rng() {
        let catalog = Catalog::load_from_static();
        let mut state = GameState::default();
        assert!(roll_task_drop(&mut state, &catalog).is_none());
        assert!(state.player.inventory.is_empty());
    }
}
