//! Daily lifecycle: task toggling, the once-per-day finalize, and
//! calendar-day rollover into history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::combat::{AttackError, AttackKind, AttackOutcome, resolve_attack};
use crate::constants::{HISTORY_CAP, LOG_DAY_LOGGED, LOG_DAY_ROLLOVER, LOG_LEVEL_UP, LOG_STREAK_RESET};
use crate::progression::apply_experience;
use crate::rewards::{DayRewards, resolve_day_rewards, roll_task_drop, update_personal_bests};
use crate::state::{DailyLog, GameState, debug_log_enabled};

/// Tunables for the daily state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Whether a day with zero completed tasks may still be finalized
    /// (consuming its one finalize slot).
    #[serde(default = "default_allow_empty_log")]
    pub allow_empty_log: bool,
    /// Archived days kept before the oldest is evicted.
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

const fn default_allow_empty_log() -> bool {
    true
}

const fn default_history_cap() -> usize {
    HISTORY_CAP
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            allow_empty_log: default_allow_empty_log(),
            history_cap: default_history_cap(),
        }
    }
}

impl LifecycleConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }
}

/// Recoverable finalize failures; no state changes on any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogDayError {
    #[error("day {date} has already been logged")]
    AlreadyLogged { date: NaiveDate },
    #[error("no tasks completed today")]
    EmptyDay,
    #[error(transparent)]
    Attack(#[from] AttackError),
}

/// Everything presentation needs to narrate one logged day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub rewards: DayRewards,
    pub levels_gained: u32,
    /// Present when a workout enabled combat.
    pub attack: Option<AttackOutcome>,
}

/// The local wall-clock calendar day; the rollover boundary follows the
/// player's timezone, not UTC.
#[must_use]
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Finalize the open day: rewards, progression, then combat when a workout
/// was completed. Consumes the date's single finalize slot.
///
/// The pipeline runs on a working copy and commits only on success, so a
/// rejected special attack leaves the save byte-identical.
///
/// # Errors
///
/// `AlreadyLogged` on a second finalize for the same date, `EmptyDay` when
/// the configuration forbids logging a day with no completed tasks, and a
/// propagated `AttackError` when the requested special attack cannot be
/// paid for.
pub fn log_day(
    state: &mut GameState,
    catalog: &Catalog,
    attack_kind: AttackKind,
    config: &LifecycleConfig,
) -> Result<DaySummary, LogDayError> {
    if state.daily_log.finalized {
        return Err(LogDayError::AlreadyLogged {
            date: state.daily_log.date,
        });
    }
    if state.daily_log.is_empty() && !config.allow_empty_log {
        return Err(LogDayError::EmptyDay);
    }

    let rewards = resolve_day_rewards(&state.daily_log, catalog);

    let mut next = state.clone();
    if rewards.workout_completed {
        next.player.training_streak += 1;
    }
    next.player.hp =
        (next.player.hp + rewards.hp_regen).min(next.player.total_max_hp(catalog));
    next.player.mp =
        (next.player.mp + rewards.mp_regen).min(next.player.total_max_mp(catalog));
    next.player.gold += rewards.gold;

    update_personal_bests(&mut next.player, &state.daily_log);

    let levels_gained = apply_experience(&mut next.player, rewards.exp);
    if levels_gained > 0 {
        next.logs.push(String::from(LOG_LEVEL_UP));
    }
    next.player.clamp_vitals(catalog);

    let attack = if rewards.workout_completed {
        Some(resolve_attack(&mut next, catalog, attack_kind)?)
    } else {
        None
    };

    next.daily_log.finalized = true;
    next.logs.push(String::from(LOG_DAY_LOGGED));

    if debug_log_enabled() {
        println!(
            "Logged {}: +{} exp, +{} gold, {} level(s), streak {}",
            next.daily_log.date, rewards.exp, rewards.gold, levels_gained,
            next.player.training_streak
        );
    }

    *state = next;
    Ok(DaySummary {
        rewards,
        levels_gained,
        attack,
    })
}

/// Roll the stored daily log forward to `today` if the calendar day has
/// changed: archive a non-empty outgoing day, reset the streak when the
/// outgoing day had no workout, and open a fresh log.
///
/// Returns true when a rollover happened.
pub fn roll_to(
    state: &mut GameState,
    catalog: &Catalog,
    today: NaiveDate,
    config: &LifecycleConfig,
) -> bool {
    if state.daily_log.date == today {
        return false;
    }

    let outgoing = std::mem::replace(&mut state.daily_log, DailyLog::fresh(today));
    if !outgoing.completed_tasks.is_empty() {
        state.history.push_back(outgoing.clone());
        while state.history.len() > config.history_cap.max(1) {
            state.history.pop_front();
        }
    }
    if !outgoing.has_workout(catalog) && state.player.training_streak > 0 {
        state.player.training_streak = 0;
        state.logs.push(String::from(LOG_STREAK_RESET));
    }
    state.logs.push(String::from(LOG_DAY_ROLLOVER));
    true
}

/// Mark a task completed or not for the open day. The first completion of
/// a task rolls the luck-scaled item drop; the dropped item id is returned.
/// Ids the catalog does not know are skipped.
pub fn toggle_task(
    state: &mut GameState,
    catalog: &Catalog,
    task_id: &str,
    done: bool,
) -> Option<String> {
    if catalog.workout(task_id).is_none() && catalog.habit(task_id).is_none() {
        return None;
    }
    if done {
        if state.daily_log.completed_tasks.insert(task_id.to_string()) {
            return roll_task_drop(state, catalog);
        }
    } else {
        state.daily_log.completed_tasks.remove(task_id);
    }
    None
}

/// Record one numeric metric for a workout. A positive value marks the
/// task completed, mirroring the checkbox the input sits next to.
pub fn record_workout_metric(
    state: &mut GameState,
    catalog: &Catalog,
    task_id: &str,
    metric: &str,
    value: f64,
) -> Option<String> {
    let known = catalog
        .workout(task_id)
        .is_some_and(|def| def.metrics.iter().any(|m| m == metric));
    if !known {
        return None;
    }

    state
        .daily_log
        .workout_details
        .entry(task_id.to_string())
        .or_default()
        .insert(metric.to_string(), value.max(0.0));

    if value > 0.0 && !state.daily_log.completed_tasks.contains(task_id) {
        return toggle_task(state, catalog, task_id, true);
    }
    None
}
