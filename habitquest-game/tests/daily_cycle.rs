use chrono::{Days, NaiveDate};
use habitquest_game::{
    AttackKind, Catalog, Effectiveness, GameState, LifecycleConfig, LogDayError, log_day,
    roll_to, toggle_task,
};

fn catalog() -> Catalog {
    Catalog::load_from_static()
}

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Days::new(offset)
}

/// Deterministic state: no RNG handle, so crits and drops never fire.
fn fresh_state(catalog: &Catalog) -> GameState {
    GameState::new_game(catalog, day(0))
}

#[test]
fn workout_streak_survives_rollover() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);

    toggle_task(&mut state, &catalog, "push_ups", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();
    assert_eq!(state.player.training_streak, 1);

    assert!(roll_to(&mut state, &catalog, day(1), &config));
    assert_eq!(state.player.training_streak, 1, "workout day keeps the streak");

    toggle_task(&mut state, &catalog, "pull_ups", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();
    assert_eq!(state.player.training_streak, 2);
}

#[test]
fn workoutless_day_resets_streak_at_rollover() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);

    toggle_task(&mut state, &catalog, "push_ups", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();
    roll_to(&mut state, &catalog, day(1), &config);
    assert_eq!(state.player.training_streak, 1);

    // Day with only a habit completed: archived, but the streak dies.
    toggle_task(&mut state, &catalog, "reading", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();
    roll_to(&mut state, &catalog, day(2), &config);

    assert_eq!(state.player.training_streak, 0);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn empty_days_are_not_archived() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);

    roll_to(&mut state, &catalog, day(1), &config);
    roll_to(&mut state, &catalog, day(2), &config);

    assert!(state.history.is_empty());
    assert_eq!(state.daily_log.date, day(2));
}

#[test]
fn same_day_rollover_is_a_no_op() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);
    toggle_task(&mut state, &catalog, "reading", true);

    assert!(!roll_to(&mut state, &catalog, day(0), &config));
    assert!(state.daily_log.completed_tasks.contains("reading"));
}

#[test]
fn history_evicts_oldest_past_cap() {
    let catalog = catalog();
    let config = LifecycleConfig {
        history_cap: 3,
        ..LifecycleConfig::default()
    };
    let mut state = fresh_state(&catalog);

    for offset in 1..=5 {
        toggle_task(&mut state, &catalog, "reading", true);
        roll_to(&mut state, &catalog, day(offset), &config);
    }

    assert_eq!(state.history.len(), 3);
    assert_eq!(state.history.front().unwrap().date, day(2));
    assert_eq!(state.history.back().unwrap().date, day(4));
}

#[test]
fn finalize_slot_returns_after_rollover() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);

    toggle_task(&mut state, &catalog, "reading", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();
    assert_eq!(
        log_day(&mut state, &catalog, AttackKind::Normal, &config),
        Err(LogDayError::AlreadyLogged { date: day(0) })
    );

    roll_to(&mut state, &catalog, day(1), &config);
    toggle_task(&mut state, &catalog, "reading", true);
    assert!(log_day(&mut state, &catalog, AttackKind::Normal, &config).is_ok());
}

/// The worked progression scenario: 90 exp banked, a workout day tips the
/// player over the 100 threshold, and the same finalize lands a 7-damage
/// neutral hit on a 300 HP boss.
#[test]
fn workout_day_levels_up_then_attacks() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);
    state.player.exp = 90;
    state.player.training_streak = 0;

    toggle_task(&mut state, &catalog, "push_ups", true);
    let summary = log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();

    // +30 workout exp: 120 total, one level.
    assert_eq!(summary.levels_gained, 1);
    assert_eq!(state.player.level, 2);
    assert_eq!(state.player.exp, 20);
    assert_eq!(state.player.exp_to_next_level, 150);
    assert_eq!(state.player.max_hp, 110);
    assert_eq!(state.player.max_mp, 55);
    assert_eq!(state.player.attack, 7);
    assert_eq!(state.player.gold, 5);

    // Combat ran with the post-level stats and the fresh streak of 1.
    let attack = summary.attack.unwrap();
    assert_eq!(attack.damage, 7);
    assert!(!attack.critical);
    assert_eq!(attack.effectiveness, Effectiveness::Neutral);
    assert_eq!(state.current_boss.hp, 293);

    // Ifrit's burn retaliation bites after the level-up restore.
    assert_eq!(state.player.hp, 105);
}

#[test]
fn habit_regen_is_clamped_to_totals() {
    let catalog = catalog();
    let config = LifecycleConfig::default_config();
    let mut state = fresh_state(&catalog);
    state.player.hp = 95;
    state.player.mp = 45;

    toggle_task(&mut state, &catalog, "healthy_diet", true);
    toggle_task(&mut state, &catalog, "reading", true);
    log_day(&mut state, &catalog, AttackKind::Normal, &config).unwrap();

    assert_eq!(state.player.hp, 100, "hp regen clamps at max");
    assert_eq!(state.player.mp, 50, "mp regen clamps at max");
}
