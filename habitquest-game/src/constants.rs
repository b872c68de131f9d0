//! Centralized balance and tuning constants for HabitQuest game logic.
//!
//! These values define the deterministic math for reward, progression and
//! combat resolution. Keeping them together ensures that gameplay can only
//! be adjusted via code changes reviewed in version control, rather than
//! through external JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "HABITQUEST_DEBUG_LOGS";
pub(crate) const LOG_SEED_SET: &str = "log.seed-set";
pub(crate) const LOG_DAY_LOGGED: &str = "log.day.logged";
pub(crate) const LOG_DAY_ROLLOVER: &str = "log.day.rollover";
pub(crate) const LOG_STREAK_RESET: &str = "log.streak.reset";
pub(crate) const LOG_LEVEL_UP: &str = "log.level-up";
pub(crate) const LOG_ATTACK_CRITICAL: &str = "log.attack.critical";
pub(crate) const LOG_BOSS_DEFEATED: &str = "log.boss.defeated";
pub(crate) const LOG_BOSS_NEXT: &str = "log.boss.next";
pub(crate) const LOG_BOSS_RESPAWN: &str = "log.boss.respawn";
pub(crate) const LOG_BOSS_QUEUED: &str = "log.boss.queued";
pub(crate) const LOG_ITEM_DROP: &str = "log.item.drop";
pub(crate) const LOG_ITEM_USED: &str = "log.item.used";
pub(crate) const LOG_ITEM_EQUIPPED: &str = "log.item.equipped";
pub(crate) const LOG_SHOP_PURCHASE: &str = "log.shop.purchase";
pub(crate) const LOG_QUEST_ADDED: &str = "log.quest.added";
pub(crate) const LOG_QUEST_COMPLETED: &str = "log.quest.completed";
pub(crate) const LOG_SKILL_UNLOCKED: &str = "log.skill.unlocked";

// Progression tuning -------------------------------------------------------
pub(crate) const EXP_GROWTH_FACTOR: f64 = 1.5;
pub(crate) const LEVEL_MAX_HP_GAIN: i32 = 10;
pub(crate) const LEVEL_MAX_MP_GAIN: i32 = 5;
pub(crate) const LEVEL_ATTACK_GAIN: i32 = 2;
pub(crate) const LUCK_LEVEL_INTERVAL: u32 = 3;
pub(crate) const SKILL_POINTS_PER_LEVEL: u32 = 1;

// Reward tuning ------------------------------------------------------------
pub(crate) const WORKOUT_COMPLETION_EXP: i32 = 30;
pub(crate) const WORKOUT_COMPLETION_GOLD: i32 = 5;
pub(crate) const HABIT_COMPLETION_GOLD: i32 = 1;
pub(crate) const ITEM_DROP_BASE_PCT: f64 = 5.0;
pub(crate) const ITEM_DROP_LUCK_DIVISOR: f64 = 2.0;

// Combat tuning ------------------------------------------------------------
pub(crate) const CRITICAL_HIT_MULTIPLIER: f64 = 2.0;
pub(crate) const STREAK_LUCK_DIVISOR: u32 = 3;
pub(crate) const STREAK_BONUS_STEP: f64 = 0.1;
pub(crate) const SUPER_EFFECTIVE_MULTIPLIER: f64 = 1.5;
pub(crate) const RESISTED_MULTIPLIER: f64 = 0.5;
pub(crate) const BURN_RETALIATION_HP: i32 = 5;
pub(crate) const BURN_ABILITY_TAG: &str = "burn";

// Lifecycle tuning ---------------------------------------------------------
pub(crate) const HISTORY_CAP: usize = 365;
