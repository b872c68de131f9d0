//! Root game state: player, bosses, daily log, history, RNG plumbing.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{BossDef, Catalog};
use crate::constants::{
    BURN_ABILITY_TAG, DEBUG_ENV_VAR, LOG_BOSS_QUEUED, LOG_SEED_SET, STREAK_LUCK_DIVISOR,
};
use crate::element::Element;
use crate::numbers::saturate_u32_to_i32;

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl EquipSlot {
    pub const ALL: [Self; 2] = [Self::Weapon, Self::Armor];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weapon" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            _ => Err(()),
        }
    }
}

/// Equipped item ids by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
}

impl Equipment {
    #[must_use]
    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_deref(),
            EquipSlot::Armor => self.armor.as_deref(),
        }
    }

    pub fn set(&mut self, slot: EquipSlot, item_id: Option<String>) -> Option<String> {
        let target = match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
        };
        std::mem::replace(target, item_id)
    }

    /// Ids of everything currently equipped, in slot order.
    pub fn equipped_ids(&self) -> impl Iterator<Item = &str> {
        EquipSlot::ALL.into_iter().filter_map(|slot| self.get(slot))
    }
}

/// One stacked inventory line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

fn default_player_name() -> String {
    String::from("Player")
}

const fn default_base_luck() -> i32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default = "default_player_name")]
    pub name: String,
    pub level: u32,
    pub exp: i32,
    pub exp_to_next_level: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub attack: i32,
    #[serde(default = "default_base_luck")]
    pub base_luck: i32,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub training_streak: u32,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub personal_bests: HashMap<String, HashMap<String, f64>>,
    #[serde(default)]
    pub unlocked_skills: HashSet<String>,
    #[serde(default)]
    pub selected_skill: Option<String>,
    #[serde(default)]
    pub skill_points: u32,
    #[serde(default)]
    pub defeat_counts: HashMap<String, u32>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            level: 1,
            exp: 0,
            exp_to_next_level: 100,
            hp: 100,
            max_hp: 100,
            mp: 50,
            max_mp: 50,
            attack: 5,
            base_luck: default_base_luck(),
            gold: 0,
            training_streak: 0,
            equipment: Equipment::default(),
            inventory: Vec::new(),
            personal_bests: HashMap::new(),
            unlocked_skills: HashSet::new(),
            selected_skill: None,
            skill_points: 0,
            defeat_counts: HashMap::new(),
        }
    }
}

impl Player {
    /// Base attack plus every equipped attack bonus.
    #[must_use]
    pub fn total_attack(&self, catalog: &Catalog) -> i32 {
        self.attack + self.equipment_bonus(catalog, |bonus| bonus.attack)
    }

    /// Base max HP plus every equipped max HP bonus.
    #[must_use]
    pub fn total_max_hp(&self, catalog: &Catalog) -> i32 {
        self.max_hp + self.equipment_bonus(catalog, |bonus| bonus.max_hp)
    }

    /// Base max MP plus every equipped max MP bonus.
    #[must_use]
    pub fn total_max_mp(&self, catalog: &Catalog) -> i32 {
        self.max_mp + self.equipment_bonus(catalog, |bonus| bonus.max_mp)
    }

    fn equipment_bonus<F>(&self, catalog: &Catalog, pick: F) -> i32
    where
        F: Fn(&crate::catalog::StatBonus) -> i32,
    {
        self.equipment
            .equipped_ids()
            .filter_map(|id| catalog.item(id))
            .map(|item| pick(&item.bonus))
            .sum()
    }

    /// Base luck plus the streak bonus (one point per three streak days).
    #[must_use]
    pub fn total_luck(&self) -> i32 {
        self.base_luck + saturate_u32_to_i32(self.training_streak / STREAK_LUCK_DIVISOR)
    }

    /// Clamp HP and MP into the equipment-derived ranges.
    pub fn clamp_vitals(&mut self, catalog: &Catalog) {
        self.hp = self.hp.clamp(0, self.total_max_hp(catalog));
        self.mp = self.mp.clamp(0, self.total_max_mp(catalog));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub image: String,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            id: String::from("ifrit"),
            name: String::from("Ifrit"),
            hp: 300,
            max_hp: 300,
            element: Element::Fire,
            ability: Some(String::from("Burn")),
            image: String::from("assets/sprites/ifrit.png"),
        }
    }
}

impl Boss {
    /// Spawn a boss at full HP from a catalog definition.
    #[must_use]
    pub fn from_def(def: &BossDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            hp: def.max_hp,
            max_hp: def.max_hp,
            element: def.element,
            ability: def.ability.clone(),
            image: def.image.clone(),
        }
    }

    /// Whether the boss retaliates with the burn-class ability.
    #[must_use]
    pub fn has_burn_ability(&self) -> bool {
        self.ability
            .as_deref()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(BURN_ABILITY_TAG))
    }
}

/// Player-authored quest; removed on completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub description: String,
    pub exp: i32,
}

/// The in-progress calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub completed_tasks: HashSet<String>,
    #[serde(default)]
    pub workout_details: HashMap<String, HashMap<String, f64>>,
    #[serde(default)]
    pub finalized: bool,
}

impl DailyLog {
    /// A fresh open log for the given date.
    #[must_use]
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed_tasks.is_empty()
    }

    /// Whether at least one completed task is a workout.
    #[must_use]
    pub fn has_workout(&self, catalog: &Catalog) -> bool {
        self.completed_tasks.iter().any(|id| catalog.is_workout(id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub seed: u64,
    pub player: Player,
    pub current_boss: Boss,
    #[serde(default)]
    pub boss_queue: VecDeque<Boss>,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub history: VecDeque<DailyLog>,
    pub daily_log: DailyLog,
    pub logs: Vec<String>,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            seed: 0,
            player: Player::default(),
            current_boss: Boss::default(),
            boss_queue: VecDeque::new(),
            quests: Vec::new(),
            history: VecDeque::new(),
            daily_log: DailyLog::default(),
            logs: vec![String::from("log.booting")],
            rng: None,
        }
    }
}

impl GameState {
    /// Fresh save for the given date, seeded from the catalog's starting
    /// content (base skill, respawn boss template).
    #[must_use]
    pub fn new_game(catalog: &Catalog, today: NaiveDate) -> Self {
        let mut state = Self::default();
        if let Some(skill) = catalog.base_skill_def() {
            state.player.unlocked_skills.insert(skill.id.clone());
        }
        if let Some(def) = catalog.respawn_boss_def() {
            state.current_boss = Boss::from_def(def);
        }
        state.daily_log = DailyLog::fresh(today);
        state
    }

    /// Attach a deterministic RNG derived from the given seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = Some(ChaCha20Rng::seed_from_u64(seed));
        self.logs.push(String::from(LOG_SEED_SET));
        self
    }

    /// Rebuild the skipped RNG handle after deserialization.
    #[must_use]
    pub fn rehydrate(mut self) -> Self {
        self.rng = Some(ChaCha20Rng::seed_from_u64(self.seed));
        self
    }

    /// One uniform draw in [0,100); true when it lands under `chance_pct`.
    /// Without an RNG handle the draw never succeeds, which keeps replays
    /// and tests deterministic.
    pub(crate) fn roll_under(&mut self, chance_pct: f64) -> bool {
        self.rng
            .as_mut()
            .is_some_and(|rng| rng.random_range(0.0..100.0) < chance_pct)
    }

    /// Uniform index into a collection of `len` entries.
    pub(crate) fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.rng.as_mut().map(|rng| rng.random_range(0..len))
    }

    /// Queue a player-authored boss. Returns false when the input is
    /// rejected (blank name or non-positive HP).
    pub fn add_boss(&mut self, name: &str, max_hp: i32, ability: Option<String>) -> bool {
        let name = name.trim();
        if name.is_empty() || max_hp <= 0 {
            return false;
        }
        let slug = slugify(name);
        let image = format!("assets/sprites/{slug}.png");
        self.boss_queue.push_back(Boss {
            id: slug,
            name: name.to_string(),
            hp: max_hp,
            max_hp,
            element: Element::Neutral,
            ability: ability.filter(|tag| !tag.trim().is_empty()),
            image,
        });
        self.logs.push(String::from(LOG_BOSS_QUEUED));
        true
    }
}

fn slugify(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::load_from_static()
    }

    #[test]
    fn equipment_totals_fold_bonuses() {
        let catalog = catalog();
        let mut player = Player::default();
        assert_eq!(player.total_attack(&catalog), 5);
        assert_eq!(player.total_max_hp(&catalog), 100);

        player.equipment.set(EquipSlot::Weapon, Some(String::from("worn_sword")));
        player.equipment.set(EquipSlot::Armor, Some(String::from("leather_vest")));
        assert_eq!(player.total_attack(&catalog), 6);
        assert_eq!(player.total_max_hp(&catalog), 110);
    }

    #[test]
    fn unknown_equipped_ids_are_skipped() {
        let catalog = catalog();
        let mut player = Player::default();
        player.equipment.set(EquipSlot::Weapon, Some(String::from("excalibur")));
        assert_eq!(player.total_attack(&catalog), 5);
    }

    #[test]
    fn clamp_vitals_tracks_unequip() {
        let catalog = catalog();
        let mut player = Player::default();
        player.equipment.set(EquipSlot::Armor, Some(String::from("leather_vest")));
        player.hp = 110;
        player.clamp_vitals(&catalog);
        assert_eq!(player.hp, 110);

        player.equipment.set(EquipSlot::Armor, None);
        player.clamp_vitals(&catalog);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn total_luck_includes_streak_bonus() {
        let mut player = Player::default();
        player.training_streak = 7;
        assert_eq!(player.total_luck(), 5 + 2);
    }

    #[test]
    fn add_boss_validates_and_queues() {
        let mut state = GameState::default();
        assert!(!state.add_boss("   ", 100, None));
        assert!(!state.add_boss("Golem", 0, None));
        assert!(state.add_boss("Iron Golem", 250, Some(String::from("Burn"))));

        let queued = state.boss_queue.back().unwrap();
        assert_eq!(queued.id, "iron-golem");
        assert_eq!(queued.hp, 250);
        assert_eq!(queued.image, "assets/sprites/iron-golem.png");
        assert!(queued.has_burn_ability());
    }

    #[test]
    fn new_game_starts_with_base_skill_and_template_boss() {
        let catalog = catalog();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let state = GameState::new_game(&catalog, date);
        assert!(state.player.unlocked_skills.contains("fireball"));
        assert_eq!(state.current_boss.id, "ifrit");
        assert_eq!(state.current_boss.hp, state.current_boss.max_hp);
        assert_eq!(state.daily_log.date, date);
        assert!(!state.daily_log.finalized);
    }

    #[test]
    fn missing_rng_disables_random_draws() {
        let mut state = GameState::default();
        assert!(!state.roll_under(100.0));
        assert!(state.pick_index(3).is_none());

        let mut seeded = GameState::default().with_seed(7);
        assert!(seeded.roll_under(100.0));
    }
}
