//! Static content tables: workouts, habits, items, bosses, skills, shop.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementChart};

const DEFAULT_CATALOG_DATA: &str = include_str!("../assets/data/catalog.json");

/// A completable daily task with optional numeric metrics.
/// Completing at least one workout enables combat for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDef {
    pub id: String,
    pub name: String,
    /// Metric names the player may record (weight, reps, rounds, ...).
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// A completable daily task with no metrics and small flat rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exp: i32,
    #[serde(default)]
    pub hp_regen: i32,
    #[serde(default)]
    pub mp_regen: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Potion,
    Weapon,
    Armor,
}

/// Declarative one-shot item effect, interpreted by the item resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemEffect {
    RestoreHp { amount: i32 },
    RestoreMp { amount: i32 },
}

/// Passive stat bonuses granted while an item is equipped.
/// All fields default to 0 if not specified in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatBonus {
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub max_hp: i32,
    #[serde(default)]
    pub max_mp: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub bonus: StatBonus,
    #[serde(default)]
    pub effect: Option<ItemEffect>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossDef {
    pub id: String,
    pub name: String,
    pub max_hp: i32,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default = "default_tier")]
    pub tier: u8,
    #[serde(default)]
    pub mp_cost: i32,
    pub damage_multiplier: f64,
    #[serde(default = "default_level_requirement")]
    pub level_requirement: u32,
    #[serde(default)]
    pub prerequisite: Option<String>,
}

/// A gold price for one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub id: String,
    pub cost: i32,
}

const fn default_tier() -> u8 {
    1
}

const fn default_level_requirement() -> u32 {
    1
}

/// Container for all static game content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub workouts: Vec<WorkoutDef>,
    #[serde(default)]
    pub habits: Vec<HabitDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub bosses: Vec<BossDef>,
    #[serde(default)]
    pub skills: Vec<SkillDef>,
    #[serde(default)]
    pub shop: Vec<ShopEntry>,
    #[serde(default)]
    pub chart: ElementChart,
    /// Skill every new save starts with; powers the default special attack.
    #[serde(default)]
    pub base_skill: String,
    /// Boss template used when the queue runs dry.
    #[serde(default)]
    pub respawn_boss: String,
}

impl Catalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the catalog embedded in the crate's static assets.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_else(|_| Self::empty())
    }

    #[must_use]
    pub fn workout(&self, id: &str) -> Option<&WorkoutDef> {
        self.workouts.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn habit(&self, id: &str) -> Option<&HabitDef> {
        self.habits.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn boss(&self, id: &str) -> Option<&BossDef> {
        self.bosses.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn skill(&self, id: &str) -> Option<&SkillDef> {
        self.skills.iter().find(|def| def.id == id)
    }

    #[must_use]
    pub fn shop_price(&self, id: &str) -> Option<i32> {
        self.shop.iter().find(|entry| entry.id == id).map(|e| e.cost)
    }

    #[must_use]
    pub fn is_workout(&self, id: &str) -> bool {
        self.workout(id).is_some()
    }

    #[must_use]
    pub fn base_skill_def(&self) -> Option<&SkillDef> {
        self.skill(&self.base_skill).or_else(|| self.skills.first())
    }

    /// Template for the boss synthesized when the queue is empty.
    #[must_use]
    pub fn respawn_boss_def(&self) -> Option<&BossDef> {
        self.boss(&self.respawn_boss).or_else(|| self.bosses.first())
    }

    /// Items eligible for random task-completion drops.
    pub fn potions(&self) -> impl Iterator<Item = &ItemDef> {
        self.items
            .iter()
            .filter(|def| matches!(def.kind, ItemKind::Potion))
    }
}

impl ItemKind {
    /// Equipment slot this kind occupies, if any.
    #[must_use]
    pub const fn slot(self) -> Option<crate::state::EquipSlot> {
        match self {
            Self::Weapon => Some(crate::state::EquipSlot::Weapon),
            Self::Armor => Some(crate::state::EquipSlot::Armor),
            Self::Potion => None,
        }
    }
}
