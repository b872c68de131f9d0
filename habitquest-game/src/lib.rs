//! HabitQuest Game Engine
//!
//! Platform-agnostic core game logic for the HabitQuest habit RPG.
//! This crate provides reward, progression, combat and daily-lifecycle
//! mechanics without UI or platform-specific dependencies.

pub mod catalog;
pub mod combat;
pub mod constants;
pub mod element;
pub mod items;
pub mod lifecycle;
pub mod numbers;
pub mod persist;
pub mod progression;
pub mod quests;
pub mod rewards;
pub mod skills;
pub mod state;

// Re-export commonly used types
pub use catalog::{
    BossDef, Catalog, HabitDef, ItemDef, ItemEffect, ItemKind, ShopEntry, SkillDef, StatBonus,
    WorkoutDef,
};
pub use combat::{
    AttackError, AttackKind, AttackOutcome, CombatEvent, CombatEvents, resolve_attack,
};
pub use element::{Effectiveness, Element, ElementChart, ElementSet, Matchup};
pub use items::{PurchaseError, add_item, equip_item, purchase, use_item};
pub use lifecycle::{
    DaySummary, LifecycleConfig, LogDayError, local_today, log_day, record_workout_metric,
    roll_to, toggle_task,
};
pub use persist::{ImportError, export_json, import_json};
pub use progression::apply_experience;
pub use quests::{QuestOutcome, add_quest, complete_quest};
pub use rewards::{DayRewards, resolve_day_rewards, roll_task_drop, update_personal_bests};
pub use skills::{SkillUnlockError, select_skill, unlock_skill, unlockable_skills};
pub use state::{
    Boss, DailyLog, EquipSlot, Equipment, GameState, InventoryEntry, Player, Quest,
};

/// Trait for abstracting catalog loading operations
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the content catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Trait for abstracting save/load operations
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), Self::Error>;

    /// Load game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be loaded.
    fn load_game(&self, save_name: &str) -> Result<Option<GameState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error>;
}

/// Main game engine for managing game instances
pub struct GameEngine<L, S>
where
    L: CatalogLoader,
    S: GameStorage,
{
    catalog_loader: L,
    storage: S,
}

impl<L, S> GameEngine<L, S>
where
    L: CatalogLoader,
    S: GameStorage,
{
    /// Create a new game engine with the provided catalog loader and storage
    pub const fn new(catalog_loader: L, storage: S) -> Self {
        Self {
            catalog_loader,
            storage,
        }
    }

    /// Create a new game seeded for deterministic draws, opened on the
    /// current local calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn create_game(&self, seed: u64) -> Result<GameState, L::Error> {
        self.create_game_on(seed, local_today())
    }

    /// Create a new game opened on an explicit date.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn create_game_on(
        &self,
        seed: u64,
        today: chrono::NaiveDate,
    ) -> Result<GameState, L::Error> {
        let catalog = self.catalog_loader.load_catalog()?;
        Ok(GameState::new_game(&catalog, today).with_seed(seed))
    }

    /// Save a game state
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    pub fn save_game(&self, save_name: &str, game_state: &GameState) -> Result<(), S::Error> {
        self.storage.save_game(save_name, game_state)
    }

    /// Load a game state, reattach its RNG, and roll the daily log forward
    /// to the current local calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if the game state or catalog cannot be loaded.
    pub fn load_game(&self, save_name: &str) -> Result<Option<GameState>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
        S::Error: Into<anyhow::Error>,
    {
        self.load_game_on(save_name, local_today())
    }

    /// Load a game state, rolling the daily log to an explicit date.
    ///
    /// # Errors
    ///
    /// Returns an error if the game state or catalog cannot be loaded.
    pub fn load_game_on(
        &self,
        save_name: &str,
        today: chrono::NaiveDate,
    ) -> Result<Option<GameState>, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
        S::Error: Into<anyhow::Error>,
    {
        if let Some(game_state) = self.storage.load_game(save_name).map_err(Into::into)? {
            let catalog = self.catalog_loader.load_catalog().map_err(Into::into)?;
            let mut game_state = game_state.rehydrate();
            lifecycle::roll_to(
                &mut game_state,
                &catalog,
                today,
                &LifecycleConfig::default_config(),
            );
            Ok(Some(game_state))
        } else {
            Ok(None)
        }
    }
}
