//! Inventory, consumables, equipment and the gold shop.

use thiserror::Error;

use crate::catalog::{Catalog, ItemEffect};
use crate::constants::{LOG_ITEM_EQUIPPED, LOG_ITEM_USED, LOG_SHOP_PURCHASE};
use crate::state::{GameState, InventoryEntry, Player};

/// Recoverable purchase failures; gold is untouched on any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("item {id} is not for sale")]
    NotForSale { id: String },
    #[error("not enough gold: need {cost}, have {gold}")]
    InsufficientGold { cost: i32, gold: i32 },
}

/// Stack an item into the inventory.
pub fn add_item(player: &mut Player, item_id: &str) {
    if let Some(entry) = player.inventory.iter_mut().find(|e| e.id == item_id) {
        entry.quantity += 1;
    } else {
        player.inventory.push(InventoryEntry {
            id: item_id.to_string(),
            quantity: 1,
        });
    }
}

/// Consume one of an item, interpreting its declared effect.
///
/// Returns false without mutating when the item is not held or the catalog
/// no longer knows it (stale saves are tolerated, not fatal).
pub fn use_item(state: &mut GameState, catalog: &Catalog, item_id: &str) -> bool {
    let Some(index) = state.player.inventory.iter().position(|e| e.id == item_id) else {
        return false;
    };
    let Some(def) = catalog.item(item_id) else {
        return false;
    };
    let Some(effect) = def.effect else {
        return false;
    };

    match effect {
        ItemEffect::RestoreHp { amount } => {
            let cap = state.player.total_max_hp(catalog);
            state.player.hp = (state.player.hp + amount).min(cap);
        }
        ItemEffect::RestoreMp { amount } => {
            let cap = state.player.total_max_mp(catalog);
            state.player.mp = (state.player.mp + amount).min(cap);
        }
    }

    let entry = &mut state.player.inventory[index];
    entry.quantity -= 1;
    if entry.quantity == 0 {
        state.player.inventory.remove(index);
    }
    state.logs.push(String::from(LOG_ITEM_USED));
    true
}

/// Move an item from the inventory into its equipment slot, returning any
/// displaced item to the inventory. Returns false for items that are not
/// held, not equippable, or already in the slot.
pub fn equip_item(state: &mut GameState, catalog: &Catalog, item_id: &str) -> bool {
    let Some(def) = catalog.item(item_id) else {
        return false;
    };
    let Some(slot) = def.kind.slot() else {
        return false;
    };
    if state.player.equipment.get(slot) == Some(item_id) {
        return false;
    }
    let Some(index) = state.player.inventory.iter().position(|e| e.id == item_id) else {
        return false;
    };

    let entry = &mut state.player.inventory[index];
    entry.quantity -= 1;
    if entry.quantity == 0 {
        state.player.inventory.remove(index);
    }

    if let Some(displaced) = state.player.equipment.set(slot, Some(item_id.to_string())) {
        add_item(&mut state.player, &displaced);
    }
    state.player.clamp_vitals(catalog);
    state.logs.push(String::from(LOG_ITEM_EQUIPPED));
    true
}

/// Buy one item from the shop price list.
///
/// # Errors
///
/// Rejects ids without a price and purchases the player cannot afford;
/// nothing is mutated on failure.
pub fn purchase(state: &mut GameState, catalog: &Catalog, item_id: &str) -> Result<(), PurchaseError> {
    let Some(cost) = catalog.shop_price(item_id) else {
        return Err(PurchaseError::NotForSale {
            id: item_id.to_string(),
        });
    };
    if state.player.gold < cost {
        return Err(PurchaseError::InsufficientGold {
            cost,
            gold: state.player.gold,
        });
    }
    state.player.gold -= cost;
    add_item(&mut state.player, item_id);
    state.logs.push(String::from(LOG_SHOP_PURCHASE));
    Ok(())
}
