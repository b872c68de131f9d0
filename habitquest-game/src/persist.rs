//! Whole-state export and import with a validation gate.
//!
//! The blob is the same JSON tree the storage collaborator persists; import
//! refuses anything without a recognizable player/boss shape so a bad file
//! can never clobber a live save.

use serde_json::Value;
use thiserror::Error;

use crate::state::GameState;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not parse save data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("save data has no recognizable player or boss")]
    UnrecognizedShape,
}

/// Serialize the whole game state to a transportable JSON blob.
///
/// # Errors
///
/// Returns an error if the state cannot be serialized.
pub fn export_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Reconstruct a game state from an exported blob. The RNG handle is
/// rehydrated from the stored seed.
///
/// # Errors
///
/// Returns `ImportError::Parse` for malformed JSON and
/// `ImportError::UnrecognizedShape` for JSON that is not a save blob. The
/// caller's existing state is untouched either way.
pub fn import_json(raw: &str) -> Result<GameState, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    let recognizable = value.get("player").is_some_and(Value::is_object)
        && value.get("current_boss").is_some_and(Value::is_object);
    if !recognizable {
        return Err(ImportError::UnrecognizedShape);
    }
    let state: GameState = serde_json::from_value(value)?;
    Ok(state.rehydrate())
}
