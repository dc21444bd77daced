use crate::errors::{StoreError, StoreResult};
use crate::war::War;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// One player's persisted account. New accounts start with pocket money.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLedger {
    pub dollars: u64,
    pub xp: u64,
}

impl Default for PlayerLedger {
    fn default() -> Self {
        Self { dollars: 100, xp: 0 }
    }
}

/// The whole persisted world: player ledgers and war records, keyed by id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GameData {
    #[serde(default)]
    pub players: HashMap<String, PlayerLedger>,
    #[serde(default)]
    pub wars: HashMap<String, War>,
}

impl GameData {
    /// A player's ledger, created with the default account on first reference.
    pub fn player_mut(&mut self, id: &str) -> &mut PlayerLedger {
        self.players.entry(id.to_string()).or_default()
    }

    pub fn player(&self, id: &str) -> PlayerLedger {
        self.players.get(id).copied().unwrap_or_default()
    }
}

/// Load/save boundary for the persisted world. The core never performs raw
/// I/O outside an implementation of this trait.
pub trait StoreBackend {
    fn load(&self) -> StoreResult<GameData>;
    fn save(&self, data: &GameData) -> StoreResult<()>;
}

/// In-process backend for tests and the demo binary.
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<GameData>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> StoreResult<GameData> {
        Ok(self
            .data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, data: &GameData) -> StoreResult<()> {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = data.clone();
        Ok(())
    }
}

/// JSON file backend. A missing file loads the default world; saves go
/// through a temp file so a failed write never truncates the previous state.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<GameData> {
        if !self.path.exists() {
            return Ok(GameData::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn save(&self, data: &GameData) -> StoreResult<()> {
        let json =
            serde_json::to_string_pretty(data).map_err(|e| StoreError::Serde(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e.to_string()))
    }
}
