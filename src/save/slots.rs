use crate::core::constants::MAX_SAVE_SLOTS;
use crate::core::game_state::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Summary of one slot for the slot picker
#[derive(Debug, Clone, PartialEq)]
pub struct SlotInfo {
    pub slot: u8,
    pub money: u64,
    pub heat: u32,
    pub crew: usize,
    pub businesses: usize,
    pub play_time_ms: u64,
    pub last_save_time: i64,
    pub is_corrupted: bool,
}

/// Numbered save files (`slot_1.json` ..) in one directory
pub struct SaveSlots {
    dir: PathBuf,
}

impl SaveSlots {
    /// Slots under `~/.gangster/`, creating the directory if needed
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(".gangster"))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: u8) -> io::Result<PathBuf> {
        if slot == 0 || slot > MAX_SAVE_SLOTS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Slot must be between 1 and {}", MAX_SAVE_SLOTS),
            ));
        }
        Ok(self.dir.join(format!("slot_{}.json", slot)))
    }

    pub fn save(&self, slot: u8, state: &GameState) -> io::Result<()> {
        let path = self.slot_path(slot)?;
        let json = to_json(state)?;
        fs::write(path, json)?;
        tracing::info!("Saved slot {}", slot);
        Ok(())
    }

    /// Load a slot. Missing keys fall back to defaults.
    pub fn load(&self, slot: u8) -> io::Result<GameState> {
        let path = self.slot_path(slot)?;
        let json = fs::read_to_string(path)?;
        from_json(&json)
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        self.slot_path(slot).map(|p| p.exists()).unwrap_or(false)
    }

    pub fn delete_slot(&self, slot: u8) -> io::Result<()> {
        fs::remove_file(self.slot_path(slot)?)?;
        tracing::info!("Deleted slot {}", slot);
        Ok(())
    }

    /// Every slot that has a file, in slot order. Unreadable files are
    /// listed as corrupted rather than skipped.
    pub fn list_slots(&self) -> Vec<SlotInfo> {
        let mut slots = Vec::new();
        for slot in 1..=MAX_SAVE_SLOTS {
            if !self.slot_exists(slot) {
                continue;
            }
            match self.load(slot) {
                Ok(state) => slots.push(SlotInfo {
                    slot,
                    money: state.money,
                    heat: state.heat,
                    crew: state.gangsters.len(),
                    businesses: state.businesses.len(),
                    play_time_ms: state.play_time_ms,
                    last_save_time: state.last_save_time,
                    is_corrupted: false,
                }),
                Err(e) => {
                    tracing::warn!("Slot {} is unreadable: {}", slot, e);
                    slots.push(SlotInfo {
                        slot,
                        money: 0,
                        heat: 0,
                        crew: 0,
                        businesses: 0,
                        play_time_ms: 0,
                        last_save_time: 0,
                        is_corrupted: true,
                    });
                }
            }
        }
        slots
    }

    /// Lowest numbered slot without a file
    pub fn first_free_slot(&self) -> Option<u8> {
        (1..=MAX_SAVE_SLOTS).find(|slot| !self.slot_exists(*slot))
    }
}

pub fn to_json(state: &GameState) -> io::Result<String> {
    serde_json::to_string_pretty(state).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Parse a save document onto a default state, then normalize it
pub fn from_json(json: &str) -> io::Result<GameState> {
    let mut state: GameState =
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    state.normalize();
    Ok(state)
}
