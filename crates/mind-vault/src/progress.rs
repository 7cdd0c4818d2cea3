//! Player profile and its persisted form.
//!
//! `Profile` is the live state (catalog counters, crystals, achievements,
//! settings). `PersistedProgress` is the serializable snapshot of it; puzzle
//! and session state is never part of it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::achievements::{AchievementState, AchievementTracker};
use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(AnimationSpeed::Slow),
            1 => Some(AnimationSpeed::Normal),
            2 => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }
}

/// Player-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Master volume, 0-100.
    pub volume: u8,
    pub high_contrast: bool,
    pub animation_speed: AnimationSpeed,
    pub haptic_feedback: bool,
}

impl Settings {
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 100.0).round() as u8;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 75,
            high_contrast: false,
            animation_speed: AnimationSpeed::Normal,
            haptic_feedback: true,
        }
    }
}

/// Saved counters of one theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeProgress {
    pub unlocked: bool,
    pub completed: u32,
}

/// The single record written by the progress store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProgress {
    pub themes: BTreeMap<String, ThemeProgress>,
    pub crystal_shards: u32,
    pub achievements: BTreeMap<String, AchievementState>,
    #[serde(default)]
    pub settings: Settings,
}

impl PersistedProgress {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Live profile state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub catalog: Catalog,
    pub crystal_shards: u32,
    pub achievements: AchievementTracker,
    pub settings: Settings,
}

impl Profile {
    pub fn new(catalog: Catalog, achievements: AchievementTracker) -> Self {
        Self {
            catalog,
            crystal_shards: 0,
            achievements,
            settings: Settings::default(),
        }
    }

    /// Snapshot for the store.
    pub fn snapshot(&self) -> PersistedProgress {
        PersistedProgress {
            themes: self
                .catalog
                .iter()
                .map(|t| {
                    let progress = ThemeProgress {
                        unlocked: t.unlocked,
                        completed: t.completed,
                    };
                    (t.id.clone(), progress)
                })
                .collect(),
            crystal_shards: self.crystal_shards,
            achievements: self
                .achievements
                .iter()
                .map(|(d, s)| (d.id.clone(), *s))
                .collect(),
            settings: self.settings.clone(),
        }
    }

    /// Merge a saved snapshot into the built-in data. Unknown ids are
    /// skipped, counters clamped, and unlock flags only ever turn on.
    pub fn apply(&mut self, saved: &PersistedProgress) {
        for (id, progress) in &saved.themes {
            match self.catalog.get_mut(id) {
                Some(theme) => {
                    theme.unlocked |= progress.unlocked;
                    theme.completed = progress.completed.min(theme.boxes);
                }
                None => log::debug!("ignoring saved progress for unknown theme {}", id),
            }
        }
        for (id, state) in &saved.achievements {
            self.achievements.restore(id, *state);
        }
        self.crystal_shards = saved.crystal_shards;
        self.settings = saved.settings.clone();
        self.settings.volume = self.settings.volume.min(100);
    }
}
