use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Static description of an achievement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    /// Progress needed to unlock (at least 1).
    pub max_progress: u32,
}

impl AchievementDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
        max_progress: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            rarity,
            max_progress: max_progress.max(1),
        }
    }
}

/// Player progress on one achievement. `unlocked` never goes back to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    pub progress: u32,
    pub unlocked: bool,
}

/// Achievement roster plus progress, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementTracker {
    entries: Vec<(AchievementDefinition, AchievementState)>,
}

impl AchievementTracker {
    pub fn new(definitions: Vec<AchievementDefinition>) -> Self {
        Self {
            entries: definitions
                .into_iter()
                .map(|d| (d, AchievementState::default()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            AchievementDefinition::new("firstBox", "Box Breaker", "Open your first puzzle box", Rarity::Common, 1),
            AchievementDefinition::new("speedSolver", "Lightning Fast", "Complete box in under 60 seconds", Rarity::Rare, 1),
            AchievementDefinition::new("patternMaster", "Pattern Genius", "Perfect color sequences 10 times", Rarity::Epic, 10),
            AchievementDefinition::new("shapeWizard", "Shape Master", "Flawless shape assembly 15 times", Rarity::Epic, 15),
            AchievementDefinition::new("spatialGenius", "3D Visionary", "Rotation puzzles without mistakes", Rarity::Legendary, 1),
            AchievementDefinition::new("explorer", "World Explorer", "Unlock all themes", Rarity::Legendary, 5),
            AchievementDefinition::new("collector", "Crystal Collector", "Gather 100 crystal shards", Rarity::Epic, 100),
            AchievementDefinition::new("perfectionist", "Perfectionist", "100% completion", Rarity::Legendary, 1),
        ])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(d, _)| d.id == id)
    }

    pub fn state(&self, id: &str) -> Option<AchievementState> {
        self.entries.iter().find(|(d, _)| d.id == id).map(|(_, s)| *s)
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.state(id).is_some_and(|s| s.unlocked)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AchievementDefinition, &AchievementState)> {
        self.entries.iter().map(|(d, s)| (d, s))
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.iter().filter(|(_, s)| s.unlocked).count()
    }

    /// Add `delta` progress, clamped to the maximum. Returns the roster index
    /// when this call unlocked the achievement; unknown or already-unlocked
    /// achievements are left alone.
    pub fn progress_towards(&mut self, id: &str, delta: u32) -> Option<usize> {
        let index = self.index_of(id)?;
        let (def, state) = &mut self.entries[index];
        if state.unlocked {
            return None;
        }
        state.progress = state.progress.saturating_add(delta).min(def.max_progress);
        if state.progress >= def.max_progress {
            state.unlocked = true;
            log::info!("achievement unlocked: {}", def.id);
            return Some(index);
        }
        None
    }

    /// Unlock straight away, filling the progress bar.
    pub fn unlock_direct(&mut self, id: &str) -> Option<usize> {
        let index = self.index_of(id)?;
        let (def, state) = &mut self.entries[index];
        if state.unlocked {
            return None;
        }
        state.progress = def.max_progress;
        state.unlocked = true;
        log::info!("achievement unlocked: {}", def.id);
        Some(index)
    }

    /// Merge a saved state. Progress is clamped and an unlock is never undone.
    pub(crate) fn restore(&mut self, id: &str, saved: AchievementState) {
        let Some(index) = self.index_of(id) else {
            log::debug!("ignoring saved state for unknown achievement {}", id);
            return;
        };
        let (def, state) = &mut self.entries[index];
        state.unlocked |= saved.unlocked || saved.progress >= def.max_progress;
        state.progress = if state.unlocked {
            def.max_progress
        } else {
            saved.progress.min(def.max_progress)
        };
    }
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_unlocks_at_one_hundred() {
        let mut tracker = AchievementTracker::builtin();
        assert_eq!(tracker.progress_towards("collector", 60), None);
        let index = tracker.progress_towards("collector", 40);
        assert_eq!(index, tracker.index_of("collector"));
        let state = tracker.state("collector").unwrap();
        assert!(state.unlocked);
        assert_eq!(state.progress, 100);

        assert_eq!(tracker.progress_towards("collector", 10), None);
        assert_eq!(tracker.state("collector").unwrap().progress, 100);
    }

    #[test]
    fn progress_is_clamped() {
        let mut tracker = AchievementTracker::builtin();
        assert!(tracker.progress_towards("patternMaster", 500).is_some());
        assert_eq!(tracker.state("patternMaster").unwrap().progress, 10);
    }

    #[test]
    fn unlock_direct_fires_once() {
        let mut tracker = AchievementTracker::builtin();
        assert!(tracker.unlock_direct("firstBox").is_some());
        assert!(tracker.unlock_direct("firstBox").is_none());
        assert!(tracker.progress_towards("firstBox", 1).is_none());
        assert_eq!(tracker.state("firstBox").unwrap().progress, 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = AchievementTracker::builtin();
        assert!(tracker.progress_towards("nope", 5).is_none());
        assert!(tracker.unlock_direct("nope").is_none());
        assert_eq!(tracker.unlocked_count(), 0);
    }

    #[test]
    fn restore_never_relocks() {
        let mut tracker = AchievementTracker::builtin();
        tracker.unlock_direct("speedSolver");
        tracker.restore("speedSolver", AchievementState { progress: 0, unlocked: false });
        assert!(tracker.is_unlocked("speedSolver"));

        tracker.restore("shapeWizard", AchievementState { progress: 99, unlocked: false });
        assert_eq!(tracker.state("shapeWizard").unwrap().progress, 15);
    }
}
