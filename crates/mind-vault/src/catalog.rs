//! Themes and their boxes.
//!
//! Everything here is static after construction except each theme's
//! `unlocked` flag and `completed` counter.

use serde::{Deserialize, Serialize};

/// Oscillator shape used for a theme's tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Numeric code on the sound wire.
    pub fn code(self) -> f32 {
        match self {
            Waveform::Sine => 0.0,
            Waveform::Square => 1.0,
            Waveform::Sawtooth => 2.0,
            Waveform::Triangle => 3.0,
        }
    }
}

/// One themed track of boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDefinition {
    pub id: String,
    pub name: String,
    pub unlocked: bool,
    /// Number of boxes in the theme.
    pub boxes: u32,
    /// Boxes opened so far. Never exceeds `boxes`.
    pub completed: u32,
    /// Ordered puzzle-type identifiers. A box uses the first three.
    pub puzzle_types: Vec<String>,
    /// RGB colors the color puzzles cycle through.
    pub palette: Vec<u32>,
    /// Accent color of the box itself.
    pub accent: u32,
    pub instrument: Waveform,
}

impl ThemeDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, boxes: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unlocked: false,
            boxes: boxes.max(1),
            completed: 0,
            puzzle_types: Vec::new(),
            palette: Vec::new(),
            accent: 0xFFFFFF,
            instrument: Waveform::Sine,
        }
    }

    // -- Builder pattern --

    pub fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    pub fn with_puzzle_types(mut self, types: &[&str]) -> Self {
        self.puzzle_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_palette(mut self, palette: &[u32]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    pub fn with_accent(mut self, accent: u32) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_instrument(mut self, instrument: Waveform) -> Self {
        self.instrument = instrument;
        self
    }

    /// Whether every box of the theme has been opened.
    pub fn is_finished(&self) -> bool {
        self.completed >= self.boxes
    }

    /// Palette length as seen by the color dials (at least one entry).
    pub fn palette_len(&self) -> u8 {
        self.palette.len().clamp(1, u8::MAX as usize) as u8
    }
}

/// Ordered list of themes. Order matters: finishing a theme unlocks the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    themes: Vec<ThemeDefinition>,
}

impl Catalog {
    pub fn new(themes: Vec<ThemeDefinition>) -> Self {
        Self { themes }
    }

    /// The five shipped themes, with only the tutorial unlocked.
    pub fn builtin() -> Self {
        Self::new(vec![
            ThemeDefinition::new("tutorial", "Tutorial Basics", 1)
                .unlocked()
                .with_accent(0x4A90E2)
                .with_puzzle_types(&["colorPattern", "shapeAssembly", "spatialRotation"])
                .with_palette(&[0x4A90E2, 0x50E3C2, 0xF5A623, 0xD0021B, 0x9013FE])
                .with_instrument(Waveform::Sine),
            ThemeDefinition::new("steampunk", "Clockwork Gears", 5)
                .with_accent(0xB8860B)
                .with_puzzle_types(&[
                    "rotatingGears",
                    "steamValves",
                    "clockworkTimer",
                    "mechanicalKeys",
                    "pressurePuzzle",
                ])
                .with_palette(&[0xB8860B, 0xCD853F, 0xA0522D, 0x8B4513, 0xD2691E])
                .with_instrument(Waveform::Sawtooth),
            ThemeDefinition::new("crystal", "Crystal Caves", 5)
                .with_accent(0x9370DB)
                .with_puzzle_types(&[
                    "lightRefraction",
                    "gemMatching",
                    "crystalGrowth",
                    "soundResonance",
                    "glowingTrails",
                ])
                .with_palette(&[0x9370DB, 0x8A2BE2, 0x7B68EE, 0x6495ED, 0x48D1CC])
                .with_instrument(Waveform::Triangle),
            ThemeDefinition::new("space", "Space Station", 5)
                .with_accent(0x00CED1)
                .with_puzzle_types(&[
                    "holographicInterface",
                    "circuitCompletion",
                    "gravityManipulation",
                    "energyFlow",
                    "alienSymbols",
                ])
                .with_palette(&[0x00CED1, 0x1E90FF, 0x00BFFF, 0x87CEEB, 0xB0E0E6])
                .with_instrument(Waveform::Square),
            ThemeDefinition::new("temple", "Ancient Temple", 5)
                .with_accent(0xCD853F)
                .with_puzzle_types(&[
                    "slidingTiles",
                    "symbolRotation",
                    "waterFlow",
                    "torchLighting",
                    "hieroglyphPatterns",
                ])
                .with_palette(&[0xCD853F, 0xDAA520, 0xB8860B, 0xDEB887, 0xF4A460])
                .with_instrument(Waveform::Sine),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut ThemeDefinition> {
        self.themes.iter_mut().find(|t| t.id == id)
    }

    /// Catalog position of a theme.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&ThemeDefinition> {
        self.themes.get(index)
    }

    /// The theme after `id` in catalog order.
    pub fn next_after(&self, id: &str) -> Option<&ThemeDefinition> {
        self.index_of(id).and_then(|i| self.themes.get(i + 1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Unlock a theme. Returns true only if it was locked before.
    pub fn unlock(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(theme) if !theme.unlocked => {
                theme.unlocked = true;
                log::info!("theme unlocked: {}", id);
                true
            }
            _ => false,
        }
    }

    /// Count one more opened box, clamped at the theme's box count.
    /// Returns the new completed count, or `None` for an unknown theme.
    pub fn mark_box_completed(&mut self, id: &str) -> Option<u32> {
        let theme = self.get_mut(id)?;
        theme.completed = (theme.completed + 1).min(theme.boxes);
        Some(theme.completed)
    }

    pub fn unlocked_count(&self) -> usize {
        self.themes.iter().filter(|t| t.unlocked).count()
    }

    /// Every box of every theme has been opened.
    pub fn all_finished(&self) -> bool {
        !self.themes.is_empty() && self.themes.iter().all(|t| t.is_finished())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_starts_with_tutorial_only() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.unlocked_count(), 1);
        assert!(catalog.get("tutorial").unwrap().unlocked);
        assert_eq!(catalog.next_after("tutorial").unwrap().id, "steampunk");
        assert!(catalog.next_after("temple").is_none());
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut catalog = Catalog::builtin();
        assert!(catalog.unlock("crystal"));
        assert!(!catalog.unlock("crystal"));
        assert!(!catalog.unlock("nowhere"));
        assert!(catalog.get("crystal").unwrap().unlocked);
    }

    #[test]
    fn completed_clamps_at_boxes() {
        let mut catalog = Catalog::builtin();
        assert_eq!(catalog.mark_box_completed("tutorial"), Some(1));
        assert_eq!(catalog.mark_box_completed("tutorial"), Some(1));
        assert!(catalog.get("tutorial").unwrap().is_finished());
        assert_eq!(catalog.mark_box_completed("missing"), None);
    }

    #[test]
    fn every_builtin_palette_has_five_colors() {
        for theme in Catalog::builtin().iter() {
            assert_eq!(theme.palette_len(), 5, "{}", theme.id);
            assert!(theme.puzzle_types.len() >= 3);
        }
    }
}
