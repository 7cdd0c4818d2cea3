use serde::Serialize;

use crate::achievements::{AchievementTracker, Rarity};
use crate::api::types::SlotIndex;
use crate::catalog::Catalog;
use crate::progress::Settings;
use crate::puzzle::PuzzleKind;
use crate::renderer::instance::RenderBuffer;
use crate::session::Screen;

/// Menu card for one theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCard {
    pub id: String,
    pub name: String,
    pub unlocked: bool,
    pub completed: u32,
    pub boxes: u32,
    pub accent: u32,
}

/// The theme and box being previewed or played.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBox {
    pub theme_id: String,
    pub theme_name: String,
    /// 0-based box index within the theme.
    pub box_index: u32,
    pub boxes: u32,
    pub accent: u32,
    pub palette: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Active,
    Completed,
}

/// Status light for one puzzle slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub slot: SlotIndex,
    pub kind: PuzzleKind,
    pub status: IndicatorStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub progress: u32,
    pub max_progress: u32,
    pub unlocked: bool,
}

/// Everything the UI shell shows besides the 3D box, serialized as JSON once per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub screen: Screen,
    pub themes: Vec<ThemeCard>,
    pub active_box: Option<ActiveBox>,
    /// Box timer as `mm:ss`.
    pub clock: String,
    pub crystal_shards: u32,
    pub indicators: Vec<Indicator>,
    pub achievements: Vec<AchievementCard>,
    /// Hint panel text while it is showing.
    pub hint: Option<String>,
    pub settings: Settings,
    pub audio_enabled: bool,
}

impl ViewState {
    pub fn fill_themes(&mut self, catalog: &Catalog) {
        self.themes.clear();
        self.themes.extend(catalog.iter().map(|t| ThemeCard {
            id: t.id.clone(),
            name: t.name.clone(),
            unlocked: t.unlocked,
            completed: t.completed,
            boxes: t.boxes,
            accent: t.accent,
        }));
    }

    pub fn fill_achievements(&mut self, tracker: &AchievementTracker) {
        self.achievements.clear();
        self.achievements.extend(tracker.iter().map(|(def, state)| AchievementCard {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            rarity: def.rarity,
            progress: state.progress,
            max_progress: def.max_progress,
            unlocked: state.unlocked,
        }));
    }
}

/// Output of the render pass: entity instances plus the UI view.
#[derive(Default)]
pub struct RenderFrame {
    pub buffer: RenderBuffer,
    pub view: ViewState,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// The view as JSON for the UI shell.
    pub fn view_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_lists_catalog_and_roster() {
        let mut view = ViewState::default();
        view.fill_themes(&Catalog::builtin());
        view.fill_achievements(&AchievementTracker::builtin());
        assert_eq!(view.themes.len(), 5);
        assert!(view.themes[0].unlocked);
        assert!(!view.themes[1].unlocked);
        assert_eq!(view.achievements.len(), 8);
        assert_eq!(view.achievements[6].max_progress, 100);
    }

    #[test]
    fn view_json_uses_camel_case() {
        let mut frame = RenderFrame::new();
        frame.view.clock = "01:05".into();
        let json = frame.view_json().unwrap();
        assert!(json.contains("\"screen\":\"splash\""));
        assert!(json.contains("\"crystalShards\":0"));
        assert!(json.contains("\"activeBox\":null"));
        assert!(json.contains("\"clock\":\"01:05\""));
    }
}
