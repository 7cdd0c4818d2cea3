pub mod api;
pub mod core;
pub mod components;
pub mod renderer;
pub mod input;
pub mod catalog;
pub mod puzzle;
pub mod achievements;
pub mod reward;
pub mod progress;
pub mod store;
pub mod effects;
pub mod dispatch;
pub mod session;
pub mod hints;
pub mod layout;
pub mod game;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, GameContext, RenderContext};
pub use api::types::{EntityId, GameEvent, PackedEvent, SlotIndex, SoundEvent};
pub use components::entity::Entity;
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, SessionClock};
pub use core::timers::{TimerKind, Timers};
pub use core::rng::Rng;
pub use renderer::frame::{RenderFrame, ViewState};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use input::command::Command;
pub use input::queue::{InputEvent, InputQueue, PickEvent, PickTag};
pub use catalog::{Catalog, ThemeDefinition, Waveform};
pub use puzzle::{PuzzleInstance, PuzzleKind, ShapeKind};
pub use achievements::{AchievementDefinition, AchievementState, AchievementTracker, Rarity};
pub use progress::{AnimationSpeed, PersistedProgress, Profile, Settings};
pub use store::{MemoryStore, ProgressStore, StoreError, STORAGE_KEY};
pub use session::{Screen, Session, Transition};
pub use game::MindVault;
