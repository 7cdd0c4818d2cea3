use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::puzzle::ShapeKind;
use crate::session::Screen;

/// Unique identifier for an entity in the render arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Position of a puzzle within the active box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex(pub u32);

/// A tone request for the audio collaborator.
/// Chords and melodies are several events with staggered `delay`s.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SoundEvent {
    /// Frequency in Hz.
    pub frequency: f32,
    /// Length of the note in seconds.
    pub duration: f32,
    /// Seconds to wait before starting the note.
    pub delay: f32,
    /// Peak gain (0.0 - 0.3).
    pub gain: f32,
    /// Oscillator waveform code (see `Waveform::code`).
    pub waveform: f32,
}

impl SoundEvent {
    pub const FLOATS: usize = 5;
}

/// Something the core wants the UI shell, renderer or haptics layer to know about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The screen changed.
    Screen(Screen),
    /// A color dial now shows palette entry `color`.
    DialChanged { slot: SlotIndex, dial: u8, color: u8 },
    /// A floating shape snapped into its slot.
    ShapePlaced { slot: SlotIndex, shape: ShapeKind },
    /// A cylinder turned to `degrees`.
    CylinderRotated { slot: SlotIndex, degrees: u16 },
    /// The puzzle in `slot` became solved. Fired once per instance.
    PuzzleSolved { slot: SlotIndex },
    /// Particle burst at the puzzle in `slot`.
    Particles { slot: SlotIndex },
    /// Vibration pulse of `millis` milliseconds.
    Haptic { millis: u32 },
    /// Whole seconds shown on the box timer.
    Clock { seconds: u32 },
    /// The box was opened.
    Victory { earned: u32, total: u32 },
    /// Catalog index of a theme that just unlocked.
    ThemeUnlocked { theme: u32 },
    /// Roster index of an achievement that just unlocked.
    AchievementUnlocked { achievement: u32 },
    AchievementDismissed,
    /// Index into the hint table, or `None` when everything is solved.
    Hint { message: Option<u32> },
    HintDismissed,
    /// Every puzzle of the box went back to its initial state.
    PuzzlesReset,
}

/// Event kinds on the wire (`PackedEvent::kind`).
pub const EVENT_SCREEN: f32 = 1.0;
pub const EVENT_DIAL_CHANGED: f32 = 2.0;
pub const EVENT_SHAPE_PLACED: f32 = 3.0;
pub const EVENT_CYLINDER_ROTATED: f32 = 4.0;
pub const EVENT_PUZZLE_SOLVED: f32 = 5.0;
pub const EVENT_PARTICLES: f32 = 6.0;
pub const EVENT_HAPTIC: f32 = 7.0;
pub const EVENT_CLOCK: f32 = 8.0;
pub const EVENT_VICTORY: f32 = 9.0;
pub const EVENT_THEME_UNLOCKED: f32 = 10.0;
pub const EVENT_ACHIEVEMENT_UNLOCKED: f32 = 11.0;
pub const EVENT_ACHIEVEMENT_DISMISSED: f32 = 12.0;
pub const EVENT_HINT: f32 = 13.0;
pub const EVENT_HINT_DISMISSED: f32 = 14.0;
pub const EVENT_PUZZLES_RESET: f32 = 15.0;

/// A game event flattened for the JS side.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PackedEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl PackedEvent {
    pub const FLOATS: usize = 4;

    fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

impl From<GameEvent> for PackedEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Screen(screen) => Self::new(EVENT_SCREEN, screen.code() as f32, 0.0, 0.0),
            GameEvent::DialChanged { slot, dial, color } => {
                Self::new(EVENT_DIAL_CHANGED, slot.0 as f32, dial as f32, color as f32)
            }
            GameEvent::ShapePlaced { slot, shape } => {
                Self::new(EVENT_SHAPE_PLACED, slot.0 as f32, shape.index() as f32, 0.0)
            }
            GameEvent::CylinderRotated { slot, degrees } => {
                Self::new(EVENT_CYLINDER_ROTATED, slot.0 as f32, degrees as f32, 0.0)
            }
            GameEvent::PuzzleSolved { slot } => Self::new(EVENT_PUZZLE_SOLVED, slot.0 as f32, 0.0, 0.0),
            GameEvent::Particles { slot } => Self::new(EVENT_PARTICLES, slot.0 as f32, 0.0, 0.0),
            GameEvent::Haptic { millis } => Self::new(EVENT_HAPTIC, millis as f32, 0.0, 0.0),
            GameEvent::Clock { seconds } => Self::new(EVENT_CLOCK, seconds as f32, 0.0, 0.0),
            GameEvent::Victory { earned, total } => {
                Self::new(EVENT_VICTORY, earned as f32, total as f32, 0.0)
            }
            GameEvent::ThemeUnlocked { theme } => Self::new(EVENT_THEME_UNLOCKED, theme as f32, 0.0, 0.0),
            GameEvent::AchievementUnlocked { achievement } => {
                Self::new(EVENT_ACHIEVEMENT_UNLOCKED, achievement as f32, 0.0, 0.0)
            }
            GameEvent::AchievementDismissed => Self::new(EVENT_ACHIEVEMENT_DISMISSED, 0.0, 0.0, 0.0),
            GameEvent::Hint { message } => {
                let index = message.map(|m| m as f32).unwrap_or(-1.0);
                Self::new(EVENT_HINT, index, 0.0, 0.0)
            }
            GameEvent::HintDismissed => Self::new(EVENT_HINT_DISMISSED, 0.0, 0.0, 0.0),
            GameEvent::PuzzlesReset => Self::new(EVENT_PUZZLES_RESET, 0.0, 0.0, 0.0),
        }
    }
}
