use crate::api::types::{GameEvent, SoundEvent};
use crate::input::queue::InputQueue;
use crate::renderer::frame::RenderFrame;

/// Configuration for the runner, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 64).
    pub max_events: usize,
    /// Seed for puzzle targets and hint picks.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_sounds: 32,
            max_events: 64,
            seed: 0x9E37_79B9_7F4A_7C15,
        }
    }
}

/// The contract between a game and the runner that drives it.
pub trait Game {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Load saved state and set up the first screen.
    fn init(&mut self, ctx: &mut GameContext);

    /// One fixed tick: consume input, advance timers, emit effects.
    fn update(&mut self, ctx: &mut GameContext, input: &InputQueue);

    /// Read-only pass that describes what to draw.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Per-frame outputs of the game, passed to `Game::init` and `Game::update`.
pub struct GameContext {
    /// Length of one fixed tick in seconds.
    pub dt: f32,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl GameContext {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a tone for the audio collaborator.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Queue an event for the UI shell / renderer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameConfig::default().fixed_dt)
    }
}

/// Render context for the read-only render pass.
pub struct RenderContext<'a> {
    pub frame: &'a mut RenderFrame,
}
