use mind_vault::{
    FixedTimestep, Game, GameConfig, GameContext, InputEvent, InputQueue, PackedEvent,
    RenderContext, RenderFrame, RenderInstance, SoundEvent,
};

/// Generic game runner that wires up the fixed-timestep loop.
///
/// The exports in `exports.rs` keep one `GameRunner` in a `thread_local!`
/// and forward to it, because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: GameContext,
    input: InputQueue,
    frame: RenderFrame,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Flat sound events for pointer reads from JS.
    sound_buffer: Vec<SoundEvent>,
    /// Flat game events for pointer reads from JS.
    event_buffer: Vec<PackedEvent>,
    view_json: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);

        Self {
            game,
            ctx: GameContext::new(config.fixed_dt),
            input: InputQueue::new(),
            frame: RenderFrame::new(),
            timestep,
            sound_buffer: Vec::with_capacity(config.max_sounds),
            event_buffer: Vec::with_capacity(config.max_events),
            config,
            initialized: false,
            view_json: String::new(),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx = GameContext::new(self.config.fixed_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        // Events raised during init are readable right away.
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, then rebuild the render outputs.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation. Input is handed to the first step only,
        // and stays queued when this frame runs no step at all.
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.input.drain();
        }

        self.publish();
    }

    fn publish(&mut self) {
        {
            let mut render_ctx = RenderContext {
                frame: &mut self.frame,
            };
            self.game.render(&mut render_ctx);
        }

        match self.frame.view_json() {
            Ok(json) => self.view_json = json,
            Err(e) => log::error!("failed to serialize view: {}", e),
        }

        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!(
                "dropping {} sound events over the per-frame limit",
                self.ctx.sounds.len() - self.config.max_sounds
            );
        }
        self.sound_buffer.clear();
        self.sound_buffer
            .extend(self.ctx.sounds.iter().take(self.config.max_sounds).copied());

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "dropping {} game events over the per-frame limit",
                self.ctx.events.len() - self.config.max_events
            );
        }
        self.event_buffer.clear();
        self.event_buffer.extend(
            self.ctx
                .events
                .iter()
                .take(self.config.max_events)
                .map(|&e| PackedEvent::from(e)),
        );
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for reads from wasm memory ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.frame.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.frame.buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<SoundEvent, f32>(&self.sound_buffer).as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<PackedEvent, f32>(&self.event_buffer).as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    /// UI view of the last frame as JSON.
    pub fn view_json(&self) -> &str {
        &self.view_json
    }

    // ---- Layout accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn instance_floats(&self) -> u32 {
        RenderInstance::FLOATS as u32
    }

    pub fn sound_floats(&self) -> u32 {
        SoundEvent::FLOATS as u32
    }

    pub fn event_floats(&self) -> u32 {
        PackedEvent::FLOATS as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mind_vault::{Command, GameEvent, MemoryStore, MindVault, Screen};

    fn runner() -> GameRunner<MindVault> {
        let mut r = GameRunner::new(MindVault::with_seed(Box::new(MemoryStore::new()), 3));
        r.init();
        r
    }

    #[test]
    fn init_publishes_first_screen() {
        let r = runner();
        assert_eq!(r.game_events_len(), 1);
        assert_eq!(r.event_buffer[0], PackedEvent::from(GameEvent::Screen(Screen::Splash)));
        assert!(r.view_json().contains("\"screen\":\"splash\""));
    }

    #[test]
    fn input_is_seen_by_one_step_only() {
        let mut r = runner();
        // Get past the splash screen.
        for _ in 0..40 {
            r.tick(0.16);
        }
        assert_eq!(r.game().session().screen(), Screen::Menu);

        r.push_input(InputEvent::command(Command::SelectTheme(0)));
        r.push_input(InputEvent::command(Command::Start));
        r.push_input(InputEvent::command(Command::TogglePause));
        // A long frame runs several fixed steps.
        r.tick(0.1);
        assert_eq!(r.game().session().screen(), Screen::Paused);
    }

    #[test]
    fn input_waits_for_a_step() {
        let mut r = runner();
        r.push_input(InputEvent::Blur);
        r.tick(0.001);
        assert!(!r.input.is_empty());
        r.tick(1.0 / 60.0);
        assert!(r.input.is_empty());
    }
}
