use crate::achievements::AchievementTracker;
use crate::api::game::{Game, GameConfig, GameContext, RenderContext};
use crate::api::types::GameEvent;
use crate::catalog::{Catalog, Waveform};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::format_clock;
use crate::core::timers::{TimerKind, Timers};
use crate::effects::{EffectSink, Voice};
use crate::hints::{hint_text, pick_hint, HINT_SECONDS};
use crate::input::command::Command;
use crate::input::queue::{InputEvent, InputQueue, PickEvent};
use crate::layout;
use crate::progress::Profile;
use crate::puzzle::PuzzleKind;
use crate::renderer::frame::{ActiveBox, Indicator, IndicatorStatus};
use crate::renderer::instance::build_render_buffer;
use crate::reward::{check_theme_unlock, reward};
use crate::session::{Screen, Session, Transition};
use crate::store::ProgressStore;

// Splash (3.5 s) plus its fade-out (1 s)
const SPLASH_SECONDS: f32 = 4.5;
// Lets the last solve animation play before the box opens
const VICTORY_DELAY: f32 = 1.0;
const ACHIEVEMENT_SECONDS: f32 = 4.0;
const SPEED_SOLVE_SECONDS: u32 = 60;

/// The puzzle-box game: profile, session, entity arena and timers.
pub struct MindVault {
    config: GameConfig,
    profile: Profile,
    session: Session,
    scene: Scene,
    timers: Timers,
    rng: Rng,
    /// Last hint shown; visible while its dismissal is pending.
    hint: Option<u32>,
    store: Box<dyn ProgressStore>,
    /// Session-only mute switch; not persisted.
    audio_enabled: bool,
}

impl MindVault {
    pub fn new(store: Box<dyn ProgressStore>) -> Self {
        Self::with_config(store, GameConfig::default())
    }

    pub fn with_seed(store: Box<dyn ProgressStore>, seed: u64) -> Self {
        Self::with_config(store, GameConfig { seed, ..GameConfig::default() })
    }

    pub fn with_config(store: Box<dyn ProgressStore>, config: GameConfig) -> Self {
        Self {
            rng: Rng::new(config.seed),
            hint: None,
            config,
            profile: Profile::new(Catalog::builtin(), AchievementTracker::builtin()),
            session: Session::new(),
            scene: Scene::new(),
            timers: Timers::new(),
            store,
            audio_enabled: true,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    fn voice(&self) -> Voice {
        let waveform = self
            .session
            .theme_id()
            .and_then(|id| self.profile.catalog.get(id))
            .map(|t| t.instrument)
            .unwrap_or(Waveform::Sine);
        Voice {
            waveform,
            volume: self.profile.settings.volume,
            enabled: self.audio_enabled,
        }
    }

    fn effects<'a>(&self, ctx: &'a mut GameContext) -> EffectSink<'a> {
        EffectSink::new(ctx, self.voice(), self.profile.settings.haptic_feedback)
    }

    fn load_progress(&mut self) {
        match self.store.load() {
            Ok(Some(saved)) => {
                self.profile.apply(&saved);
                log::info!(
                    "progress loaded: {} crystals, {} themes unlocked",
                    self.profile.crystal_shards,
                    self.profile.catalog.unlocked_count()
                );
            }
            Ok(None) => log::info!("no saved progress, starting fresh"),
            Err(e) => log::warn!("could not load progress, using defaults: {}", e),
        }
    }

    fn save_progress(&mut self) {
        if let Err(e) = self.store.save(&self.profile.snapshot()) {
            log::warn!("could not save progress: {}", e);
        }
    }

    /// Announce a screen change and drop timers that belong to the box being left.
    fn go(&mut self, ctx: &mut GameContext, transition: Option<Transition>) {
        let Some(t) = transition else {
            return;
        };
        if matches!(t.to, Screen::Menu | Screen::Victory) {
            self.timers.cancel_kind(TimerKind::Victory);
            if self.timers.cancel_kind(TimerKind::HintDismiss) > 0 {
                ctx.emit_event(GameEvent::HintDismissed);
            }
        }
        if matches!(t.to, Screen::Menu | Screen::Preview) {
            self.scene.clear();
        }
        ctx.emit_event(GameEvent::Screen(t.to));
    }

    fn handle_command(&mut self, ctx: &mut GameContext, command: Command) {
        match command {
            Command::SelectTheme(index) => {
                let t = self.session.select_theme(&self.profile.catalog, index);
                self.go(ctx, t);
            }
            Command::Start => {
                let t = self.session.start(&self.profile.catalog, &mut self.rng);
                if t.is_some() {
                    layout::populate(&mut self.scene, self.session.puzzles());
                    self.go(ctx, t);
                    ctx.emit_event(GameEvent::Clock { seconds: 0 });
                }
            }
            Command::TogglePause => {
                let t = self.session.toggle_pause();
                self.go(ctx, t);
            }
            Command::ResetPuzzles => {
                if self.session.reset_puzzles() {
                    self.timers.cancel_kind(TimerKind::Victory);
                    layout::populate(&mut self.scene, self.session.puzzles());
                    ctx.emit_event(GameEvent::PuzzlesReset);
                    ctx.emit_event(GameEvent::Clock { seconds: 0 });
                }
            }
            Command::BackToMenu => {
                let t = self.session.back_to_menu();
                self.go(ctx, t);
            }
            Command::Continue => {
                let t = self.session.continue_next(&self.profile.catalog);
                self.go(ctx, t);
            }
            Command::Replay => {
                let t = self.session.replay();
                self.go(ctx, t);
            }
            Command::Hint => self.show_hint(ctx),
            Command::ToggleAudio => {
                self.audio_enabled = !self.audio_enabled;
                log::info!("audio {}", if self.audio_enabled { "on" } else { "off" });
            }
            Command::SetVolume(volume) => {
                self.profile.settings.set_volume(volume);
                self.save_progress();
            }
            Command::SetHighContrast(on) => {
                self.profile.settings.high_contrast = on;
                self.save_progress();
            }
            Command::SetHaptics(on) => {
                self.profile.settings.haptic_feedback = on;
                self.save_progress();
            }
            Command::SetAnimationSpeed(speed) => {
                self.profile.settings.animation_speed = speed;
                self.save_progress();
            }
        }
    }

    fn handle_pick(&mut self, ctx: &mut GameContext, pick: PickEvent) {
        let voice = self.voice();
        let haptics = self.profile.settings.haptic_feedback;
        let mut fx = EffectSink::new(ctx, voice, haptics);
        let Some(done) = self.session.pick(pick, &mut fx) else {
            return;
        };
        layout::apply(&mut self.scene, &done);
        if !done.just_solved {
            return;
        }

        let achievement = match done.feedback.kind() {
            PuzzleKind::ColorPattern => "patternMaster",
            PuzzleKind::ShapeAssembly => "shapeWizard",
            PuzzleKind::SpatialRotation => "spatialGenius",
        };
        if let Some(index) = self.profile.achievements.progress_towards(achievement, 1) {
            self.announce(ctx, index);
        }
        if self.session.all_solved() {
            self.timers.reschedule(TimerKind::Victory, VICTORY_DELAY);
        }
    }

    fn show_hint(&mut self, ctx: &mut GameContext) {
        if !matches!(self.session.screen(), Screen::Preview | Screen::Playing) {
            return;
        }
        let unsolved = self.session.puzzles().is_empty() || self.session.has_unsolved();
        let message = pick_hint(&mut self.rng, unsolved);
        self.hint = message;
        ctx.emit_event(GameEvent::Hint { message });
        self.timers.reschedule(TimerKind::HintDismiss, HINT_SECONDS);
    }

    /// Achievement notification with its jingle; replaces any notification still showing.
    fn announce(&mut self, ctx: &mut GameContext, index: usize) {
        let mut fx = self.effects(ctx);
        fx.event(GameEvent::AchievementUnlocked {
            achievement: index as u32,
        });
        fx.achievement_jingle();
        self.timers.reschedule(TimerKind::AchievementDismiss, ACHIEVEMENT_SECONDS);
    }

    fn on_timer(&mut self, ctx: &mut GameContext, kind: TimerKind) {
        match kind {
            TimerKind::SplashDone => {
                let t = self.session.finish_splash();
                self.go(ctx, t);
            }
            TimerKind::Victory => self.open_box(ctx),
            TimerKind::AchievementDismiss => ctx.emit_event(GameEvent::AchievementDismissed),
            TimerKind::HintDismiss => ctx.emit_event(GameEvent::HintDismissed),
        }
    }

    /// Victory: pay out, count the box, unlock what it unlocks, save.
    fn open_box(&mut self, ctx: &mut GameContext) {
        let Some(theme_id) = self.session.theme_id().map(str::to_owned) else {
            return;
        };
        let elapsed = self.session.elapsed_secs();
        let box_index = self.session.box_index();
        let t = self.session.enter_victory();
        if t.is_none() {
            return;
        }
        self.go(ctx, t);

        let earned = reward(elapsed, box_index);
        self.profile.crystal_shards = self.profile.crystal_shards.saturating_add(earned);
        let completed = self.profile.catalog.mark_box_completed(&theme_id);
        log::info!(
            "box {} of {} opened in {}s: +{} crystals",
            box_index + 1,
            theme_id,
            elapsed,
            earned
        );
        ctx.emit_event(GameEvent::Victory {
            earned,
            total: self.profile.crystal_shards,
        });
        self.effects(ctx).victory_melody();

        if let Some(next) = check_theme_unlock(&mut self.profile.catalog, &theme_id) {
            if let Some(index) = self.profile.catalog.index_of(&next) {
                ctx.emit_event(GameEvent::ThemeUnlocked {
                    theme: index as u32,
                });
            }
        }

        let mut unlocked = Vec::new();
        let tracker = &mut self.profile.achievements;
        if completed == Some(1) {
            unlocked.extend(tracker.unlock_direct("firstBox"));
        }
        if elapsed < SPEED_SOLVE_SECONDS {
            unlocked.extend(tracker.unlock_direct("speedSolver"));
        }
        unlocked.extend(tracker.progress_towards("collector", self.profile.crystal_shards));
        if self.profile.catalog.unlocked_count() >= self.profile.catalog.len() {
            unlocked.extend(tracker.unlock_direct("explorer"));
        }
        if self.profile.catalog.all_finished() {
            unlocked.extend(tracker.unlock_direct("perfectionist"));
        }
        for index in unlocked {
            self.announce(ctx, index);
        }

        self.save_progress();
    }
}

impl Game for MindVault {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut GameContext) {
        self.load_progress();
        self.timers.schedule(TimerKind::SplashDone, SPLASH_SECONDS);
        ctx.emit_event(GameEvent::Screen(self.session.screen()));
    }

    fn update(&mut self, ctx: &mut GameContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Pick(pick) => self.handle_pick(ctx, pick),
                InputEvent::PickEntity { id } => {
                    match self.scene.get(id).and_then(|e| e.pick_event()) {
                        Some(pick) => self.handle_pick(ctx, pick),
                        None => log::debug!("entity {:?} is not pickable", id),
                    }
                }
                InputEvent::Custom { kind, a, .. } => match Command::from_custom(kind, a) {
                    Some(command) => self.handle_command(ctx, command),
                    None => log::debug!("unknown custom event {} ({})", kind, a),
                },
                InputEvent::Blur => {
                    let t = self.session.pause();
                    self.go(ctx, t);
                }
                InputEvent::Focus => {
                    let t = self.session.resume();
                    self.go(ctx, t);
                }
            }
        }

        // Paused freezes every pending timer along with the clock.
        if self.session.screen() == Screen::Paused {
            return;
        }
        for kind in self.timers.tick(ctx.dt) {
            self.on_timer(ctx, kind);
        }
        if let Some(seconds) = self.session.tick(ctx.dt) {
            ctx.emit_event(GameEvent::Clock { seconds });
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        let theme = self
            .session
            .theme_id()
            .and_then(|id| self.profile.catalog.get(id));
        let palette = theme.map(|t| t.palette.as_slice()).unwrap_or(&[]);
        build_render_buffer(self.scene.iter(), palette, &mut ctx.frame.buffer);

        let view = &mut ctx.frame.view;
        view.screen = self.session.screen();
        view.fill_themes(&self.profile.catalog);
        view.fill_achievements(&self.profile.achievements);
        view.active_box = theme.map(|t| ActiveBox {
            theme_id: t.id.clone(),
            theme_name: t.name.clone(),
            box_index: self.session.box_index(),
            boxes: t.boxes,
            accent: t.accent,
            palette: t.palette.clone(),
        });
        view.clock = format_clock(self.session.elapsed_secs());
        view.crystal_shards = self.profile.crystal_shards;
        view.indicators.clear();
        view.indicators
            .extend(self.session.puzzles().iter().map(|(&slot, p)| Indicator {
                slot,
                kind: p.kind(),
                status: if p.is_solved() {
                    IndicatorStatus::Completed
                } else {
                    IndicatorStatus::Active
                },
            }));
        view.hint = self
            .timers
            .is_pending(TimerKind::HintDismiss)
            .then(|| hint_text(self.hint).to_owned());
        view.settings = self.profile.settings.clone();
        view.audio_enabled = self.audio_enabled;
    }
}
