//! Effect requests: tones, haptic pulses, particle bursts.
//!
//! The core never plays audio or vibrates anything itself. It queues
//! requests on the `GameContext` and the browser side decides whether it can
//! honour them.

use crate::api::game::GameContext;
use crate::api::types::{GameEvent, SlotIndex, SoundEvent};
use crate::catalog::Waveform;

/// Click tone of dial 0; each further dial is `DIAL_STEP_HZ` higher.
pub const DIAL_BASE_HZ: f32 = 261.63;
pub const DIAL_STEP_HZ: f32 = 50.0;
/// Click tone of the first shape; each further shape is `SHAPE_STEP_HZ` higher.
pub const SHAPE_BASE_HZ: f32 = 329.63;
pub const SHAPE_STEP_HZ: f32 = 100.0;
pub const CYLINDER_HZ: f32 = 440.0;
pub const CLICK_DURATION: f32 = 0.2;

/// C-E-G-C, played when a puzzle is solved.
pub const SUCCESS_CHORD: [f32; 4] = [261.63, 329.63, 392.00, 523.25];
const SUCCESS_DURATION: f32 = 0.5;
const SUCCESS_SPACING: f32 = 0.1;

pub const VICTORY_MELODY: [f32; 8] = [523.25, 587.33, 659.25, 698.46, 783.99, 880.00, 987.77, 1046.50];
const VICTORY_DURATION: f32 = 0.4;
const VICTORY_SPACING: f32 = 0.2;

/// (frequency, duration, delay)
const ACHIEVEMENT_JINGLE: [(f32, f32, f32); 2] = [(659.25, 0.3, 0.0), (783.99, 0.5, 0.2)];

/// Length of one haptic pulse at intensity 1.
pub const HAPTIC_PULSE_MS: u32 = 50;

/// Peak gain at full volume.
const MAX_GAIN: f32 = 0.3;

/// How tones should sound right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    /// 0-100.
    pub volume: u8,
    pub enabled: bool,
}

impl Voice {
    pub fn gain(&self) -> f32 {
        self.volume.min(100) as f32 / 100.0 * MAX_GAIN
    }

    /// A single note, or `None` when audio is off.
    pub fn note(&self, frequency: f32, duration: f32, delay: f32) -> Option<SoundEvent> {
        if !self.enabled {
            return None;
        }
        Some(SoundEvent {
            frequency,
            duration,
            delay,
            gain: self.gain(),
            waveform: self.waveform.code(),
        })
    }
}

/// Writes effect requests for one interaction into the context.
pub struct EffectSink<'a> {
    ctx: &'a mut GameContext,
    voice: Voice,
    haptics: bool,
}

impl<'a> EffectSink<'a> {
    pub fn new(ctx: &'a mut GameContext, voice: Voice, haptics: bool) -> Self {
        Self { ctx, voice, haptics }
    }

    pub fn tone(&mut self, frequency: f32, duration: f32) {
        if let Some(note) = self.voice.note(frequency, duration, 0.0) {
            self.ctx.emit_sound(note);
        }
    }

    /// Notes played one after another, `spacing` seconds apart.
    pub fn arpeggio(&mut self, notes: &[f32], duration: f32, spacing: f32) {
        for (i, &frequency) in notes.iter().enumerate() {
            if let Some(note) = self.voice.note(frequency, duration, i as f32 * spacing) {
                self.ctx.emit_sound(note);
            }
        }
    }

    pub fn success_chord(&mut self) {
        self.arpeggio(&SUCCESS_CHORD, SUCCESS_DURATION, SUCCESS_SPACING);
    }

    pub fn victory_melody(&mut self) {
        self.arpeggio(&VICTORY_MELODY, VICTORY_DURATION, VICTORY_SPACING);
    }

    pub fn achievement_jingle(&mut self) {
        for (frequency, duration, delay) in ACHIEVEMENT_JINGLE {
            if let Some(note) = self.voice.note(frequency, duration, delay) {
                self.ctx.emit_sound(note);
            }
        }
    }

    /// Vibration pulse; dropped when the player turned haptics off.
    pub fn haptic(&mut self, intensity: u32) {
        if self.haptics {
            self.ctx.emit_event(GameEvent::Haptic {
                millis: intensity * HAPTIC_PULSE_MS,
            });
        }
    }

    pub fn particles(&mut self, slot: SlotIndex) {
        self.ctx.emit_event(GameEvent::Particles { slot });
    }

    pub fn event(&mut self, event: GameEvent) {
        self.ctx.emit_event(event);
    }
}
